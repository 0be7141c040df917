//! Construction defaults and the money factory.
//!
//! Defaults are an explicit configuration record rather than literals baked
//! into every constructor. Host applications build one factory at startup
//! and construct values through it.

use serde::{Deserialize, Serialize};

use crate::currency::{self, Currency};
use crate::error::{MoneyError, MoneyResult};
use crate::locale::{self, Locale};
use crate::money::{AmountSource, Money};

/// Fallback metadata applied when a currency code or locale tag is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyConfig {
    pub default_currency: String,
    pub default_locale: String,
}

impl Default for MoneyConfig {
    fn default() -> Self {
        Self {
            default_currency: "USD".to_string(),
            default_locale: "en_US".to_string(),
        }
    }
}

/// Construction entry point carrying resolved defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoneyFactory {
    default_currency: &'static Currency,
    default_locale: &'static Locale,
}

impl Default for MoneyFactory {
    fn default() -> Self {
        Self {
            default_currency: &currency::USD,
            default_locale: &locale::EN_US,
        }
    }
}

impl MoneyFactory {
    /// Resolve a configuration record into a factory.
    ///
    /// Fails with `InvalidCurrency` when the configured default currency is
    /// not a bundled code. An unknown default locale falls back to `en_US`
    /// conventions.
    pub fn new(config: &MoneyConfig) -> MoneyResult<Self> {
        let default_currency = currency::find(&config.default_currency)
            .ok_or_else(|| MoneyError::invalid_currency(&config.default_currency))?;
        Ok(Self {
            default_currency,
            default_locale: locale::resolve(&config.default_locale),
        })
    }

    pub fn default_currency(&self) -> &'static Currency {
        self.default_currency
    }

    pub fn default_locale(&self) -> &'static Locale {
        self.default_locale
    }

    /// Build a value with the default locale.
    ///
    /// `amount` accepts minor-unit integers, integer text, or another
    /// `Money` (copying its numeric amount). An empty `code` coerces to the
    /// default currency.
    pub fn money(&self, amount: impl Into<AmountSource>, code: &str) -> MoneyResult<Money> {
        self.money_with_locale(amount, code, "")
    }

    /// Build a value from a known minor-unit count.
    pub fn from_minor(&self, amount: i128, code: &str) -> MoneyResult<Money> {
        self.money(amount, code)
    }

    /// Build a value with an explicit locale tag; empty inputs coerce to the
    /// configured defaults.
    pub fn money_with_locale(
        &self,
        amount: impl Into<AmountSource>,
        code: &str,
        tag: &str,
    ) -> MoneyResult<Money> {
        let minor = amount.into().into_minor()?;
        Ok(Money::with_currency(
            minor,
            self.resolve_currency(code)?,
            Some(self.resolve_locale(tag)),
        ))
    }

    /// Build a value with no locale at all: formatting stays plain (no
    /// grouping, no symbol).
    pub fn plain(&self, amount: impl Into<AmountSource>, code: &str) -> MoneyResult<Money> {
        let minor = amount.into().into_minor()?;
        Ok(Money::with_currency(minor, self.resolve_currency(code)?, None))
    }

    /// Relabel an existing value: the amount is kept bit-for-bit, only the
    /// currency/locale metadata changes. Empty inputs coerce to the defaults.
    pub fn localize(&self, value: Money, code: &str, tag: &str) -> MoneyResult<Money> {
        Ok(value.relabel(self.resolve_currency(code)?, Some(self.resolve_locale(tag))))
    }

    fn resolve_currency(&self, code: &str) -> MoneyResult<&'static Currency> {
        if code.trim().is_empty() {
            return Ok(self.default_currency);
        }
        currency::find(code).ok_or_else(|| MoneyError::invalid_currency(code))
    }

    fn resolve_locale(&self, tag: &str) -> &'static Locale {
        if tag.trim().is_empty() {
            self.default_locale
        } else {
            locale::resolve(tag)
        }
    }
}
