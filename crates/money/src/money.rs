//! The monetary value type.
//!
//! `Money` is an immutable value object: an exact minor-unit amount plus
//! currency and locale metadata. Every operation is pure and returns a new
//! value; a failed operation leaves its inputs untouched. Amount math runs on
//! integers and `rust_decimal`, never on floats.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::allocate::allocate_minor;
use crate::currency::Currency;
use crate::error::{MoneyError, MoneyResult};
use crate::format::format_money;
use crate::locale::Locale;
use crate::{currency, locale};

/// Raw amount input accepted by the factory constructors.
///
/// Covers the three construction sources: an integer count of minor units, a
/// textual integer, and another `Money` (whose numeric amount is copied, not
/// its formatted string).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountSource {
    Minor(i128),
    Text(String),
}

impl AmountSource {
    /// Resolve to an exact minor-unit integer.
    pub fn into_minor(self) -> MoneyResult<i128> {
        match self {
            AmountSource::Minor(minor) => Ok(minor),
            AmountSource::Text(text) => text
                .trim()
                .parse::<i128>()
                .map_err(|_| MoneyError::invalid_amount(text)),
        }
    }
}

impl From<i128> for AmountSource {
    fn from(value: i128) -> Self {
        AmountSource::Minor(value)
    }
}

impl From<i64> for AmountSource {
    fn from(value: i64) -> Self {
        AmountSource::Minor(i128::from(value))
    }
}

impl From<i32> for AmountSource {
    fn from(value: i32) -> Self {
        AmountSource::Minor(i128::from(value))
    }
}

impl From<u64> for AmountSource {
    fn from(value: u64) -> Self {
        AmountSource::Minor(i128::from(value))
    }
}

impl From<&str> for AmountSource {
    fn from(value: &str) -> Self {
        AmountSource::Text(value.to_string())
    }
}

impl From<String> for AmountSource {
    fn from(value: String) -> Self {
        AmountSource::Text(value)
    }
}

impl From<&Money> for AmountSource {
    fn from(value: &Money) -> Self {
        AmountSource::Minor(value.amount())
    }
}

impl From<Money> for AmountSource {
    fn from(value: Money) -> Self {
        AmountSource::Minor(value.amount())
    }
}

/// A currency-aware monetary value.
///
/// Monetary equality covers `(amount, currency)`; the locale is display
/// metadata and two values differing only in locale compare equal.
#[derive(Debug, Clone, Copy)]
pub struct Money {
    amount: i128,
    currency: &'static Currency,
    locale: Option<&'static Locale>,
}

impl Money {
    /// Build from pre-resolved metadata, used as-is.
    pub fn with_currency(
        amount: i128,
        currency: &'static Currency,
        locale: Option<&'static Locale>,
    ) -> Self {
        Self {
            amount,
            currency,
            locale,
        }
    }

    /// Exact minor-unit amount.
    pub fn amount(&self) -> i128 {
        self.amount
    }

    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    pub fn locale(&self) -> Option<&'static Locale> {
        self.locale
    }

    /// Replace currency/locale metadata, keeping the amount bit-for-bit.
    ///
    /// This is relabeling, not currency conversion: 1050 minor units stay
    /// 1050 minor units whatever the new currency. The coercing, code-taking
    /// form lives on [`MoneyFactory::localize`](crate::MoneyFactory::localize).
    pub fn relabel(&self, currency: &'static Currency, locale: Option<&'static Locale>) -> Self {
        Self {
            amount: self.amount,
            currency,
            locale,
        }
    }

    /// The exact major-unit value (e.g. 1050 minor USD → 10.50).
    ///
    /// Fails with `AmountOverflow` for amounts beyond `Decimal` range.
    pub fn to_decimal(&self) -> MoneyResult<Decimal> {
        Decimal::try_from_i128_with_scale(self.amount, self.currency.exponent)
            .map_err(|_| MoneyError::AmountOverflow)
    }

    /// The major-unit value narrowed to a float.
    ///
    /// Display/interop only; callers needing exactness use [`Money::amount`]
    /// or [`Money::to_decimal`].
    pub fn decimal(&self) -> f64 {
        match self.to_decimal() {
            Ok(exact) => exact.to_f64().unwrap_or(f64::NAN),
            // Beyond Decimal range the float is approximate either way.
            Err(_) => self.amount as f64 / 10f64.powi(self.currency.exponent as i32),
        }
    }

    /// Display symbol of the current currency.
    pub fn symbol(&self) -> MoneyResult<&'static str> {
        if self.currency.symbol.is_empty() {
            return Err(MoneyError::unknown_currency(self.currency.code));
        }
        Ok(self.currency.symbol)
    }

    /// Formatted display string; also the `Display` impl.
    ///
    /// With a locale set this applies that locale's separators and symbol
    /// placement; without one it renders plain digits with no symbol.
    pub fn format(&self) -> String {
        format_money(self)
    }

    fn ensure_same_currency(&self, other: &Money) -> MoneyResult<()> {
        if self.currency.code != other.currency.code {
            return Err(MoneyError::CurrencyMismatch {
                left: self.currency.code,
                right: other.currency.code,
            });
        }
        Ok(())
    }

    /// Sum of two same-currency values.
    pub fn add(self, other: Money) -> MoneyResult<Money> {
        self.ensure_same_currency(&other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(MoneyError::AmountOverflow)?;
        Ok(self.with_amount(amount))
    }

    /// Difference of two same-currency values.
    pub fn subtract(self, other: Money) -> MoneyResult<Money> {
        self.ensure_same_currency(&other)?;
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or(MoneyError::AmountOverflow)?;
        Ok(self.with_amount(amount))
    }

    /// Scale by a decimal factor, rounding minor units half-to-even.
    pub fn multiply(self, factor: Decimal) -> MoneyResult<Money> {
        let minor = Decimal::try_from_i128_with_scale(self.amount, 0)
            .map_err(|_| MoneyError::AmountOverflow)?;
        let scaled = minor.checked_mul(factor).ok_or(MoneyError::AmountOverflow)?;
        self.from_scaled_minor(scaled)
    }

    /// Divide by a decimal divisor, rounding minor units half-to-even.
    pub fn divide(self, divisor: Decimal) -> MoneyResult<Money> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        let minor = Decimal::try_from_i128_with_scale(self.amount, 0)
            .map_err(|_| MoneyError::AmountOverflow)?;
        let scaled = minor
            .checked_div(divisor)
            .ok_or(MoneyError::AmountOverflow)?;
        self.from_scaled_minor(scaled)
    }

    /// Order two same-currency values.
    pub fn compare(self, other: Money) -> MoneyResult<Ordering> {
        self.ensure_same_currency(&other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// Absolute value.
    pub fn abs(self) -> MoneyResult<Money> {
        let amount = self.amount.checked_abs().ok_or(MoneyError::AmountOverflow)?;
        Ok(self.with_amount(amount))
    }

    /// Sign inversion.
    pub fn negate(self) -> MoneyResult<Money> {
        let amount = self.amount.checked_neg().ok_or(MoneyError::AmountOverflow)?;
        Ok(self.with_amount(amount))
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Split by ratios using the largest remainder method.
    ///
    /// The shares carry this value's currency and locale and always sum back
    /// to the original amount exactly.
    pub fn allocate(&self, ratios: &[u32]) -> MoneyResult<Vec<Money>> {
        let shares = allocate_minor(self.amount, ratios)?;
        Ok(shares.into_iter().map(|s| self.with_amount(s)).collect())
    }

    /// Split into `targets` equal shares.
    pub fn allocate_to(&self, targets: u32) -> MoneyResult<Vec<Money>> {
        if targets == 0 {
            return Err(MoneyError::invalid_ratios("zero allocation targets"));
        }
        self.allocate(&vec![1; targets as usize])
    }

    fn with_amount(&self, amount: i128) -> Money {
        Money {
            amount,
            currency: self.currency,
            locale: self.locale,
        }
    }

    fn from_scaled_minor(&self, scaled: Decimal) -> MoneyResult<Money> {
        let rounded = scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
        let amount = rounded.to_i128().ok_or(MoneyError::AmountOverflow)?;
        Ok(self.with_amount(amount))
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.amount == other.amount && self.currency.code == other.currency.code
    }
}

impl Eq for Money {}

impl Hash for Money {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.amount.hash(state);
        self.currency.code.hash(state);
    }
}

impl PartialOrd for Money {
    /// Ordering is only defined within one currency.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.currency.code == other.currency.code).then(|| self.amount.cmp(&other.amount))
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.format())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Money", 3)?;
        state.serialize_field("minor", &self.amount)?;
        state.serialize_field("currency", self.currency.code)?;
        state.serialize_field("locale", &self.locale.map(|l| l.tag))?;
        state.end()
    }
}

#[derive(Deserialize)]
struct MoneyRepr {
    minor: i128,
    currency: String,
    #[serde(default)]
    locale: Option<String>,
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = MoneyRepr::deserialize(deserializer)?;
        let resolved = currency::find(&repr.currency).ok_or_else(|| {
            D::Error::custom(format!("unrecognized currency code: {:?}", repr.currency))
        })?;
        let resolved_locale = repr.locale.as_deref().map(locale::resolve);
        Ok(Money::with_currency(repr.minor, resolved, resolved_locale))
    }
}
