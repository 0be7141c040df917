//! The money storage cast: raw integers in, raw integers out.
//!
//! Persistence never sees the value type. Reading a column builds a `Money`
//! through the host's factory (defaults included); writing extracts the
//! exact minor-unit amount, or passes an already-raw integer through
//! unchanged.

use tracing::warn;

use coinage_money::{Money, MoneyFactory};

use crate::error::{CastError, CastResult};

/// Value handed to [`MoneyCast::to_storage`]: either a wrapped monetary
/// value or an already-raw minor-unit integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastInput {
    Money(Money),
    Raw(i64),
}

impl From<Money> for CastInput {
    fn from(value: Money) -> Self {
        CastInput::Money(value)
    }
}

impl From<i64> for CastInput {
    fn from(value: i64) -> Self {
        CastInput::Raw(value)
    }
}

/// Attribute cast between integer storage columns and [`Money`] values.
#[derive(Debug, Clone, Copy)]
pub struct MoneyCast {
    factory: MoneyFactory,
}

impl MoneyCast {
    pub fn new(factory: MoneyFactory) -> Self {
        Self { factory }
    }

    pub fn factory(&self) -> &MoneyFactory {
        &self.factory
    }

    /// Build a value from a persisted minor-unit integer.
    ///
    /// A missing currency resolves to the factory default, matching the
    /// empty-code coercion of construction.
    pub fn from_storage(&self, raw: i64, currency: Option<&str>) -> CastResult<Money> {
        Ok(self.factory.money(raw, currency.unwrap_or(""))?)
    }

    /// Extract the exact integer to persist.
    pub fn to_storage(&self, input: CastInput) -> CastResult<i64> {
        match input {
            CastInput::Raw(raw) => Ok(raw),
            CastInput::Money(value) => i64::try_from(value.amount()).map_err(|_| {
                warn!(
                    currency = value.currency().code,
                    "monetary amount exceeds integer storage range"
                );
                CastError::StorageRange(value.amount())
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinage_money::{Money, MoneyError, currency};
    use proptest::prelude::*;

    fn cast() -> MoneyCast {
        MoneyCast::new(MoneyFactory::default())
    }

    #[test]
    fn from_storage_applies_the_default_currency() {
        let value = cast().from_storage(1050, None).unwrap();
        assert_eq!(value.amount(), 1050);
        assert_eq!(value.currency().code, "USD");
        assert_eq!(value.locale().map(|l| l.tag), Some("en_US"));
    }

    #[test]
    fn from_storage_honors_an_explicit_currency() {
        let value = cast().from_storage(1050, Some("EUR")).unwrap();
        assert_eq!(value.currency().code, "EUR");
    }

    #[test]
    fn from_storage_rejects_unknown_currency() {
        assert_eq!(
            cast().from_storage(1, Some("XYZ")),
            Err(CastError::Money(MoneyError::InvalidCurrency(
                "XYZ".to_string()
            )))
        );
    }

    #[test]
    fn to_storage_extracts_the_exact_amount() {
        let value = cast().from_storage(500, None).unwrap();
        assert_eq!(cast().to_storage(value.into()).unwrap(), 500);
    }

    #[test]
    fn to_storage_passes_raw_integers_through() {
        assert_eq!(cast().to_storage(1234i64.into()).unwrap(), 1234);
    }

    #[test]
    fn to_storage_rejects_amounts_beyond_the_column_range() {
        let oversized = Money::with_currency(i128::from(i64::MAX) + 1, &currency::USD, None);
        assert_eq!(
            cast().to_storage(oversized.into()),
            Err(CastError::StorageRange(i128::from(i64::MAX) + 1))
        );
    }

    proptest! {
        /// Property: storage round-trips are lossless across the full column
        /// range.
        #[test]
        fn round_trip_is_lossless(raw in proptest::num::i64::ANY) {
            let cast = cast();
            let value = cast.from_storage(raw, None).unwrap();
            prop_assert_eq!(cast.to_storage(value.into()).unwrap(), raw);
        }
    }
}
