//! Capability-typed cast registry.
//!
//! Host setup code registers cast definitions explicitly at initialization
//! (no boot-time auto-discovery). The persistence layer then dispatches
//! reads and writes by type tag through the stored definitions.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use coinage_money::{Money, MoneyFactory};

use crate::cast::{CastInput, MoneyCast};
use crate::error::{CastError, CastResult};

/// Validation rule the host applies to incoming raw values before a write.
///
/// The registry only carries this declaration; enforcement happens in the
/// host persistence layer, which sees raw input before it is typed enough
/// for a cast to dispatch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    /// The raw value must be an integer.
    Integer,
}

/// Read side of a cast: persisted integer (+ optional currency) to value.
pub type ReadFn = Arc<dyn Fn(i64, Option<&str>) -> CastResult<Money> + Send + Sync>;

/// Write side of a cast: value (or raw integer) to persisted integer.
pub type WriteFn = Arc<dyn Fn(CastInput) -> CastResult<i64> + Send + Sync>;

/// One registered cast: read/write callbacks plus the validation rule.
#[derive(Clone)]
pub struct CastDefinition {
    pub read: ReadFn,
    pub write: WriteFn,
    pub validator: Validator,
}

impl core::fmt::Debug for CastDefinition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CastDefinition")
            .field("validator", &self.validator)
            .finish_non_exhaustive()
    }
}

/// Registry of cast definitions keyed by type tag.
#[derive(Debug, Default)]
pub struct CastRegistry {
    definitions: HashMap<String, CastDefinition>,
}

impl CastRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition under a type tag, replacing any previous one.
    pub fn register(&mut self, tag: impl Into<String>, definition: CastDefinition) {
        let tag = tag.into();
        debug!(tag = %tag, validator = ?definition.validator, "registered cast");
        self.definitions.insert(tag, definition);
    }

    pub fn definition(&self, tag: &str) -> Option<&CastDefinition> {
        self.definitions.get(tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.definitions.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Dispatch a storage read through the tagged definition.
    pub fn read(&self, tag: &str, raw: i64, currency: Option<&str>) -> CastResult<Money> {
        let definition = self
            .definitions
            .get(tag)
            .ok_or_else(|| CastError::UnknownCast(tag.to_string()))?;
        (definition.read)(raw, currency)
    }

    /// Dispatch a storage write through the tagged definition.
    pub fn write(&self, tag: &str, input: CastInput) -> CastResult<i64> {
        let definition = self
            .definitions
            .get(tag)
            .ok_or_else(|| CastError::UnknownCast(tag.to_string()))?;
        (definition.write)(input)
    }
}

/// Type tag the money cast registers under.
pub const MONEY_TAG: &str = "money";

/// Install the money cast: `{ "money" } -> { read, write, validate: integer }`.
///
/// Called once per host model type at initialization.
pub fn register_money_cast(registry: &mut CastRegistry, factory: MoneyFactory) {
    let cast = MoneyCast::new(factory);
    registry.register(
        MONEY_TAG,
        CastDefinition {
            read: Arc::new(move |raw, currency| cast.from_storage(raw, currency)),
            write: Arc::new(move |input| cast.to_storage(input)),
            validator: Validator::Integer,
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinage_money::{MoneyConfig, MoneyError};

    fn registry() -> CastRegistry {
        let mut registry = CastRegistry::new();
        register_money_cast(&mut registry, MoneyFactory::default());
        registry
    }

    #[test]
    fn money_cast_registers_with_integer_validation() {
        let registry = registry();
        assert_eq!(registry.len(), 1);
        let definition = registry.definition(MONEY_TAG).unwrap();
        assert_eq!(definition.validator, Validator::Integer);
    }

    #[test]
    fn read_builds_a_value_through_the_factory() {
        let value = registry().read(MONEY_TAG, 1050, None).unwrap();
        assert_eq!(value.amount(), 1050);
        assert_eq!(value.currency().code, "USD");
    }

    #[test]
    fn write_round_trips_the_stored_integer() {
        let registry = registry();
        let value = registry.read(MONEY_TAG, 1050, Some("EUR")).unwrap();
        assert_eq!(registry.write(MONEY_TAG, value.into()).unwrap(), 1050);
        assert_eq!(registry.write(MONEY_TAG, 77i64.into()).unwrap(), 77);
    }

    #[test]
    fn unknown_tags_are_rejected() {
        let registry = registry();
        assert_eq!(
            registry.read("uuid", 1, None),
            Err(CastError::UnknownCast("uuid".to_string()))
        );
        assert_eq!(
            registry.write("uuid", 1i64.into()),
            Err(CastError::UnknownCast("uuid".to_string()))
        );
    }

    #[test]
    fn registration_replaces_previous_definitions() {
        let mut registry = registry();
        register_money_cast(&mut registry, MoneyFactory::default());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn read_surfaces_value_layer_errors() {
        let registry = registry();
        assert_eq!(
            registry.read(MONEY_TAG, 1, Some("XYZ")),
            Err(CastError::Money(MoneyError::InvalidCurrency(
                "XYZ".to_string()
            )))
        );
    }

    #[test]
    fn configured_defaults_flow_through_reads() {
        let config = MoneyConfig {
            default_currency: "EUR".to_string(),
            default_locale: "de_DE".to_string(),
        };
        let factory = MoneyFactory::new(&config).unwrap();
        let mut registry = CastRegistry::new();
        register_money_cast(&mut registry, factory);

        let value = registry.read(MONEY_TAG, 123_456, None).unwrap();
        assert_eq!(value.format(), "1.234,56 €");
    }
}
