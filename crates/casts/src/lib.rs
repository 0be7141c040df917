//! `coinage-casts` — storage casts for monetary values.
//!
//! The adapter layer between an integer persistence column and
//! [`coinage_money::Money`]: a read/write cast plus the registry a host
//! persistence layer dispatches through.

pub mod cast;
pub mod error;
pub mod registry;

pub use cast::{CastInput, MoneyCast};
pub use error::{CastError, CastResult};
pub use registry::{
    CastDefinition, CastRegistry, MONEY_TAG, ReadFn, Validator, WriteFn, register_money_cast,
};
