//! `coinage-money` — currency-aware monetary values.
//!
//! This crate contains the **pure value layer** (no storage concerns): an
//! exact minor-unit [`Money`] type, bundled currency and locale metadata, and
//! an explicit, enumerated operation set. Persistence adapters live in
//! `coinage-casts`.

mod allocate;
mod format;

pub mod config;
pub mod currency;
pub mod error;
pub mod locale;
pub mod money;

pub use config::{MoneyConfig, MoneyFactory};
pub use currency::Currency;
pub use error::{MoneyError, MoneyResult};
pub use locale::{Locale, SymbolPosition};
pub use money::{AmountSource, Money};
