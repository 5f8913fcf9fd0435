// ============================================================================
// Money Format Library
// Exact decimal money arithmetic with locale-style formatting
// ============================================================================

//! # Money Format
//!
//! Currency-aware arithmetic on exact decimals, and pattern-driven number and
//! currency formatting with locale-style digit grouping.
//!
//! ## Features
//!
//! - **Exact base-10 arithmetic**: no binary floating point between operations
//! - **Rounding policies**: half-even, half-away, toward zero, away from zero
//! - **Exchange** through a common reference unit before mixed-currency math
//! - **Formatting** with patterns, separators and repeating group sizes
//! - **Reference data** registry of languages, currencies, countries, cultures
//!
//! ## Example
//!
//! ```rust
//! use money_format::prelude::*;
//!
//! let registry = Registry::builtin();
//! let cny = ExchangeableCurrency::must_new(&registry, "CNY", 1.0);
//! let usd = ExchangeableCurrency::must_new(&registry, "USD", 0.15);
//!
//! // Mixed-currency arithmetic exchanges the operand first
//! let mut total = Money::must_new(&cny, 100.0);
//! total.add(&Money::must_new(&usd, 100.0)).unwrap();
//! assert_eq!(total.to_string(), "CNY 766.6667");
//!
//! // Formatting never changes the stored amount
//! let culture = registry.lookup_culture("en-US").unwrap();
//! assert_eq!(total.format(&culture.formatter.currency), "$766.67");
//! ```

pub mod domain;
pub mod error;
pub mod format;
pub mod interfaces;
pub mod numeric;
pub mod reference;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Currency, ExchangeableCurrency, Money, MoneyConfig};
    pub use crate::error::{MoneyError, MoneyResult};
    pub use crate::format::{CurrencyFormatter, Formatter, NumberFormatter};
    pub use crate::interfaces::{CurrencyLookup, LanguageLookup};
    pub use crate::numeric::{Decimal, NumericError, RoundingMode, RoundingPolicy};
    pub use crate::reference::{Country, Culture, Language, Registry};
}
