// ============================================================================
// Domain Models Module
// Currencies, money values and their configuration
// ============================================================================

pub mod config;
pub mod currency;
pub mod money;

pub use config::MoneyConfig;
pub use currency::{Currency, ExchangeableCurrency};
pub use money::Money;
