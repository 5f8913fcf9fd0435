// ============================================================================
// Money Configuration
// Default precision and rounding applied to newly created amounts
// ============================================================================

use crate::error::{MoneyError, MoneyResult};
use crate::numeric::{Decimal, RoundingMode, RoundingPolicy, DEFAULT_PRECISION};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Defaults used when creating [`Money`](super::Money) values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MoneyConfig {
    /// Number of fractional digits kept after each operation
    pub precision: u32,

    /// Rounding applied when digits are discarded
    pub rounding_mode: RoundingMode,
}

impl MoneyConfig {
    /// Create a new configuration with required parameters
    pub fn new(precision: u32, rounding_mode: RoundingMode) -> Self {
        Self {
            precision,
            rounding_mode,
        }
    }

    /// Builder method: Set precision
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Builder method: Set rounding mode
    pub fn with_rounding_mode(mut self, mode: RoundingMode) -> Self {
        self.rounding_mode = mode;
        self
    }

    /// The rounding policy these settings describe
    pub fn policy(&self) -> RoundingPolicy {
        RoundingPolicy::new(self.rounding_mode, self.precision)
    }

    /// Validate the configuration
    pub fn validate(&self) -> MoneyResult<()> {
        if self.precision > Decimal::MAX_SCALE {
            tracing::warn!(precision = self.precision, "rejected money configuration");
            return Err(MoneyError::InvalidConfig(format!(
                "precision {} exceeds the maximum of {}",
                self.precision,
                Decimal::MAX_SCALE
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON document such as
    /// `{"precision": 2, "rounding_mode": "ToNearestAway"}`.
    ///
    /// Missing fields take their default values.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> MoneyResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| MoneyError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for MoneyConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION, RoundingMode::ToNearestEven)
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl MoneyConfig {
    /// Banking-style configuration
    /// - 4 fractional digits
    /// - Half-to-even rounding
    pub fn banking() -> Self {
        Self::default()
    }

    /// Accounting-style configuration
    /// - 2 fractional digits
    /// - Half away from zero
    pub fn accounting() -> Self {
        Self::new(2, RoundingMode::ToNearestAway)
    }

    /// Retail price configuration
    /// - 2 fractional digits
    /// - Half-to-even rounding
    pub fn retail() -> Self {
        Self::new(2, RoundingMode::ToNearestEven)
    }
}
