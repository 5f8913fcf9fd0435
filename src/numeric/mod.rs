// ============================================================================
// Numeric Module
// Exact base-10 arithmetic for money calculations
// ============================================================================
//
// This module provides:
// - Decimal: exact decimal number backed by rust_decimal
// - RoundingMode / RoundingPolicy: rounding strategies with a target precision
// - NumericError: Error types for arithmetic operations
//
// Design principles:
// - No floating-point operations between internal steps
// - f64 only at API boundaries (from_f64 / to_f64)
// - All fallible arithmetic returns Result (no panics)

mod decimal;
mod errors;
pub mod rounding;

pub use decimal::Decimal;
pub use errors::{NumericError, NumericResult};
pub use rounding::{RoundingMode, RoundingPolicy, DEFAULT_PRECISION};
