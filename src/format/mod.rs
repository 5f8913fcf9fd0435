// ============================================================================
// Format Module
// Pure rendering of decimal values into locale-style text
// ============================================================================
//
// Formatting steps:
// 1. Round |value| half-to-even to the configured fractional digits
// 2. Group the integer digits right to left by the configured sizes
// 3. Join with the decimal separator
// 4. Substitute into the positive or negative pattern
//
// No global or locale state is consulted beyond the formatter passed in.

mod formatter;
mod grouping;

pub use formatter::{
    CurrencyFormatter, Formatter, NumberFormatter, SYMBOL_PLACEHOLDER, VALUE_PLACEHOLDER,
};
pub use grouping::group_digits;
