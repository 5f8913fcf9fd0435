// ============================================================================
// Digit Grouping
// Locale-style separators inserted into the integer part of a number
// ============================================================================

use smallvec::SmallVec;

/// Insert `separator` into a string of ASCII digits according to `sizes`.
///
/// Sizes are consumed right to left starting at the decimal point:
/// - a size `s > 0` places a separator `s` digits left of the current edge,
///   provided more than `s` digits remain;
/// - a size of `0` stops grouping and leaves the remaining digits as one block;
/// - once the list is exhausted, a non-zero last size repeats until no digits
///   are left ungrouped.
///
/// # Example
/// ```
/// use money_format::format::group_digits;
///
/// assert_eq!(group_digits("1234567890", &[3, 2, 0], ","), "12345,67,890");
/// assert_eq!(group_digits("1234567890", &[3, 2], ","), "1,23,45,67,890");
/// assert_eq!(group_digits("2222", &[3], ","), "2,222");
/// ```
pub fn group_digits(digits: &str, sizes: &[usize], separator: &str) -> String {
    // Separator positions, from right to left
    let mut boundaries: SmallVec<[usize; 8]> = SmallVec::new();
    let mut index = digits.len();
    let mut last_size = 0;

    for &size in sizes {
        if size == 0 {
            last_size = 0;
            break;
        }
        last_size = size;
        if index > size {
            index -= size;
            boundaries.push(index);
        }
    }

    if last_size > 0 {
        while index > last_size {
            index -= last_size;
            boundaries.push(index);
        }
    }

    let mut grouped = String::with_capacity(digits.len() + boundaries.len() * separator.len());
    let mut start = 0;
    for &boundary in boundaries.iter().rev() {
        grouped.push_str(&digits[start..boundary]);
        grouped.push_str(separator);
        start = boundary;
    }
    grouped.push_str(&digits[start..]);
    grouped
}
