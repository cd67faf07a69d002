//! String helpers for decimal marks and English ordinals.

/// Characters recognised as decimal marks.
const DECIMAL_MARKS: [char; 3] = ['.', ',', '\''];

/// Returns the first decimal mark (`.`, `,` or `'`) found in `value`.
///
/// Defaults to `.` when none is present.
///
/// # Examples
///
/// ```
/// use dputils_domain::common::get_decimal_mark;
///
/// assert_eq!(get_decimal_mark("1,5"), ',');
/// assert_eq!(get_decimal_mark("1'000.5"), '\'');
/// assert_eq!(get_decimal_mark("15"), '.');
/// ```
pub fn get_decimal_mark(value: &str) -> char {
    value
        .chars()
        .find(|c| DECIMAL_MARKS.contains(c))
        .unwrap_or('.')
}

/// Replaces the first occurrence of `mark` in `value` with `.`.
///
/// Returns `value` unchanged when `mark` does not occur. A mark at index 0
/// is replaced like any other.
///
/// # Examples
///
/// ```
/// use dputils_domain::common::normalize_decimal;
///
/// assert_eq!(normalize_decimal("1,5", ','), "1.5");
/// assert_eq!(normalize_decimal(",5", ','), ".5");
/// assert_eq!(normalize_decimal("15", ','), "15");
/// ```
pub fn normalize_decimal(value: &str, mark: char) -> String {
    if value.contains(mark) {
        value.replacen(mark, ".", 1)
    } else {
        value.to_string()
    }
}

/// Renders `number` followed by its English ordinal suffix.
///
/// Numbers ending in 11, 12 or 13 always take `th`. Negative numbers take
/// the suffix of their magnitude.
///
/// # Examples
///
/// ```
/// use dputils_domain::common::ordinal_with_suffix;
///
/// assert_eq!(ordinal_with_suffix(2), "2nd");
/// assert_eq!(ordinal_with_suffix(112), "112th");
/// ```
pub fn ordinal_with_suffix(number: i64) -> String {
    let magnitude = number.unsigned_abs();
    let suffix = match (magnitude % 10, magnitude % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", number, suffix)
}
