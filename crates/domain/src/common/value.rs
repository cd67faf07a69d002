//! Predicates and conversions over dynamic JSON values.
//!
//! `serde_json::Value` stands in for the loosely typed values these helpers
//! accept: numbers may arrive as strings, flags as `"yes"` or `true`, and
//! payloads as JSON text or already-parsed structures.

use serde_json::Value;

use crate::error::UtilsError;

/// Strings accepted as `true` by [`to_boolean`] (compared case-insensitively).
const TRUE_WORDS: [&str; 4] = ["true", "y", "yes", "1"];

/// Returns true if `value` is a finite, non-negative number.
///
/// Numeric strings are accepted when the whole (trimmed) string parses as a
/// float. Negative numbers are rejected.
///
/// # Examples
///
/// ```
/// use dputils_domain::common::is_number;
/// use serde_json::json;
///
/// assert!(is_number(&json!(4.2)));
/// assert!(is_number(&json!("17")));
/// assert!(!is_number(&json!(-1)));
/// assert!(!is_number(&json!("12abc")));
/// ```
pub fn is_number(value: &Value) -> bool {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    matches!(number, Some(n) if n.is_finite() && n >= 0.0)
}

/// Interprets `value` as a boolean flag.
///
/// True for `Value::Bool(true)` and for the strings `true`, `y`, `yes` and
/// `1` in any case. Numeric `1` is *not* true.
pub fn to_boolean(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => {
            let lowered = s.to_lowercase();
            TRUE_WORDS.contains(&lowered.as_str())
        }
        _ => false,
    }
}

/// Truthiness of a dynamic value: `null`, `false`, `0`, NaN and `""` are
/// false, everything else (including empty arrays and objects) is true.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Parses JSON text, passing already-structured values through untouched.
///
/// # Errors
///
/// Returns `UtilsError::InvalidInput` when `value` is a string that is not
/// valid JSON.
pub fn parse_json(value: Value) -> Result<Value, UtilsError> {
    match value {
        Value::String(text) => Ok(serde_json::from_str(&text)?),
        other => Ok(other),
    }
}

/// Returns true if `value` is an array.
pub fn is_array(value: &Value) -> bool {
    value.is_array()
}

/// Checks whether a value is empty.
///
/// - absent and `null` are empty
/// - strings and arrays are empty when their length is zero
/// - objects are empty when they have no own keys
/// - numbers and booleans carry no own properties and count as empty
pub fn is_empty(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Object(map)) => map.is_empty(),
        Some(Value::Number(_)) | Some(Value::Bool(_)) => true,
    }
}
