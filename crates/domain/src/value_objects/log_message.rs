//! Payload accepted by the log and log-exception operations

use serde_json::Value;
use std::fmt;

use crate::error::UtilsError;

/// A log payload: plain text or a structured record.
#[derive(Debug, Clone, PartialEq)]
pub enum LogMessage {
    Text(String),
    /// Emitted as-is; must be a JSON object or array.
    Record(Value),
}

impl LogMessage {
    /// Checks the payload shape.
    ///
    /// # Errors
    ///
    /// Returns `UtilsError::InvalidInput` for a record that is a scalar
    /// (`null`, boolean or number) rather than an object or array.
    pub fn validate(&self) -> Result<(), UtilsError> {
        match self {
            Self::Text(_) => Ok(()),
            Self::Record(Value::Object(_)) | Self::Record(Value::Array(_)) => Ok(()),
            Self::Record(other) => Err(UtilsError::invalid_input(format!(
                "log record must be an object or array, got {}",
                other
            ))),
        }
    }

    pub fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }
}

impl fmt::Display for LogMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{}", text),
            Self::Record(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for LogMessage {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for LogMessage {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// JSON strings become text; everything else is a record.
impl From<Value> for LogMessage {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            other => Self::Record(other),
        }
    }
}

impl From<&UtilsError> for LogMessage {
    fn from(err: &UtilsError) -> Self {
        Self::Text(err.to_string())
    }
}

impl From<UtilsError> for LogMessage {
    fn from(err: UtilsError) -> Self {
        Self::Text(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_splits_strings_and_records() {
        assert_eq!(LogMessage::from(json!("hi")), LogMessage::Text("hi".into()));
        assert!(LogMessage::from(json!({"a": 1})).is_record());
    }

    #[test]
    fn test_validate() {
        assert!(LogMessage::from("text").validate().is_ok());
        assert!(LogMessage::from(json!({"a": 1})).validate().is_ok());
        assert!(LogMessage::from(json!([1, 2])).validate().is_ok());
        assert!(LogMessage::from(json!(42)).validate().is_err());
        assert!(LogMessage::from(json!(null)).validate().is_err());
        assert!(LogMessage::from(json!(true)).validate().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(LogMessage::from("plain").to_string(), "plain");
        assert_eq!(LogMessage::from(json!({"a": 1})).to_string(), r#"{"a":1}"#);
        assert_eq!(
            LogMessage::from(UtilsError::invalid_input("x")).to_string(),
            "Invalid input: x"
        );
    }
}
