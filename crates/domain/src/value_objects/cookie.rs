//! Cookie names, paths and the `document.cookie` string format
//!
//! The raw cookie string is the `name=value; name2=value2` form a browser
//! hands back on read. Writes go out as a single directive:
//! `name=value[; expires=<RFC 1123>]; path=<path>`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::format_rfc1123;
use crate::error::UtilsError;

/// Path used when a cookie is written without one.
pub const DEFAULT_COOKIE_PATH: &str = "/";

// ============================================================================
// CookieName
// ============================================================================

/// A validated cookie name (non-empty, no separators, whitespace or controls)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CookieName(String);

impl CookieName {
    /// Create a new validated cookie name.
    ///
    /// # Errors
    ///
    /// Returns `UtilsError::InvalidInput` if the name is empty or contains
    /// `=`, `;`, `,`, whitespace or control characters.
    pub fn new(name: impl Into<String>) -> Result<Self, UtilsError> {
        let name = name.into();
        if name.is_empty() {
            return Err(UtilsError::invalid_input("cookie name cannot be empty"));
        }
        if let Some(bad) = name
            .chars()
            .find(|c| matches!(c, '=' | ';' | ',') || c.is_whitespace() || c.is_control())
        {
            return Err(UtilsError::invalid_input(format!(
                "cookie name '{}' contains forbidden character {:?}",
                name, bad
            )));
        }
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CookieName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CookieName {
    type Error = UtilsError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CookieName> for String {
    fn from(name: CookieName) -> String {
        name.0
    }
}

// ============================================================================
// CookiePath
// ============================================================================

/// A validated cookie path (starts with `/`, no `;` or controls)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CookiePath(String);

impl CookiePath {
    /// Create a new validated cookie path.
    ///
    /// # Errors
    ///
    /// Returns `UtilsError::InvalidInput` if the path does not start with `/`
    /// or contains `;` or control characters.
    pub fn new(path: impl Into<String>) -> Result<Self, UtilsError> {
        let path = path.into();
        if !path.starts_with('/') {
            return Err(UtilsError::invalid_input(format!(
                "cookie path '{}' must start with '/'",
                path
            )));
        }
        if path.chars().any(|c| c == ';' || c.is_control()) {
            return Err(UtilsError::invalid_input(format!(
                "cookie path '{}' contains forbidden characters",
                path
            )));
        }
        Ok(Self(path))
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CookiePath {
    fn default() -> Self {
        Self(DEFAULT_COOKIE_PATH.to_string())
    }
}

impl fmt::Display for CookiePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CookiePath {
    type Error = UtilsError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CookiePath> for String {
    fn from(path: CookiePath) -> String {
        path.0
    }
}

/// Checks that a cookie value can be written without breaking the directive.
///
/// # Errors
///
/// Returns `UtilsError::InvalidInput` if the value contains `;` or control
/// characters.
pub fn validate_cookie_value(value: &str) -> Result<(), UtilsError> {
    if value.chars().any(|c| c == ';' || c.is_control()) {
        return Err(UtilsError::invalid_input(format!(
            "cookie value '{}' contains forbidden characters",
            value.escape_debug()
        )));
    }
    Ok(())
}

// ============================================================================
// CookieDirective
// ============================================================================

/// A single cookie write: `name=value[; expires=...]; path=...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieDirective {
    pub name: CookieName,
    pub value: String,
    /// `None` writes a session cookie.
    pub expires: Option<DateTime<Utc>>,
    pub path: CookiePath,
}

impl CookieDirective {
    /// Builds a directive, validating the value.
    pub fn new(
        name: CookieName,
        value: impl Into<String>,
        expires: Option<DateTime<Utc>>,
        path: CookiePath,
    ) -> Result<Self, UtilsError> {
        let value = value.into();
        validate_cookie_value(&value)?;
        Ok(Self {
            name,
            value,
            expires,
            path,
        })
    }

    /// A directive that deletes `name` on the default path by expiring it at
    /// the Unix epoch.
    pub fn removal(name: CookieName) -> Self {
        Self {
            name,
            value: String::new(),
            expires: Some(DateTime::<Utc>::UNIX_EPOCH),
            path: CookiePath::default(),
        }
    }

    /// True once the directive's expiry is at or before `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        matches!(self.expires, Some(expires) if expires <= now)
    }
}

impl fmt::Display for CookieDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)?;
        if let Some(expires) = &self.expires {
            write!(f, "; expires={}", format_rfc1123(expires))?;
        }
        write!(f, "; path={}", self.path)
    }
}

// ============================================================================
// Raw cookie string scanning
// ============================================================================

/// Finds the value for `name` in a raw cookie string.
///
/// Scans `;`-separated segments for the first one containing `name=` and
/// returns everything after that segment's first `=`, untrimmed and
/// unescaped. The match is a substring match, so `name` may also hit a
/// longer cookie name ending in it.
///
/// ```
/// use dputils_domain::value_objects::find_cookie_value;
///
/// assert_eq!(find_cookie_value("a=1; token=x=y", "token"), Some("x=y"));
/// assert_eq!(find_cookie_value("a=1", "b"), None);
/// ```
pub fn find_cookie_value<'a>(raw: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!("{}=", name);
    raw.split(';')
        .find(|segment| segment.contains(&needle))
        .and_then(|segment| segment.split_once('='))
        .map(|(_, value)| value)
}

/// Prefix-boundary presence check: true iff `"; " + name` occurs in
/// `"; " + raw`.
///
/// Cookie names that merely start with `name` also match, as do bare
/// `name` entries without an `=`.
pub fn contains_cookie(raw: &str, name: &str) -> bool {
    format!("; {}", raw).contains(&format!("; {}", name))
}
