//! Runtime configuration for a dputils instance.
//!
//! A `Config` is replaced wholesale on initialisation; services only read it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::{is_truthy, to_boolean};

/// Environment variable enabling `log` output.
pub const ENV_LOGGING: &str = "DPUTILS_LOGGING";
/// Environment variable enabling benchmark timing.
pub const ENV_BENCHMARKING: &str = "DPUTILS_BENCHMARKING";
/// Environment variable requesting the legacy trim polyfill.
pub const ENV_ADD_TRIM_TO_IE: &str = "DPUTILS_ADD_TRIM_TO_IE";

/// Recognised configuration options. Every flag defaults to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Emit `log` lines to the info stream.
    pub logging: bool,
    /// Record start instants and report benchmark durations.
    pub benchmarking: bool,
    /// Legacy string-trim polyfill request; a no-op on every Rust target.
    #[serde(rename = "addTrimToIE")]
    pub add_trim_to_ie: bool,
}

impl Config {
    /// Builds a config from a dynamic JSON value.
    ///
    /// Returns `None` for anything that is not an object, so callers can leave
    /// their current configuration untouched. Recognised keys are read by
    /// truthiness; unknown keys are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use dputils_domain::Config;
    /// use serde_json::json;
    ///
    /// let config = Config::from_value(&json!({"logging": true, "benchmarking": 0})).unwrap();
    /// assert!(config.logging);
    /// assert!(!config.benchmarking);
    /// assert!(Config::from_value(&json!("logging")).is_none());
    /// ```
    pub fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        let flag = |key: &str| map.get(key).map(is_truthy).unwrap_or(false);
        Some(Self {
            logging: flag("logging"),
            benchmarking: flag("benchmarking"),
            add_trim_to_ie: flag("addTrimToIE"),
        })
    }

    /// Builds a config from `DPUTILS_*` environment variables.
    ///
    /// Values are interpreted like [`to_boolean`](crate::common::to_boolean):
    /// `true`, `y`, `yes` and `1` enable a flag. Unset variables leave it off.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let flag = |key: &str| {
            lookup(key)
                .map(|raw| to_boolean(&Value::String(raw.trim().to_string())))
                .unwrap_or(false)
        };
        Self {
            logging: flag(ENV_LOGGING),
            benchmarking: flag(ENV_BENCHMARKING),
            add_trim_to_ie: flag(ENV_ADD_TRIM_TO_IE),
        }
    }
}
