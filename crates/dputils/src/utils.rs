//! `DpUtils` facade
//!
//! Owns the configuration and the platform. Services handed out by the
//! facade take a snapshot of the configuration at creation time, so a later
//! `init` does not affect a running benchmark.

use chrono::{DateTime, Utc};
use dputils_domain::common::{
    create_hash_table, move_value_position, parse_datetime, parse_json, remaining_millis,
};
use dputils_domain::messages::namespaces;
use dputils_domain::{Config, LogMessage, UtilsError};
use serde_json::{Map, Value};

use crate::application::services::{Benchmark, Cookies, Logger};
use crate::state::Platform;

/// Entry point bundling configuration, platform and services
#[derive(Clone)]
pub struct DpUtils {
    config: Config,
    platform: Platform,
}

impl DpUtils {
    /// Create an instance with every option off
    pub fn new(platform: Platform) -> Self {
        Self::with_config(platform, Config::default())
    }

    pub fn with_config(platform: Platform, config: Config) -> Self {
        Self { config, platform }
    }

    /// Replaces the whole configuration.
    pub fn init(&mut self, config: Config) {
        tracing::debug!(target: "dputils", namespace = namespaces::INIT, ?config, "configuration replaced");
        if config.add_trim_to_ie {
            tracing::debug!(
                target: "dputils",
                namespace = namespaces::ADD_TRIM_TO_IE,
                "string trim is native on this target, nothing to install"
            );
        }
        self.config = config;
    }

    /// Replaces the configuration from a dynamic value.
    ///
    /// Anything other than an object is ignored and the current configuration
    /// stays in place.
    pub fn init_from_value(&mut self, value: &Value) {
        match Config::from_value(value) {
            Some(config) => self.init(config),
            None => tracing::debug!(
                target: "dputils",
                namespace = namespaces::INIT,
                "ignoring non-object configuration"
            ),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Logger bound to the current configuration
    pub fn logger(&self) -> Logger {
        Logger::new(self.platform.clone(), self.config)
    }

    // -------------------------------------------------------------------------
    // Logging
    // -------------------------------------------------------------------------

    pub fn log(&self, message: impl Into<LogMessage>, namespace: &str) -> Result<(), UtilsError> {
        self.logger().log(message, namespace)
    }

    pub fn log_exception(
        &self,
        exception: impl Into<LogMessage>,
        namespace: &str,
    ) -> Result<(), UtilsError> {
        self.logger().log_exception(exception, namespace)
    }

    pub fn time_stamp(&self) -> String {
        self.logger().time_stamp()
    }

    /// Logs the error of a failed `result` under `namespace` and drops it.
    pub fn report<T>(&self, result: Result<T, UtilsError>, namespace: &str) -> Option<T> {
        self.logger().report(result, namespace)
    }

    // -------------------------------------------------------------------------
    // Services
    // -------------------------------------------------------------------------

    /// Starts a timer; it only measures when benchmarking is enabled.
    pub fn benchmark(&self, namespace: impl Into<String>) -> Benchmark {
        Benchmark::start(self.logger(), namespace)
    }

    pub fn cookies(&self) -> Cookies {
        Cookies::new(self.logger())
    }

    // -------------------------------------------------------------------------
    // Lenient helpers: failures are logged and mapped to an empty result
    // -------------------------------------------------------------------------

    /// Parses JSON text, returning `{}` when the text is malformed.
    ///
    /// Both the parse error and the offending input are written to the error
    /// channel under `dputils.parseJson`.
    pub fn parse_json(&self, value: Value) -> Value {
        let logger = self.logger();
        let input = value.clone();
        match logger.checked(parse_json(value), namespaces::PARSE_JSON) {
            Ok(parsed) => parsed,
            Err(_) => {
                if let Err(e) = logger.log_exception(input, namespaces::PARSE_JSON) {
                    tracing::warn!(target: "dputils", "offending JSON input not logged: {}", e);
                }
                Value::Object(Map::new())
            }
        }
    }

    /// Moves an element of a dynamic array; anything but an array (or a bad
    /// index) is logged and yields an empty list.
    pub fn move_array_position(&self, value: Value, old_index: usize, new_index: usize) -> Vec<Value> {
        self.report(
            move_value_position(value, old_index, new_index),
            namespaces::MOVE_ARRAY_POSITION,
        )
        .unwrap_or_default()
    }

    /// Keys `list` by `property_name`; an empty property name is logged and
    /// yields an empty map.
    pub fn create_hash_table(&self, list: &Value, property_name: &str) -> Map<String, Value> {
        self.report(
            create_hash_table(list, property_name),
            namespaces::CREATE_HASH_TABLE,
        )
        .unwrap_or_default()
    }

    /// Milliseconds until `future`; negative once it has passed.
    pub fn remaining_time(&self, future: DateTime<Utc>) -> i64 {
        remaining_millis(future, self.platform.now())
    }

    /// [`DpUtils::remaining_time`] for an RFC 3339 timestamp.
    ///
    /// # Errors
    ///
    /// Returns `UtilsError::InvalidInput` (logged under
    /// `dputils.remainingTime`) when `future` does not parse.
    pub fn remaining_time_until(&self, future: &str) -> Result<i64, UtilsError> {
        let future = self
            .logger()
            .checked(parse_datetime(future), namespaces::REMAINING_TIME)?;
        Ok(self.remaining_time(future))
    }
}
