//! Logger service
//!
//! Formats and routes log lines to the platform's info and error channels,
//! gated by the instance configuration.

use chrono::Local;
use dputils_domain::common::format_timestamp;
use dputils_domain::messages::invalid_input_line;
use dputils_domain::{Config, LogMessage, UtilsError};

use crate::state::Platform;

/// Operation label used on `log` validation failures.
const LOG_OPERATION: &str = "utils.log";
/// Operation label used on `log_exception` validation failures.
const LOG_EXCEPTION_OPERATION: &str = "utils.logException";

/// Console logger bound to a configuration snapshot
#[derive(Clone)]
pub struct Logger {
    platform: Platform,
    config: Config,
}

impl Logger {
    /// Create a new Logger over the given platform and configuration
    pub fn new(platform: Platform, config: Config) -> Self {
        Self { platform, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Writes `message` to the info channel when logging is enabled.
    ///
    /// Text is prefixed with the timestamp and namespace:
    /// `"<timestamp> [<namespace>] <message>"`. Records are written as
    /// compact JSON with no prefix.
    ///
    /// # Errors
    ///
    /// Returns `UtilsError::InvalidInput` for a scalar record, after writing
    /// `[utils.log | <namespace>] Invalid input` to the error channel.
    pub fn log(&self, message: impl Into<LogMessage>, namespace: &str) -> Result<(), UtilsError> {
        if !self.config.logging {
            return Ok(());
        }

        let message = message.into();
        if let Err(err) = message.validate() {
            self.platform
                .log_error(&invalid_input_line(LOG_OPERATION, namespace));
            return Err(err);
        }

        match message {
            LogMessage::Record(record) => self.platform.log_info(&record.to_string()),
            LogMessage::Text(text) => self.platform.log_info(&format!(
                "{} [{}] {}",
                self.time_stamp(),
                namespace,
                text
            )),
        }
        Ok(())
    }

    /// Writes `"[<namespace>] <exception>"` to the error channel.
    ///
    /// Exceptions are always written, whatever the logging flag says.
    ///
    /// # Errors
    ///
    /// Same contract as [`Logger::log`], with the operation label
    /// `utils.logException`.
    pub fn log_exception(
        &self,
        exception: impl Into<LogMessage>,
        namespace: &str,
    ) -> Result<(), UtilsError> {
        let exception = exception.into();
        if let Err(err) = exception.validate() {
            self.platform
                .log_error(&invalid_input_line(LOG_EXCEPTION_OPERATION, namespace));
            return Err(err);
        }

        self.platform
            .log_error(&format!("[{}] {}", namespace, exception));
        Ok(())
    }

    /// Current local time as `D/M/YYYY - H:M:S.mmm`, unpadded.
    pub fn time_stamp(&self) -> String {
        format_timestamp(&self.platform.now().with_timezone(&Local))
    }

    /// Unwraps `result`, logging the error under `namespace` on failure.
    pub fn report<T>(&self, result: Result<T, UtilsError>, namespace: &str) -> Option<T> {
        self.checked(result, namespace).ok()
    }

    /// Logs the error of a failed `result` and hands the result back.
    pub fn checked<T>(
        &self,
        result: Result<T, UtilsError>,
        namespace: &str,
    ) -> Result<T, UtilsError> {
        if let Err(err) = &result {
            self.platform
                .log_error(&format!("[{}] {}", namespace, err));
        }
        result
    }
}
