//! One-shot execution timer
//!
//! A `Benchmark` records its start instant only when benchmarking is enabled,
//! and `finish` consumes it, so a timer can report at most once.

use chrono::{DateTime, Utc};
use dputils_domain::common::remaining_millis;
use dputils_domain::messages::benchmark_finished;

use super::logger::Logger;

/// Running timer bound to a namespace
pub struct Benchmark {
    logger: Logger,
    namespace: String,
    start: Option<DateTime<Utc>>,
}

impl Benchmark {
    /// Start a timer; the clock is only read when benchmarking is enabled
    pub fn start(logger: Logger, namespace: impl Into<String>) -> Self {
        let start = logger
            .config()
            .benchmarking
            .then(|| logger.platform().now());
        Self {
            logger,
            namespace: namespace.into(),
            start,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Milliseconds since the timer started, `None` when benchmarking is off
    pub fn elapsed_ms(&self) -> Option<i64> {
        self.start
            .map(|start| remaining_millis(self.logger.platform().now(), start))
    }

    /// Stops the timer and logs `Function returned in {time}ms`.
    ///
    /// Returns the measured duration, or `None` when benchmarking is off.
    pub fn finish(self) -> Option<i64> {
        let elapsed = self.elapsed_ms()?;
        if let Err(e) = self
            .logger
            .log(benchmark_finished(elapsed), &self.namespace)
        {
            tracing::warn!(namespace = %self.namespace, "benchmark result not logged: {}", e);
        }
        Some(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::{create_mock_platform, MockPlatform};
    use chrono::{Duration, TimeZone};
    use dputils_domain::Config;

    fn mock() -> MockPlatform {
        create_mock_platform(
            Utc.with_ymd_and_hms(2024, 7, 1, 10, 0, 0)
                .single()
                .expect("valid date"),
        )
    }

    fn config(logging: bool, benchmarking: bool) -> Config {
        Config {
            logging,
            benchmarking,
            ..Config::default()
        }
    }

    #[test]
    fn test_finish_logs_elapsed_time() {
        let mock = mock();
        let logger = Logger::new(mock.platform.clone(), config(true, true));

        let benchmark = Benchmark::start(logger, "render");
        mock.clock.advance(Duration::milliseconds(42));

        assert_eq!(benchmark.finish(), Some(42));
        let lines = mock.log.info_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with(" [render] Function returned in 42ms"));
    }

    #[test]
    fn test_disabled_benchmark_is_silent() {
        let mock = mock();
        let logger = Logger::new(mock.platform.clone(), config(true, false));

        let benchmark = Benchmark::start(logger, "render");
        mock.clock.advance(Duration::milliseconds(42));

        assert_eq!(benchmark.elapsed_ms(), None);
        assert_eq!(benchmark.finish(), None);
        assert!(mock.log.lines().is_empty());
    }

    #[test]
    fn test_benchmark_without_logging_still_measures() {
        let mock = mock();
        let logger = Logger::new(mock.platform.clone(), config(false, true));

        let benchmark = Benchmark::start(logger, "quiet");
        mock.clock.advance(Duration::milliseconds(7));

        assert_eq!(benchmark.elapsed_ms(), Some(7));
        assert_eq!(benchmark.finish(), Some(7));
        assert!(mock.log.lines().is_empty());
    }

    #[test]
    fn test_namespace_is_kept() {
        let mock = mock();
        let logger = Logger::new(mock.platform.clone(), Config::default());
        assert_eq!(Benchmark::start(logger, "ns").namespace(), "ns");
    }
}
