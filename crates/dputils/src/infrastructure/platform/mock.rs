//! Mock platform implementations for tests
//!
//! Deterministic adapters that record what the services did:
//! - `ManualTimeProvider`: a clock that only moves when told to
//! - `RecordingLogProvider`: captures every line per channel
//! - `create_mock_platform`: wires both with an `InMemoryCookieJar`

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Duration, Utc};

use crate::infrastructure::cookie_jar::InMemoryCookieJar;
use crate::ports::outbound::{LogProvider, TimeProvider};
use crate::state::Platform;

/// Locks a test mutex, recovering the data if another test thread panicked.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Clock that stays put until `set` or `advance` is called
#[derive(Clone)]
pub struct ManualTimeProvider {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualTimeProvider {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *lock(&self.now) = now;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = lock(&self.now);
        *now += by;
    }
}

impl TimeProvider for ManualTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        *lock(&self.now)
    }
}

/// Console channel a line was written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogChannel {
    Info,
    Error,
}

/// Log provider that keeps every line in memory
#[derive(Clone, Default)]
pub struct RecordingLogProvider {
    lines: Arc<Mutex<Vec<(LogChannel, String)>>>,
}

impl RecordingLogProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every line in write order, tagged with its channel
    pub fn lines(&self) -> Vec<(LogChannel, String)> {
        lock(&self.lines).clone()
    }

    pub fn info_lines(&self) -> Vec<String> {
        self.channel(LogChannel::Info)
    }

    pub fn error_lines(&self) -> Vec<String> {
        self.channel(LogChannel::Error)
    }

    pub fn clear(&self) {
        lock(&self.lines).clear();
    }

    fn channel(&self, wanted: LogChannel) -> Vec<String> {
        lock(&self.lines)
            .iter()
            .filter(|(channel, _)| *channel == wanted)
            .map(|(_, line)| line.clone())
            .collect()
    }
}

impl LogProvider for RecordingLogProvider {
    fn info(&self, msg: &str) {
        lock(&self.lines).push((LogChannel::Info, msg.to_string()));
    }

    fn error(&self, msg: &str) {
        lock(&self.lines).push((LogChannel::Error, msg.to_string()));
    }
}

/// Handles to the adapters behind a mock [`Platform`]
#[derive(Clone)]
pub struct MockPlatform {
    pub platform: Platform,
    pub clock: ManualTimeProvider,
    pub log: RecordingLogProvider,
    pub cookies: InMemoryCookieJar<ManualTimeProvider>,
}

/// Create a platform whose clock starts at `start`
pub fn create_mock_platform(start: DateTime<Utc>) -> MockPlatform {
    let clock = ManualTimeProvider::new(start);
    let log = RecordingLogProvider::new();
    let cookies = InMemoryCookieJar::new(clock.clone());
    MockPlatform {
        platform: Platform::new(clock.clone(), log.clone(), cookies.clone()),
        clock,
        log,
        cookies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_manual_clock_moves_only_when_told() {
        let start = Utc
            .with_ymd_and_hms(2024, 5, 1, 8, 0, 0)
            .single()
            .expect("valid date");
        let clock = ManualTimeProvider::new(start);
        assert_eq!(clock.now(), start);

        clock.advance(Duration::milliseconds(250));
        assert_eq!(clock.now_millis(), start.timestamp_millis() + 250);

        clock.set(start);
        assert_eq!(clock.now(), start);
    }

    #[test]
    fn test_recording_log_provider_tracks_channels() {
        let log = RecordingLogProvider::new();
        log.info("a");
        log.error("b");
        log.info("c");

        assert_eq!(log.info_lines(), vec!["a", "c"]);
        assert_eq!(log.error_lines(), vec!["b"]);
        assert_eq!(log.lines()[1], (LogChannel::Error, "b".to_string()));

        log.clear();
        assert!(log.lines().is_empty());
    }
}
