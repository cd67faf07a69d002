//! Platform abstraction ports for cross-platform compatibility
//!
//! These traits abstract platform-specific operations so that:
//! 1. Services stay identical on browser and desktop targets
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Code becomes easily testable with mock implementations
//!
//! NOTE: The `Platform` struct (DI container) that aggregates these traits
//! lives in `state/platform.rs`, not here.
//! Ports layer contains only trait definitions.

use chrono::{DateTime, Utc};
use dputils_domain::CookieDirective;

/// Time operations abstraction
pub trait TimeProvider: Clone + 'static {
    /// Current instant in UTC
    fn now(&self) -> DateTime<Utc>;

    /// Get current time in milliseconds since epoch
    fn now_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }
}

/// Logging abstraction with the two console channels
pub trait LogProvider: Clone + 'static {
    fn info(&self, msg: &str);
    fn error(&self, msg: &str);
}

/// Cookie store abstraction (`document.cookie` or an in-memory jar)
pub trait CookieProvider: Clone + 'static {
    /// The full raw cookie string, `name=value; name2=value2`
    fn read_all(&self) -> String;

    /// Apply a single `name=value[; expires=...]; path=...` directive
    fn write(&self, directive: &CookieDirective);
}
