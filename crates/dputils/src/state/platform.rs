//! Platform DI Container
//!
//! This module provides the `Platform` struct - a dependency injection container
//! that aggregates the platform-specific adapters behind port traits.
//!
//! Usage:
//! - Created by `create_platform()` in platform/desktop.rs or platform/wasm.rs
//! - Or assembled by hand with `Platform::new` (tests use the mock adapters)
//! - Owned by `DpUtils` and cloned into the services it hands out

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dputils_domain::CookieDirective;

use crate::ports::outbound::{CookieProvider, LogProvider, TimeProvider};

/// Unified platform services container
///
/// Cloning is cheap: every provider sits behind an `Arc`.
#[derive(Clone)]
pub struct Platform {
    time: Arc<dyn TimeProviderDyn>,
    log: Arc<dyn LogProviderDyn>,
    cookies: Arc<dyn CookieProviderDyn>,
}

// =============================================================================
// Dynamic trait versions for Arc storage
// =============================================================================

trait TimeProviderDyn: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

trait LogProviderDyn: Send + Sync {
    fn info(&self, msg: &str);
    fn error(&self, msg: &str);
}

trait CookieProviderDyn: Send + Sync {
    fn read_all(&self) -> String;
    fn write(&self, directive: &CookieDirective);
}

// =============================================================================
// Blanket implementations - convert port traits to dyn-safe wrappers
// =============================================================================

impl<T: TimeProvider + Send + Sync> TimeProviderDyn for T {
    fn now(&self) -> DateTime<Utc> {
        TimeProvider::now(self)
    }
}

impl<T: LogProvider + Send + Sync> LogProviderDyn for T {
    fn info(&self, msg: &str) {
        LogProvider::info(self, msg)
    }
    fn error(&self, msg: &str) {
        LogProvider::error(self, msg)
    }
}

impl<T: CookieProvider + Send + Sync> CookieProviderDyn for T {
    fn read_all(&self) -> String {
        CookieProvider::read_all(self)
    }
    fn write(&self, directive: &CookieDirective) {
        CookieProvider::write(self, directive)
    }
}

// =============================================================================
// Platform implementation
// =============================================================================

impl Platform {
    /// Create a new Platform with the given providers
    pub fn new<Tm, L, C>(time: Tm, log: L, cookies: C) -> Self
    where
        Tm: TimeProvider + Send + Sync,
        L: LogProvider + Send + Sync,
        C: CookieProvider + Send + Sync,
    {
        Self {
            time: Arc::new(time),
            log: Arc::new(log),
            cookies: Arc::new(cookies),
        }
    }

    // -------------------------------------------------------------------------
    // Time operations
    // -------------------------------------------------------------------------

    /// Current instant in UTC
    pub fn now(&self) -> DateTime<Utc> {
        self.time.now()
    }

    /// Get current time in milliseconds since epoch
    pub fn now_millis(&self) -> i64 {
        self.time.now().timestamp_millis()
    }

    // -------------------------------------------------------------------------
    // Logging operations
    // -------------------------------------------------------------------------

    /// Write a line to the info channel
    pub fn log_info(&self, msg: &str) {
        self.log.info(msg)
    }

    /// Write a line to the error channel
    pub fn log_error(&self, msg: &str) {
        self.log.error(msg)
    }

    // -------------------------------------------------------------------------
    // Cookie operations
    // -------------------------------------------------------------------------

    /// The raw cookie string as the store reports it
    pub fn cookie_string(&self) -> String {
        self.cookies.read_all()
    }

    /// Apply a cookie directive to the store
    pub fn write_cookie(&self, directive: &CookieDirective) {
        tracing::debug!(directive = %directive, "writing cookie");
        self.cookies.write(directive)
    }
}
