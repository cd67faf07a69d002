//! Desktop platform implementations
//!
//! Provides platform-specific implementations for native targets using the
//! standard library, `tracing` for console output and an in-memory cookie jar.

use chrono::{DateTime, Utc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::infrastructure::cookie_jar::InMemoryCookieJar;
use crate::ports::outbound::{LogProvider, TimeProvider};
use crate::state::Platform;

/// Desktop time provider using the system clock
#[derive(Clone, Default)]
pub struct DesktopTimeProvider;

impl TimeProvider for DesktopTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Desktop log provider using tracing
#[derive(Clone, Default)]
pub struct DesktopLogProvider;

impl LogProvider for DesktopLogProvider {
    fn info(&self, msg: &str) {
        tracing::info!(target: "dputils", "{}", msg);
    }

    fn error(&self, msg: &str) {
        tracing::error!(target: "dputils", "{}", msg);
    }
}

/// Desktop cookie store: a process-local jar on the system clock
pub type DesktopCookieProvider = InMemoryCookieJar<DesktopTimeProvider>;

/// Create platform services for desktop
pub fn create_platform() -> Platform {
    Platform::new(
        DesktopTimeProvider,
        DesktopLogProvider,
        DesktopCookieProvider::new(DesktopTimeProvider),
    )
}

/// Install a `tracing-subscriber` fmt subscriber.
///
/// `RUST_LOG` wins over `default_filter` when set. Installing twice is
/// harmless: the second attempt is reported at debug level and ignored.
pub fn init_tracing(default_filter: &str) {
    let installed = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    if let Err(e) = installed {
        tracing::debug!("tracing subscriber already installed: {}", e);
    }
}
