//! In-memory cookie store
//!
//! Emulates what a browser does with `document.cookie` writes so the cookie
//! accessor behaves the same off the browser:
//! - a cookie is identified by its name and path
//! - rewriting an existing cookie keeps its position in the raw string
//! - a directive whose expiry has passed deletes the cookie
//! - expired cookies never show up on read

use std::sync::{Arc, RwLock};

use dputils_domain::CookieDirective;

use crate::ports::outbound::{CookieProvider, TimeProvider};

/// Cookie jar backed by a shared `Vec`, checked against an injected clock
#[derive(Clone)]
pub struct InMemoryCookieJar<T: TimeProvider> {
    clock: T,
    cookies: Arc<RwLock<Vec<CookieDirective>>>,
}

impl<T: TimeProvider> InMemoryCookieJar<T> {
    /// Create an empty jar that uses `clock` to decide expiry
    pub fn new(clock: T) -> Self {
        Self {
            clock,
            cookies: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<T: TimeProvider> CookieProvider for InMemoryCookieJar<T> {
    fn read_all(&self) -> String {
        let now = self.clock.now();
        match self.cookies.read() {
            Ok(guard) => guard
                .iter()
                .filter(|cookie| !cookie.is_expired_at(now))
                .map(|cookie| format!("{}={}", cookie.name, cookie.value))
                .collect::<Vec<_>>()
                .join("; "),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for cookie jar: {}", e);
                String::new()
            }
        }
    }

    fn write(&self, directive: &CookieDirective) {
        let now = self.clock.now();
        let mut guard = match self.cookies.write() {
            Ok(guard) => guard,
            Err(e) => {
                tracing::error!("Failed to acquire write lock for cookie jar: {}", e);
                return;
            }
        };

        guard.retain(|cookie| !cookie.is_expired_at(now));
        let existing = guard
            .iter()
            .position(|cookie| cookie.name == directive.name && cookie.path == directive.path);

        match (existing, directive.is_expired_at(now)) {
            (Some(index), true) => {
                guard.remove(index);
            }
            (Some(index), false) => guard[index] = directive.clone(),
            (None, true) => {}
            (None, false) => guard.push(directive.clone()),
        }
    }
}
