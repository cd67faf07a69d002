//! WASM platform implementations
//!
//! Provides platform-specific implementations for the browser using
//! `js-sys` for the clock and `web-sys` for the console and `document.cookie`.

use chrono::{DateTime, Utc};
use dputils_domain::CookieDirective;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::ports::outbound::{CookieProvider, LogProvider, TimeProvider};
use crate::state::Platform;

/// WASM time provider using `Date.now()`
#[derive(Clone, Default)]
pub struct WasmTimeProvider;

impl TimeProvider for WasmTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        let millis = js_sys::Date::now() as i64;
        DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or_default()
    }
}

/// WASM log provider writing to the browser console
#[derive(Clone, Default)]
pub struct WasmLogProvider;

impl LogProvider for WasmLogProvider {
    fn info(&self, msg: &str) {
        web_sys::console::log_1(&msg.into());
    }

    fn error(&self, msg: &str) {
        web_sys::console::error_1(&msg.into());
    }
}

/// WASM cookie provider backed by `document.cookie`
#[derive(Clone, Default)]
pub struct WasmCookieProvider;

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?
        .document()?
        .dyn_into::<HtmlDocument>()
        .ok()
}

impl CookieProvider for WasmCookieProvider {
    fn read_all(&self) -> String {
        let Some(document) = html_document() else {
            tracing::warn!("document.cookie is unavailable outside an HTML document");
            return String::new();
        };
        match document.cookie() {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!("Failed to read document.cookie: {:?}", e);
                String::new()
            }
        }
    }

    fn write(&self, directive: &CookieDirective) {
        let Some(document) = html_document() else {
            tracing::warn!("document.cookie is unavailable outside an HTML document");
            return;
        };
        if let Err(e) = document.set_cookie(&directive.to_string()) {
            tracing::error!("Failed to write document.cookie: {:?}", e);
        }
    }
}

/// Create platform services for WASM
pub fn create_platform() -> Platform {
    Platform::new(WasmTimeProvider, WasmLogProvider, WasmCookieProvider)
}

/// Route `tracing` output and panics to the browser console.
///
/// The filter argument is accepted for parity with the desktop build;
/// `tracing-wasm` uses its own default level configuration.
pub fn init_tracing(_default_filter: &str) {
    console_error_panic_hook::set_once();
    if let Err(e) = tracing_wasm::try_set_as_global_default() {
        web_sys::console::warn_1(&format!("tracing already installed: {}", e).into());
    }
}
