//! dputils domain layer
//!
//! Pure, I/O-free building blocks: configuration, the error type, value
//! objects for cookies and log payloads, and the stateless helpers. Anything
//! that needs the clock, a log sink or the cookie store lives in `dputils`.

pub mod common;
pub mod config;
pub mod error;
pub mod messages;
pub mod value_objects;

pub use config::Config;
pub use error::UtilsError;
pub use value_objects::{CookieDirective, CookieName, CookiePath, LogMessage};
