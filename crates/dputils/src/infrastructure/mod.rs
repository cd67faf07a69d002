//! Infrastructure adapters for the platform ports.

pub mod cookie_jar;
pub mod platform;

pub use cookie_jar::InMemoryCookieJar;
