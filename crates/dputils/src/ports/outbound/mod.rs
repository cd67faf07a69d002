//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to reach the clock, the console and the
//! cookie store without depending on concrete implementations.

pub mod platform;

pub use platform::{CookieProvider, LogProvider, TimeProvider};
