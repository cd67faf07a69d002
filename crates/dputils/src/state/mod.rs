//! State containers for dependency injection
//!
//! This module contains DI containers that aggregate adapters behind port
//! traits. These are concrete implementations and belong with the adapters,
//! not the ports layer.

mod platform;

pub use platform::Platform;
