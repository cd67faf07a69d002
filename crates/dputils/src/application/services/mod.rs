//! Application services
//!
//! Each service holds a cheap clone of the `Platform` plus the config
//! snapshot it was created with.

mod benchmark;
mod cookies;
mod logger;

pub use benchmark::Benchmark;
pub use cookies::Cookies;
pub use logger::Logger;
