//! Application layer - services built on the platform ports

pub mod services;

pub use services::{Benchmark, Cookies, Logger};
