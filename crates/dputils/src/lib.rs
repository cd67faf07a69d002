//! dputils
//!
//! Logging, benchmarking, cookie and value helpers. The clock, the console
//! and the cookie store sit behind ports, so the same services run in the
//! browser (`document.cookie`, `console`) and natively (tracing output and
//! an in-memory cookie jar). The adapter set is picked with `cfg` at compile
//! time.
//!
//! ```
//! use dputils::{create_platform, Config, DpUtils};
//!
//! let mut utils = DpUtils::new(create_platform());
//! utils.init(Config { logging: true, ..Config::default() });
//!
//! utils.cookies().set("theme", "dark", None, None).unwrap();
//! assert_eq!(utils.cookies().get("theme").unwrap(), "dark");
//! ```

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod state;
pub mod utils;

pub use application::services::{Benchmark, Cookies, Logger};
pub use infrastructure::platform::{create_platform, init_tracing};
pub use state::Platform;
pub use utils::DpUtils;

pub use dputils_domain::common::{
    create_hash_table, get_decimal_mark, is_array, is_empty, is_number, move_array_position,
    normalize_decimal, ordinal_with_suffix, parse_json, to_boolean,
};
pub use dputils_domain::{Config, CookieDirective, CookieName, CookiePath, LogMessage, UtilsError};
