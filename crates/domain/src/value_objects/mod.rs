//! Value objects - Immutable objects defined by their attributes

mod cookie;
mod log_message;

pub use cookie::{
    contains_cookie, find_cookie_value, validate_cookie_value, CookieDirective, CookieName,
    CookiePath, DEFAULT_COOKIE_PATH,
};
pub use log_message::LogMessage;
