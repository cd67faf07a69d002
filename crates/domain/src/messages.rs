//! Log line templates and the namespaces they are emitted under.

/// Namespaces attached to log lines written by each operation.
pub mod namespaces {
    pub const INIT: &str = "dputils.init";
    pub const ADD_TRIM_TO_IE: &str = "dputils.addTrimToIE";
    pub const COOKIES_GET: &str = "dputils.cookies.get";
    pub const COOKIES_SET: &str = "dputils.cookies.set";
    pub const COOKIES_REMOVE: &str = "dputils.cookies.remove";
    pub const COOKIES_IS_SET: &str = "dputils.cookies.isCookieSet";
    pub const PARSE_JSON: &str = "dputils.parseJson";
    pub const MOVE_ARRAY_POSITION: &str = "dputils.moveArrayPosition";
    pub const CREATE_HASH_TABLE: &str = "dputils.createHashTable";
    pub const REMAINING_TIME: &str = "dputils.remainingTime";
}

/// Expiry reported for session cookies.
pub const SESSION_EXPIRY: i64 = -1;

pub fn benchmark_finished(elapsed_ms: i64) -> String {
    format!("Function returned in {}ms", elapsed_ms)
}

pub fn cookie_read(name: &str, value: &str) -> String {
    format!("Cookie {} is currently set to value {}", name, value)
}

pub fn cookie_written(name: &str, value: &str, expiry: i64, path: &str) -> String {
    format!(
        "Cookie {} has been set to {} with expiry {} for domain {}",
        name, value, expiry, path
    )
}

pub fn cookie_removed(name: &str) -> String {
    format!("Cookie {} has been removed", name)
}

/// Line written to the error stream when `operation` rejects its input.
///
/// ```
/// use dputils_domain::messages::invalid_input_line;
///
/// assert_eq!(invalid_input_line("utils.log", "app"), "[utils.log | app] Invalid input");
/// ```
pub fn invalid_input_line(operation: &str, namespace: &str) -> String {
    format!("[{} | {}] {}", operation, namespace, crate::error::INVALID_INPUT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates() {
        assert_eq!(benchmark_finished(12), "Function returned in 12ms");
        assert_eq!(cookie_read("a", "1"), "Cookie a is currently set to value 1");
        assert_eq!(
            cookie_written("a", "1", SESSION_EXPIRY, "/"),
            "Cookie a has been set to 1 with expiry -1 for domain /"
        );
        assert_eq!(cookie_removed("a"), "Cookie a has been removed");
    }
}
