//! Cookie store accessor
//!
//! Validates names, values and paths before touching the store. Rejected
//! input is logged under the operation's namespace and returned as
//! `UtilsError::InvalidInput`.

use dputils_domain::common::offset_millis;
use dputils_domain::messages::{
    cookie_read, cookie_removed, cookie_written, namespaces, SESSION_EXPIRY,
};
use dputils_domain::value_objects::{contains_cookie, find_cookie_value};
use dputils_domain::{CookieDirective, CookieName, CookiePath, UtilsError};

use super::logger::Logger;

/// Read/write access to the platform cookie store
#[derive(Clone)]
pub struct Cookies {
    logger: Logger,
}

impl Cookies {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    /// Value stored under `name`, or `""` when no cookie matches.
    pub fn get(&self, name: &str) -> Result<String, UtilsError> {
        let name = self
            .logger
            .checked(CookieName::new(name), namespaces::COOKIES_GET)?;

        let raw = self.logger.platform().cookie_string();
        match find_cookie_value(&raw, name.as_str()) {
            Some(value) => {
                self.logger
                    .log(cookie_read(name.as_str(), value), namespaces::COOKIES_GET)?;
                Ok(value.to_string())
            }
            None => Ok(String::new()),
        }
    }

    /// Writes `name=value` on `path` (default `/`).
    ///
    /// `expiry_ms` is relative to now; `None` or `0` makes a session cookie.
    pub fn set(
        &self,
        name: &str,
        value: &str,
        expiry_ms: Option<i64>,
        path: Option<&str>,
    ) -> Result<(), UtilsError> {
        let directive = self
            .logger
            .checked(self.directive(name, value, expiry_ms, path), namespaces::COOKIES_SET)?;

        self.logger.platform().write_cookie(&directive);
        self.logger.log(
            cookie_written(
                directive.name.as_str(),
                &directive.value,
                expiry_ms.filter(|ms| *ms != 0).unwrap_or(SESSION_EXPIRY),
                directive.path.as_str(),
            ),
            namespaces::COOKIES_SET,
        )
    }

    /// Deletes `name` from the default path by expiring it at the epoch.
    pub fn remove(&self, name: &str) -> Result<(), UtilsError> {
        let name = self
            .logger
            .checked(CookieName::new(name), namespaces::COOKIES_REMOVE)?;

        self.logger
            .platform()
            .write_cookie(&CookieDirective::removal(name.clone()));
        self.logger
            .log(cookie_removed(name.as_str()), namespaces::COOKIES_REMOVE)
    }

    /// True when the raw cookie string has an entry starting with `name`.
    pub fn is_cookie_set(&self, name: &str) -> Result<bool, UtilsError> {
        let name = self
            .logger
            .checked(CookieName::new(name), namespaces::COOKIES_IS_SET)?;
        Ok(contains_cookie(
            &self.logger.platform().cookie_string(),
            name.as_str(),
        ))
    }

    fn directive(
        &self,
        name: &str,
        value: &str,
        expiry_ms: Option<i64>,
        path: Option<&str>,
    ) -> Result<CookieDirective, UtilsError> {
        let name = CookieName::new(name)?;
        let path = match path {
            Some(path) => CookiePath::new(path)?,
            None => CookiePath::default(),
        };
        let expires = match expiry_ms.filter(|ms| *ms != 0) {
            Some(ms) => Some(
                offset_millis(self.logger.platform().now(), ms).ok_or_else(|| {
                    UtilsError::invalid_input(format!(
                        "cookie expiry {}ms is out of range",
                        ms
                    ))
                })?,
            ),
            None => None,
        };
        CookieDirective::new(name, value, expires, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::{create_mock_platform, MockPlatform};
    use crate::ports::outbound::CookieProvider;
    use chrono::{Duration, TimeZone, Utc};
    use dputils_domain::Config;

    fn mock() -> MockPlatform {
        create_mock_platform(
            Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0)
                .single()
                .expect("valid date"),
        )
    }

    fn cookies(mock: &MockPlatform, logging: bool) -> Cookies {
        Cookies::new(Logger::new(
            mock.platform.clone(),
            Config {
                logging,
                ..Config::default()
            },
        ))
    }

    #[test]
    fn test_set_then_get_round_trip() {
        let mock = mock();
        let cookies = cookies(&mock, false);

        cookies.set("foo", "bar", None, None).expect("valid cookie");

        assert_eq!(cookies.get("foo").expect("valid name"), "bar");
        assert!(cookies.is_cookie_set("foo").expect("valid name"));
        assert_eq!(mock.cookies.read_all(), "foo=bar");
    }

    #[test]
    fn test_get_missing_is_empty() {
        let mock = mock();
        let cookies = cookies(&mock, true);

        assert_eq!(cookies.get("nope").expect("valid name"), "");
        assert!(mock.log.lines().is_empty());
    }

    #[test]
    fn test_get_keeps_value_after_first_equals() {
        let mock = mock();
        let cookies = cookies(&mock, false);

        cookies.set("token", "a=b", None, None).expect("valid cookie");
        assert_eq!(cookies.get("token").expect("valid name"), "a=b");
    }

    #[test]
    fn test_remove_deletes_cookie() {
        let mock = mock();
        let cookies = cookies(&mock, false);

        cookies.set("foo", "bar", None, None).expect("valid cookie");
        cookies.remove("foo").expect("valid name");

        assert!(!cookies.is_cookie_set("foo").expect("valid name"));
        assert_eq!(cookies.get("foo").expect("valid name"), "");
    }

    #[test]
    fn test_expiry_follows_the_clock() {
        let mock = mock();
        let cookies = cookies(&mock, false);

        cookies
            .set("short", "lived", Some(1_000), None)
            .expect("valid cookie");
        assert!(cookies.is_cookie_set("short").expect("valid name"));

        mock.clock.advance(Duration::milliseconds(1_000));
        assert!(!cookies.is_cookie_set("short").expect("valid name"));
    }

    #[test]
    fn test_zero_expiry_is_a_session_cookie() {
        let mock = mock();
        let cookies = cookies(&mock, true);

        cookies.set("s", "1", Some(0), Some("/app")).expect("valid cookie");
        mock.clock.advance(Duration::days(365));

        assert!(cookies.is_cookie_set("s").expect("valid name"));
        let lines = mock.log.info_lines();
        assert!(lines[0].ends_with(
            "[dputils.cookies.set] Cookie s has been set to 1 with expiry -1 for domain /app"
        ));
    }

    #[test]
    fn test_logging_lines() {
        let mock = mock();
        let cookies = cookies(&mock, true);

        cookies
            .set("theme", "dark", Some(Duration::days(7).num_milliseconds()), None)
            .expect("valid cookie");
        cookies.get("theme").expect("valid name");
        cookies.remove("theme").expect("valid name");

        let lines = mock.log.info_lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with(&format!(
            "[dputils.cookies.set] Cookie theme has been set to dark with expiry {} for domain /",
            7 * 24 * 60 * 60 * 1000
        )));
        assert!(lines[1].ends_with("[dputils.cookies.get] Cookie theme is currently set to value dark"));
        assert!(lines[2].ends_with("[dputils.cookies.remove] Cookie theme has been removed"));
    }

    #[test]
    fn test_invalid_input_is_logged_and_returned() {
        let mock = mock();
        let cookies = cookies(&mock, false);

        assert!(cookies.get("bad name").is_err());
        assert!(cookies.set("ok", "a;b", None, None).is_err());
        assert!(cookies.set("ok", "v", None, Some("relative")).is_err());
        assert!(cookies.remove("").is_err());
        assert!(cookies.is_cookie_set("a=b").is_err());

        let errors = mock.log.error_lines();
        assert_eq!(errors.len(), 5);
        assert!(errors[0].starts_with("[dputils.cookies.get] Invalid input: "));
        assert!(errors[1].starts_with("[dputils.cookies.set] Invalid input: "));
        assert!(errors[2].starts_with("[dputils.cookies.set] Invalid input: "));
        assert!(errors[3].starts_with("[dputils.cookies.remove] Invalid input: "));
        assert!(errors[4].starts_with("[dputils.cookies.isCookieSet] Invalid input: "));
        assert_eq!(mock.cookies.read_all(), "");
    }

    #[test]
    fn test_out_of_range_expiry_is_rejected() {
        let mock = mock();
        let cookies = cookies(&mock, false);
        assert!(cookies.set("far", "future", Some(i64::MAX), None).is_err());
    }

    #[test]
    fn test_is_cookie_set_prefix_match() {
        let mock = mock();
        let cookies = cookies(&mock, false);

        cookies.set("foobar", "1", None, None).expect("valid cookie");
        assert!(cookies.is_cookie_set("foo").expect("valid name"));
        assert!(!cookies.is_cookie_set("bar").expect("valid name"));
    }
}
