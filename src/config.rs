//! App Configuration
//!
//! Values are baked in at build time (`option_env!`), since a wasm bundle
//! has no process environment to read at runtime.

use log::LevelFilter;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3001";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend origin without trailing slash
    pub backend_url: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL, DEFAULT_LOG_LEVEL)
    }
}

impl AppConfig {
    pub fn new(backend_url: &str, log_level: &str) -> Self {
        let backend_url = backend_url.trim().trim_end_matches('/');
        let backend_url = if backend_url.is_empty() {
            DEFAULT_BACKEND_URL
        } else {
            backend_url
        };
        Self {
            backend_url: backend_url.to_string(),
            log_level: parse_level(log_level).unwrap_or(LevelFilter::Info),
        }
    }

    /// Read `WEFAMILY_BACKEND_URL` / `WEFAMILY_LOG_LEVEL` captured at compile time
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("WEFAMILY_BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL),
            option_env!("WEFAMILY_LOG_LEVEL").unwrap_or(DEFAULT_LOG_LEVEL),
        )
    }

    /// Absolute URL for an API path ("/user/all")
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.backend_url, path.trim_start_matches('/'))
    }

    /// Absolute URL with one escaped trailing segment ("/user/find", id)
    pub fn endpoint_with_id(&self, path: &str, id: &str) -> String {
        format!(
            "{}/{}",
            self.endpoint(path).trim_end_matches('/'),
            encode_segment(id)
        )
    }
}

/// Escape one path segment (ids in API urls and page paths)
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Parse a level name; `None` for anything unknown
pub fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" | "warning" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_url_normalized() {
        let config = AppConfig::new(" https://api.family.test/ ", "debug");
        assert_eq!(config.backend_url, "https://api.family.test");
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.endpoint("/user/all"), "https://api.family.test/user/all");
        assert_eq!(config.endpoint("memory/all"), "https://api.family.test/memory/all");
    }

    #[test]
    fn test_empty_values_fall_back_to_defaults() {
        let config = AppConfig::new("", "loud");
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_endpoint_with_id_escapes_segment() {
        let config = AppConfig::default();
        assert_eq!(
            config.endpoint_with_id("/user/find", "a b/c"),
            "http://localhost:3001/user/find/a%20b%2Fc"
        );
        assert_eq!(
            config.endpoint_with_id("/user/find/", "42"),
            "http://localhost:3001/user/find/42"
        );
    }
}
