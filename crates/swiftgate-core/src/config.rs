//! Swift gateway configuration.
//!
//! Provides [`SwiftConfig`], the explicit, immutable configuration value
//! threaded through the provider and the server binary. Values are loaded
//! from environment variables via [`SwiftConfig::from_env`].

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Swift gateway configuration.
///
/// All fields have defaults matching stock OpenStack Swift limits. Nothing
/// here is process-global; the value is constructed once and passed down.
///
/// # Examples
///
/// ```
/// use swiftgate_core::config::SwiftConfig;
///
/// let config = SwiftConfig::default();
/// assert_eq!(config.max_container_name_length, 256);
/// assert_eq!(config.container_listing_limit, 10_000);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct SwiftConfig {
    /// Bind address for the gateway (e.g. `"0.0.0.0:8080"`).
    #[builder(default = String::from("0.0.0.0:8080"))]
    pub gateway_listen: String,

    /// Maximum container name length accepted at creation time.
    #[builder(default = 256)]
    pub max_container_name_length: usize,

    /// Default page limit applied when a listing request carries no `limit`.
    #[builder(default = 10_000)]
    pub container_listing_limit: usize,

    /// Page size the in-memory backend returns per crawl call.
    #[builder(default = 1000)]
    pub backend_page_size: usize,

    /// Whether to accept requests without an `X-Auth-Token` header.
    #[builder(default = true)]
    pub skip_token_validation: bool,

    /// Log level filter string (e.g. `"info"`, `"debug"`).
    #[builder(default = String::from("info"))]
    pub log_level: String,
}

impl Default for SwiftConfig {
    fn default() -> Self {
        Self {
            gateway_listen: String::from("0.0.0.0:8080"),
            max_container_name_length: 256,
            container_listing_limit: 10_000,
            backend_page_size: 1000,
            skip_token_validation: true,
            log_level: String::from("info"),
        }
    }
}

impl SwiftConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables (falling back to defaults):
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `GATEWAY_LISTEN` | `0.0.0.0:8080` |
    /// | `SWIFT_MAX_CONTAINER_NAME_LENGTH` | `256` |
    /// | `SWIFT_CONTAINER_LISTING_LIMIT` | `10000` |
    /// | `SWIFT_BACKEND_PAGE_SIZE` | `1000` |
    /// | `SWIFT_SKIP_TOKEN_VALIDATION` | `true` |
    /// | `LOG_LEVEL` | `info` |
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("GATEWAY_LISTEN") {
            config.gateway_listen = v;
        }
        if let Ok(v) = std::env::var("SWIFT_MAX_CONTAINER_NAME_LENGTH") {
            if let Ok(n) = v.parse::<usize>() {
                config.max_container_name_length = n;
            }
        }
        if let Ok(v) = std::env::var("SWIFT_CONTAINER_LISTING_LIMIT") {
            if let Ok(n) = v.parse::<usize>() {
                config.container_listing_limit = n;
            }
        }
        if let Ok(v) = std::env::var("SWIFT_BACKEND_PAGE_SIZE") {
            if let Ok(n) = v.parse::<usize>() {
                config.backend_page_size = n;
            }
        }
        if let Ok(v) = std::env::var("SWIFT_SKIP_TOKEN_VALIDATION") {
            config.skip_token_validation = parse_bool(&v);
        }
        if let Ok(v) = std::env::var("LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }
}

/// Parse a string as a boolean, accepting `"1"` and `"true"` (case-insensitive).
fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_create_default_config() {
        let config = SwiftConfig::default();
        assert_eq!(config.gateway_listen, "0.0.0.0:8080");
        assert_eq!(config.max_container_name_length, 256);
        assert_eq!(config.container_listing_limit, 10_000);
        assert_eq!(config.backend_page_size, 1000);
        assert!(config.skip_token_validation);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_should_build_with_typed_builder() {
        let config = SwiftConfig::builder()
            .gateway_listen("127.0.0.1:9090".into())
            .max_container_name_length(64)
            .container_listing_limit(500)
            .backend_page_size(2)
            .skip_token_validation(false)
            .log_level("debug".into())
            .build();

        assert_eq!(config.gateway_listen, "127.0.0.1:9090");
        assert_eq!(config.max_container_name_length, 64);
        assert_eq!(config.container_listing_limit, 500);
        assert_eq!(config.backend_page_size, 2);
        assert!(!config.skip_token_validation);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_should_serialize_to_camel_case_json() {
        let config = SwiftConfig::default();
        let json = serde_json::to_string(&config).expect("test serialization");
        assert!(json.contains("gatewayListen"));
        assert!(json.contains("containerListingLimit"));
    }

    #[test]
    fn test_should_parse_bool_values() {
        assert!(parse_bool("1"));
        assert!(parse_bool("true"));
        assert!(parse_bool("TRUE"));
        assert!(!parse_bool("0"));
        assert!(!parse_bool(""));
    }
}
