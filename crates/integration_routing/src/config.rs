//! Routing service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the OpenRouteService geocoding and directions APIs
///
/// The API key is required and carried explicitly in the configuration;
/// there is no process-wide secret lookup inside the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// OpenRouteService API key (required, sent with every request)
    #[serde(default)]
    pub api_key: String,

    /// Base URL serving both the geocode and directions endpoints
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Geocode cache TTL in minutes (0 to disable caching)
    #[serde(default = "default_cache_ttl_minutes")]
    pub cache_ttl_minutes: u32,
}

fn default_base_url() -> String {
    "https://api.openrouteservice.org".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_cache_ttl_minutes() -> u32 {
    60
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            cache_ttl_minutes: default_cache_ttl_minutes(),
        }
    }
}

impl RoutingConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            api_key: "test-key".to_string(),
            timeout_secs: 5,
            cache_ttl_minutes: 0,
            ..Default::default()
        }
    }

    /// Check if geocode caching is enabled
    #[must_use]
    pub const fn caching_enabled(&self) -> bool {
        self.cache_ttl_minutes > 0
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.trim().is_empty() {
            return Err("api_key must not be empty".to_string());
        }

        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RoutingConfig::default();
        assert_eq!(config.base_url, "https://api.openrouteservice.org");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.cache_ttl_minutes, 60);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_testing_config() {
        let config = RoutingConfig::for_testing();
        assert_eq!(config.timeout_secs, 5);
        assert!(!config.caching_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_caching_enabled() {
        let mut config = RoutingConfig::default();
        assert!(config.caching_enabled());

        config.cache_ttl_minutes = 0;
        assert!(!config.caching_enabled());
    }

    #[test]
    fn test_validation_missing_api_key() {
        let config = RoutingConfig::default();
        assert!(config.validate().is_err());

        let config = RoutingConfig {
            api_key: "   ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_base_url() {
        let config = RoutingConfig {
            api_key: "key".to_string(),
            base_url: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = RoutingConfig {
            api_key: "key".to_string(),
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = RoutingConfig::for_testing();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: RoutingConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.api_key, config.api_key);
        assert_eq!(deserialized.base_url, config.base_url);
        assert_eq!(deserialized.cache_ttl_minutes, config.cache_ttl_minutes);
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: RoutingConfig = serde_json::from_str(r#"{"api_key": "key"}"#).unwrap();
        assert_eq!(config.base_url, "https://api.openrouteservice.org");
        assert_eq!(config.timeout_secs, 10);
    }
}
