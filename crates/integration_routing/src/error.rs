//! Routing error types

use thiserror::Error;

/// Errors that can occur while geocoding or requesting directions
#[derive(Debug, Error)]
pub enum RoutingError {
    /// Connection to the routing service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request returned a non-success status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse a response body from the routing service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Place query is empty or otherwise unusable
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Geocoder returned zero candidates for the query
    #[error("No results found for place: {query}")]
    NoResult {
        /// The place query that returned no candidates
        query: String,
    },

    /// Directions service returned zero route candidates
    #[error("No route found from {from} to {to}")]
    EmptyRoute {
        /// Origin place query
        from: String,
        /// Destination place query
        to: String,
    },

    /// Configuration error (missing API key, bad base URL, ...)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl RoutingError {
    /// Returns true if this error is transport-level and a later attempt
    /// might succeed
    ///
    /// Nothing is retried automatically; callers decide whether to offer a
    /// retry to the user.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::RequestFailed(_) | Self::Timeout { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(RoutingError::ConnectionFailed("test".to_string()).is_retryable());
        assert!(RoutingError::RequestFailed("HTTP 500".to_string()).is_retryable());
        assert!(RoutingError::Timeout { timeout_secs: 10 }.is_retryable());
    }

    #[test]
    fn test_non_retryable_errors() {
        assert!(!RoutingError::InvalidQuery("test".to_string()).is_retryable());
        assert!(!RoutingError::ParseError("test".to_string()).is_retryable());
        assert!(!RoutingError::Configuration("test".to_string()).is_retryable());
        assert!(
            !RoutingError::NoResult {
                query: "Atlantis".to_string(),
            }
            .is_retryable()
        );
        assert!(
            !RoutingError::EmptyRoute {
                from: "Toronto, ON".to_string(),
                to: "Honolulu, HI".to_string(),
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_error_display() {
        let err = RoutingError::NoResult {
            query: "Atlantis".to_string(),
        };
        assert!(err.to_string().contains("Atlantis"));

        let err = RoutingError::EmptyRoute {
            from: "Toronto, ON".to_string(),
            to: "Honolulu, HI".to_string(),
        };
        assert!(err.to_string().contains("Toronto, ON"));
        assert!(err.to_string().contains("Honolulu, HI"));

        let err = RoutingError::Timeout { timeout_secs: 10 };
        assert!(err.to_string().contains("10"));
    }
}
