use thiserror::Error;

/// Failure of a single API request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// Response body was not the expected JSON.
    #[error("failed to parse response: {0}")]
    Parse(String),
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Status(404))
    }

    /// True for failures that carry an HTTP status, as opposed to transport or decode errors.
    pub fn is_http_status(&self) -> bool {
        matches!(self, FetchError::Status(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_only_for_404() {
        assert!(FetchError::Status(404).is_not_found());
        assert!(!FetchError::Status(500).is_not_found());
        assert!(!FetchError::Network("offline".into()).is_not_found());
    }

    #[test]
    fn test_display() {
        assert_eq!(FetchError::Status(503).to_string(), "HTTP error! status: 503");
        assert_eq!(
            FetchError::Parse("expected value".into()).to_string(),
            "failed to parse response: expected value"
        );
    }
}
