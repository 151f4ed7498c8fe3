//! Error types for backend API operations.

use thiserror::Error;

/// Errors that can occur while talking to the academic backend.
#[derive(Debug, Error, Clone)]
pub enum ApiError {
    /// No bearer credential could be found; the request never left this
    /// service.
    #[error("Missing credentials: {message}")]
    MissingCredentials { message: String },

    /// Network/HTTP transport failed
    #[error("Network error: {message}")]
    Network { message: String },

    /// Backend answered with a non-2xx status
    #[error("Backend returned {status}{}", message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Backend { status: u16, message: Option<String> },

    /// Response body did not match the expected shape
    #[error("Unexpected response shape: {message}")]
    UnexpectedShape { message: String },

    /// A payload failed local validation before any network call
    #[error("Invalid payload: {message}")]
    InvalidPayload { message: String },

    /// URL parsing/construction failed
    #[error("URL error: {message}")]
    UrlError { message: String },
}

impl ApiError {
    pub fn invalid_payload(message: impl Into<String>) -> Self {
        ApiError::InvalidPayload {
            message: message.into(),
        }
    }

    /// Returns true if this error means the caller must re-authenticate.
    pub fn needs_reauth(&self) -> bool {
        matches!(
            self,
            ApiError::MissingCredentials { .. } | ApiError::Backend { status: 401, .. }
        )
    }

    /// Returns true if the failure happened before any network call.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            ApiError::MissingCredentials { .. }
                | ApiError::InvalidPayload { .. }
                | ApiError::UrlError { .. }
        )
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network {
            message: err.to_string(),
        }
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::UrlError {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_display() {
        let with_message = ApiError::Backend {
            status: 404,
            message: Some("discipline not found".to_string()),
        };
        assert_eq!(
            with_message.to_string(),
            "Backend returned 404: discipline not found"
        );

        let bare = ApiError::Backend {
            status: 500,
            message: None,
        };
        assert_eq!(bare.to_string(), "Backend returned 500");
    }

    #[test]
    fn test_local_classification() {
        assert!(ApiError::invalid_payload("x").is_local());
        assert!(ApiError::MissingCredentials {
            message: "no jwt cookie".to_string()
        }
        .is_local());
        assert!(!ApiError::Network {
            message: "t".to_string()
        }
        .is_local());
    }

    #[test]
    fn test_needs_reauth() {
        assert!(ApiError::Backend {
            status: 401,
            message: None
        }
        .needs_reauth());
        assert!(!ApiError::Backend {
            status: 500,
            message: None
        }
        .needs_reauth());
    }
}
