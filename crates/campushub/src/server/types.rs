//! Response types shared by the HTTP endpoints.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::api::ApiError;

/// JSON error envelope: `{ "error": ..., "detail": ... }`.
pub struct ApiErrorType {
    status: StatusCode,
    error: String,
    detail: Option<String>,
}

impl From<(StatusCode, &str, Option<String>)> for ApiErrorType {
    fn from((status, error, detail): (StatusCode, &str, Option<String>)) -> Self {
        Self {
            status,
            error: error.to_string(),
            detail,
        }
    }
}

impl From<(StatusCode, &str)> for ApiErrorType {
    fn from((status, error): (StatusCode, &str)) -> Self {
        Self::from((status, error, None))
    }
}

impl IntoResponse for ApiErrorType {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(json!({
                "error": self.error,
                "detail": self.detail,
            })),
        )
            .into_response()
    }
}

/// Maps a backend API error onto a response for our own callers.
///
/// Backend 4xx statuses pass through (a 404 upstream is a 404 here);
/// transport and shape problems become 502.
pub fn api_error_response(error: ApiError) -> Response {
    let (status, message) = match &error {
        ApiError::MissingCredentials { .. } => {
            (StatusCode::UNAUTHORIZED, "Missing credentials")
        }
        ApiError::InvalidPayload { .. } => {
            (StatusCode::UNPROCESSABLE_ENTITY, "Invalid payload")
        }
        ApiError::Backend { status, .. } => {
            let passthrough = StatusCode::from_u16(*status)
                .ok()
                .filter(StatusCode::is_client_error)
                .unwrap_or(StatusCode::BAD_GATEWAY);
            (passthrough, "Backend request failed")
        }
        ApiError::Network { .. } => (StatusCode::BAD_GATEWAY, "Backend unreachable"),
        ApiError::UnexpectedShape { .. } => {
            (StatusCode::BAD_GATEWAY, "Backend returned an unexpected response")
        }
        ApiError::UrlError { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "Invalid backend URL"),
    };

    ApiErrorType::from((status, message, Some(error.to_string()))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_client_errors_pass_through() {
        let response = api_error_response(ApiError::Backend {
            status: 404,
            message: Some("not found".to_string()),
        });
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_backend_server_errors_become_bad_gateway() {
        let response = api_error_response(ApiError::Backend {
            status: 500,
            message: None,
        });
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_missing_credentials_is_unauthorized() {
        let response = api_error_response(ApiError::MissingCredentials {
            message: "no jwt cookie".to_string(),
        });
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
