//! Request middleware.

use axum::extract::Request;
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::api::AuthToken;
use crate::server::types::ApiErrorType;

/// Requires a bearer credential on every request it guards.
///
/// The token comes from the `jwt` cookie (the session shape the front end
/// uses) or an `Authorization: Bearer` header. Requests without one are
/// rejected here, before anything reaches the backend.
pub async fn require_token(mut req: Request, next: Next) -> Response {
    let headers = req.headers();

    let token = headers
        .get(header::COOKIE)
        .and_then(|h| h.to_str().ok())
        .and_then(AuthToken::from_cookie_header)
        .or_else(|| {
            headers
                .get(header::AUTHORIZATION)
                .and_then(|h| h.to_str().ok())
                .and_then(AuthToken::from_bearer_header)
        });

    match token {
        Some(token) => {
            req.extensions_mut().insert(token);
            next.run(req).await
        }
        None => ApiErrorType::from((
            StatusCode::UNAUTHORIZED,
            "Missing credentials",
            Some("no jwt cookie or bearer token on the request".to_string()),
        ))
        .into_response(),
    }
}
