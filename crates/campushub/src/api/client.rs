//! HTTP client for the academic administration backend.
//!
//! Every request carries `Authorization: Bearer <jwt>`; the token comes
//! from the caller's session cookie and is resolved before any network
//! call. Failures follow a fixed taxonomy: missing credentials fail fast,
//! non-2xx statuses surface the backend's optional `message` field, and
//! shape mismatches are hard errors. Nothing is retried.

use rand::Rng;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use super::error::ApiError;
use super::types::{ListEnvelope, PagedResponse, Pagination};

/// A bearer credential extracted from the incoming request.
///
/// Wraps the raw JWT so it never ends up in logs by accident.
#[derive(Clone)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Extracts the `jwt` cookie from a `Cookie` header value.
    pub fn from_cookie_header(header: &str) -> Option<Self> {
        header.split(';').find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            if name == "jwt" && !value.is_empty() {
                Some(Self(value.to_string()))
            } else {
                None
            }
        })
    }

    /// Extracts the token from an `Authorization: Bearer ...` header value.
    pub fn from_bearer_header(header: &str) -> Option<Self> {
        let token = header.strip_prefix("Bearer ")?.trim();
        if token.is_empty() {
            None
        } else {
            Some(Self(token.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AuthToken(..)")
    }
}

/// Configuration for the backend client.
#[derive(Debug, Clone)]
pub struct BackendClientConfig {
    /// Base URL of the academic backend
    pub base_url: String,
    /// Connect timeout
    pub connect_timeout: Duration,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for BackendClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3333".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            user_agent: concat!("campushub/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Typed wrapper over reqwest for the backend's JSON API.
pub struct BackendClient {
    http: Client,
    base_url: Url,
}

impl BackendClient {
    pub fn new(config: &BackendClientConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ApiError::Network {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        let base_url = Url::parse(&config.base_url)?;

        Ok(Self { http, base_url })
    }

    /// Joins `path` (and optional query pairs) onto the base URL.
    fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, ApiError> {
        let mut url = self.base_url.join(path.trim_start_matches('/'))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter().copied());
        }
        Ok(url)
    }

    /// GET a single JSON object.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        token: &AuthToken,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let body = self
            .execute(Method::GET, path, query, token, None::<&()>)
            .await?;
        decode(&body)
    }

    /// GET a list endpoint, accepting either a bare array or a
    /// `{ data, pagination }` envelope.
    pub async fn get_list<T: DeserializeOwned>(
        &self,
        token: &AuthToken,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, ApiError> {
        let body = self
            .execute(Method::GET, path, query, token, None::<&()>)
            .await?;
        let envelope: ListEnvelope<T> = decode(&body)?;
        Ok(envelope.into_items())
    }

    /// GET a paginated list endpoint, keeping the pagination metadata.
    pub async fn get_paged<T: DeserializeOwned>(
        &self,
        token: &AuthToken,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<PagedResponse<T>, ApiError> {
        let body = self
            .execute(Method::GET, path, query, token, None::<&()>)
            .await?;
        let envelope: ListEnvelope<T> = decode(&body)?;
        let (data, pagination) = envelope.into_parts();
        Ok(PagedResponse {
            data,
            pagination: pagination.or(Some(Pagination::default())),
        })
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        token: &AuthToken,
        path: &str,
        payload: &B,
    ) -> Result<T, ApiError> {
        let body = self
            .execute(Method::POST, path, &[], token, Some(payload))
            .await?;
        decode(&body)
    }

    pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
        &self,
        token: &AuthToken,
        path: &str,
        payload: &B,
    ) -> Result<T, ApiError> {
        let body = self
            .execute(Method::PATCH, path, &[], token, Some(payload))
            .await?;
        decode(&body)
    }

    /// GET an absolute URL without credentials. Used for public lookup
    /// services (postal-code auto-fill); backend routes always go through
    /// the authenticated methods.
    pub async fn get_public_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let url = Url::parse(url)?;
        debug!(url = %url, "Sending public lookup request");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Backend {
                status: status.as_u16(),
                message: extract_backend_message(&body),
            });
        }

        decode(&body)
    }

    /// DELETE, discarding any response body.
    pub async fn delete(&self, token: &AuthToken, path: &str) -> Result<(), ApiError> {
        self.execute(Method::DELETE, path, &[], token, None::<&()>)
            .await?;
        Ok(())
    }

    /// Sends one request and returns the raw body of a 2xx response.
    async fn execute<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        token: &AuthToken,
        payload: Option<&B>,
    ) -> Result<String, ApiError> {
        let correlation_id = generate_correlation_id();
        let url = self.endpoint(path, query)?;

        debug!(
            correlation_id = %correlation_id,
            method = %method,
            url = %url,
            "Sending backend request"
        );

        let mut request = self
            .http
            .request(method.clone(), url.clone())
            .header(AUTHORIZATION, format!("Bearer {}", token.as_str()));
        if let Some(payload) = payload {
            request = request.json(payload);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = extract_backend_message(&body);
            warn!(
                correlation_id = %correlation_id,
                method = %method,
                url = %url,
                status = status.as_u16(),
                "Backend request failed"
            );
            return Err(ApiError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(String::new());
        }

        info!(
            correlation_id = %correlation_id,
            method = %method,
            path = %path,
            status = status.as_u16(),
            "Backend request succeeded"
        );

        Ok(body)
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::UnexpectedShape {
        message: e.to_string(),
    })
}

/// Pulls the optional `message` field out of a JSON error body.
pub(crate) fn extract_backend_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(|m| m.to_string())
}

/// Generates a unique correlation ID for request tracing.
fn generate_correlation_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_micros();
    let random: u32 = rand::thread_rng().gen();
    format!("{:x}-{:08x}", timestamp & 0xFFFFFFFF, random)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_from_cookie_header() {
        let token = AuthToken::from_cookie_header("theme=dark; jwt=abc.def.ghi; lang=pt");
        assert_eq!(token.unwrap().as_str(), "abc.def.ghi");

        assert!(AuthToken::from_cookie_header("theme=dark; lang=pt").is_none());
        assert!(AuthToken::from_cookie_header("jwt=").is_none());
    }

    #[test]
    fn test_token_from_bearer_header() {
        let token = AuthToken::from_bearer_header("Bearer abc.def.ghi");
        assert_eq!(token.unwrap().as_str(), "abc.def.ghi");

        assert!(AuthToken::from_bearer_header("Basic dXNlcg==").is_none());
        assert!(AuthToken::from_bearer_header("Bearer ").is_none());
    }

    #[test]
    fn test_token_debug_is_redacted() {
        let token = AuthToken::new("very-secret-jwt");
        assert_eq!(format!("{:?}", token), "AuthToken(..)");
    }

    #[test]
    fn test_extract_backend_message() {
        assert_eq!(
            extract_backend_message(r#"{"message":"Discipline not found","statusCode":404}"#),
            Some("Discipline not found".to_string())
        );
        assert_eq!(extract_backend_message(r#"{"error":"boom"}"#), None);
        assert_eq!(extract_backend_message("<html>gateway</html>"), None);
    }

    #[test]
    fn test_endpoint_joining_and_query() {
        let client = BackendClient::new(&BackendClientConfig {
            base_url: "http://backend.local".to_string(),
            ..Default::default()
        })
        .unwrap();

        let url = client.endpoint("/discipline/3", &[]).unwrap();
        assert_eq!(url.as_str(), "http://backend.local/discipline/3");

        let url = client
            .endpoint("/helper/list", &[("page", "2"), ("search", "ana maria")])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://backend.local/helper/list?page=2&search=ana+maria"
        );
    }
}
