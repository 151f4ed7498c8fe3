//! Helper (support staff) directory endpoints.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

use crate::api::helpers::{self, HelperListQuery};
use crate::api::types::{HelperOccupation, HelperPayload};
use crate::api::AuthToken;
use crate::server::types::api_error_response;
use crate::types::AppState;

#[derive(Debug, Deserialize)]
pub struct HelperListParams {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
}

/// GET /helpers
pub async fn list_helpers(
    State(s): State<Arc<AppState>>,
    Extension(token): Extension<AuthToken>,
    Query(params): Query<HelperListParams>,
) -> Response {
    info!(
        "GET /helpers (page={:?}, occupation={:?})",
        params.page, params.occupation
    );

    // Empty string or "todos" means no occupation filter.
    let occupation = match params.occupation.as_deref() {
        Some("professional") => Some(HelperOccupation::Professional),
        Some("volunteer") => Some(HelperOccupation::Volunteer),
        _ => None,
    };

    let query = HelperListQuery {
        page: params.page.unwrap_or(1),
        limit: params.limit.unwrap_or(12),
        occupation,
        search: params.search,
    };

    match helpers::list(&s.client, &token, &query).await {
        Ok(page) => (
            StatusCode::OK,
            Json(json!({
                "data": page.data,
                "pagination": page.pagination,
            })),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to fetch helpers: {}", e);
            api_error_response(e)
        }
    }
}

/// POST /helpers
pub async fn create_helper(
    State(s): State<Arc<AppState>>,
    Extension(token): Extension<AuthToken>,
    Json(payload): Json<HelperPayload>,
) -> Response {
    info!("POST /helpers");

    match helpers::create(&s.client, &token, &payload).await {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(e) => {
            error!("Failed to create helper: {}", e);
            api_error_response(e)
        }
    }
}
