//! Educator endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;
use tracing::{error, info};

use crate::api::types::EducatorPayload;
use crate::api::{educators, AuthToken};
use crate::server::types::api_error_response;
use crate::types::AppState;

/// GET /educators
pub async fn list_educators(
    State(s): State<Arc<AppState>>,
    Extension(token): Extension<AuthToken>,
) -> Response {
    info!("GET /educators");

    match educators::fetch_all(&s.client, &token).await {
        Ok(items) => {
            s.store.educators.replace_all(items.clone());
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => {
            error!("Failed to fetch educators: {}", e);
            api_error_response(e)
        }
    }
}

/// POST /educators
pub async fn create_educator(
    State(s): State<Arc<AppState>>,
    Extension(token): Extension<AuthToken>,
    Json(payload): Json<EducatorPayload>,
) -> Response {
    info!("POST /educators");

    match educators::create(&s.client, &token, &payload).await {
        Ok(created) => {
            s.store.educators.upsert(created.clone());
            (StatusCode::CREATED, Json(created)).into_response()
        }
        Err(e) => {
            error!("Failed to create educator: {}", e);
            api_error_response(e)
        }
    }
}

/// PATCH /educators/:id
pub async fn update_educator(
    Path(id): Path<i64>,
    State(s): State<Arc<AppState>>,
    Extension(token): Extension<AuthToken>,
    Json(payload): Json<EducatorPayload>,
) -> Response {
    info!("PATCH /educators/{}", id);

    match educators::update(&s.client, &token, id, &payload).await {
        Ok(updated) => {
            s.store.educators.upsert(updated.clone());
            (StatusCode::OK, Json(updated)).into_response()
        }
        Err(e) => {
            error!("Failed to update educator {}: {}", id, e);
            api_error_response(e)
        }
    }
}

/// DELETE /educators/:id
pub async fn delete_educator(
    Path(id): Path<i64>,
    State(s): State<Arc<AppState>>,
    Extension(token): Extension<AuthToken>,
) -> Response {
    info!("DELETE /educators/{}", id);

    match educators::delete(&s.client, &token, id).await {
        Ok(()) => {
            s.store.educators.remove(id);
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => {
            error!("Failed to delete educator {}: {}", id, e);
            api_error_response(e)
        }
    }
}
