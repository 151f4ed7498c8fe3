//! Discipline and prerequisite endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;
use tracing::{error, info};

use crate::api::types::{DisciplinePayload, DisciplineUpdate, PrerequisitePayload};
use crate::api::{disciplines, prerequisites, AuthToken};
use crate::server::types::api_error_response;
use crate::types::AppState;

/// GET /disciplines
pub async fn list_disciplines(
    State(s): State<Arc<AppState>>,
    Extension(token): Extension<AuthToken>,
) -> Response {
    info!("GET /disciplines");

    match disciplines::fetch_all(&s.client, &token).await {
        Ok(items) => {
            s.store.disciplines.replace_all(items.clone());
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => {
            error!("Failed to fetch disciplines: {}", e);
            api_error_response(e)
        }
    }
}

/// GET /disciplines/:id
pub async fn get_discipline(
    Path(id): Path<i64>,
    State(s): State<Arc<AppState>>,
    Extension(token): Extension<AuthToken>,
) -> Response {
    info!("GET /disciplines/{}", id);

    match disciplines::fetch_by_id(&s.client, &token, id).await {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => {
            error!("Failed to fetch discipline {}: {}", id, e);
            api_error_response(e)
        }
    }
}

/// POST /disciplines
pub async fn create_discipline(
    State(s): State<Arc<AppState>>,
    Extension(token): Extension<AuthToken>,
    Json(payload): Json<DisciplinePayload>,
) -> Response {
    info!("POST /disciplines (code={})", payload.code);

    match disciplines::create(&s.client, &token, &payload).await {
        Ok(created) => {
            s.store.disciplines.upsert(created.clone());
            s.catalog_cache.cache.clear();
            (StatusCode::CREATED, Json(created)).into_response()
        }
        Err(e) => {
            error!("Failed to create discipline: {}", e);
            api_error_response(e)
        }
    }
}

/// PATCH /disciplines/:id
pub async fn update_discipline(
    Path(id): Path<i64>,
    State(s): State<Arc<AppState>>,
    Extension(token): Extension<AuthToken>,
    Json(payload): Json<DisciplineUpdate>,
) -> Response {
    info!("PATCH /disciplines/{}", id);

    match disciplines::update(&s.client, &token, id, &payload).await {
        Ok(updated) => {
            s.store.disciplines.upsert(updated.clone());
            s.catalog_cache.cache.clear();
            (StatusCode::OK, Json(updated)).into_response()
        }
        Err(e) => {
            error!("Failed to update discipline {}: {}", id, e);
            api_error_response(e)
        }
    }
}

/// DELETE /disciplines/:id
pub async fn delete_discipline(
    Path(id): Path<i64>,
    State(s): State<Arc<AppState>>,
    Extension(token): Extension<AuthToken>,
) -> Response {
    info!("DELETE /disciplines/{}", id);

    match disciplines::delete(&s.client, &token, id).await {
        Ok(()) => {
            s.store.disciplines.remove(id);
            s.catalog_cache.cache.clear();
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => {
            error!("Failed to delete discipline {}: {}", id, e);
            api_error_response(e)
        }
    }
}

/// GET /prerequisites
pub async fn list_prerequisites(
    State(s): State<Arc<AppState>>,
    Extension(token): Extension<AuthToken>,
) -> Response {
    info!("GET /prerequisites");

    match prerequisites::fetch_all(&s.client, &token).await {
        Ok(items) => {
            s.store.prerequisites.replace_all(items.clone());
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => {
            error!("Failed to fetch prerequisites: {}", e);
            api_error_response(e)
        }
    }
}

/// POST /prerequisites
pub async fn create_prerequisite(
    State(s): State<Arc<AppState>>,
    Extension(token): Extension<AuthToken>,
    Json(payload): Json<PrerequisitePayload>,
) -> Response {
    info!(
        "POST /prerequisites ({} -> {})",
        payload.discipline_id, payload.prerequisite_id
    );

    match prerequisites::create(&s.client, &token, &payload).await {
        Ok(created) => {
            s.store.prerequisites.upsert(created.clone());
            (StatusCode::CREATED, Json(created)).into_response()
        }
        Err(e) => {
            error!("Failed to create prerequisite: {}", e);
            api_error_response(e)
        }
    }
}

/// DELETE /prerequisites/:id
pub async fn delete_prerequisite(
    Path(id): Path<i64>,
    State(s): State<Arc<AppState>>,
    Extension(token): Extension<AuthToken>,
) -> Response {
    info!("DELETE /prerequisites/{}", id);

    match prerequisites::delete(&s.client, &token, id).await {
        Ok(()) => {
            s.store.prerequisites.remove(id);
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => {
            error!("Failed to delete prerequisite {}: {}", id, e);
            api_error_response(e)
        }
    }
}
