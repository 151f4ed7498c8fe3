//! Room and block endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;
use tracing::{error, info};

use crate::api::types::{BlockPayload, BlockUpdate, RoomPayload, RoomUpdate};
use crate::api::{rooms, AuthToken};
use crate::server::types::api_error_response;
use crate::types::AppState;

/// GET /rooms
pub async fn list_rooms(
    State(s): State<Arc<AppState>>,
    Extension(token): Extension<AuthToken>,
) -> Response {
    info!("GET /rooms");

    match rooms::fetch_rooms(&s.client, &token).await {
        Ok(items) => {
            s.store.rooms.replace_all(items.clone());
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => {
            error!("Failed to fetch rooms: {}", e);
            api_error_response(e)
        }
    }
}

/// GET /rooms/:id
pub async fn get_room(
    Path(id): Path<i64>,
    State(s): State<Arc<AppState>>,
    Extension(token): Extension<AuthToken>,
) -> Response {
    info!("GET /rooms/{}", id);

    match rooms::fetch_room(&s.client, &token, id).await {
        Ok(room) => (StatusCode::OK, Json(room)).into_response(),
        Err(e) => {
            error!("Failed to fetch room {}: {}", id, e);
            api_error_response(e)
        }
    }
}

/// POST /rooms
pub async fn create_room(
    State(s): State<Arc<AppState>>,
    Extension(token): Extension<AuthToken>,
    Json(payload): Json<RoomPayload>,
) -> Response {
    info!("POST /rooms");

    match rooms::create_room(&s.client, &token, &payload).await {
        Ok(created) => {
            s.store.rooms.upsert(created.clone());
            (StatusCode::CREATED, Json(created)).into_response()
        }
        Err(e) => {
            error!("Failed to create room: {}", e);
            api_error_response(e)
        }
    }
}

/// PATCH /rooms/:id
pub async fn update_room(
    Path(id): Path<i64>,
    State(s): State<Arc<AppState>>,
    Extension(token): Extension<AuthToken>,
    Json(payload): Json<RoomUpdate>,
) -> Response {
    info!("PATCH /rooms/{}", id);

    match rooms::update_room(&s.client, &token, id, &payload).await {
        Ok(updated) => {
            s.store.rooms.upsert(updated.clone());
            (StatusCode::OK, Json(updated)).into_response()
        }
        Err(e) => {
            error!("Failed to update room {}: {}", id, e);
            api_error_response(e)
        }
    }
}

/// DELETE /rooms/:id
pub async fn delete_room(
    Path(id): Path<i64>,
    State(s): State<Arc<AppState>>,
    Extension(token): Extension<AuthToken>,
) -> Response {
    info!("DELETE /rooms/{}", id);

    match rooms::delete_room(&s.client, &token, id).await {
        Ok(()) => {
            s.store.rooms.remove(id);
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => {
            error!("Failed to delete room {}: {}", id, e);
            api_error_response(e)
        }
    }
}

/// GET /blocks
pub async fn list_blocks(
    State(s): State<Arc<AppState>>,
    Extension(token): Extension<AuthToken>,
) -> Response {
    info!("GET /blocks");

    match rooms::fetch_blocks(&s.client, &token).await {
        Ok(items) => {
            s.store.blocks.replace_all(items.clone());
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => {
            error!("Failed to fetch blocks: {}", e);
            api_error_response(e)
        }
    }
}

/// GET /blocks/:id
pub async fn get_block(
    Path(id): Path<i64>,
    State(s): State<Arc<AppState>>,
    Extension(token): Extension<AuthToken>,
) -> Response {
    info!("GET /blocks/{}", id);

    match rooms::fetch_block(&s.client, &token, id).await {
        Ok(block) => (StatusCode::OK, Json(block)).into_response(),
        Err(e) => {
            error!("Failed to fetch block {}: {}", id, e);
            api_error_response(e)
        }
    }
}

/// POST /blocks
pub async fn create_block(
    State(s): State<Arc<AppState>>,
    Extension(token): Extension<AuthToken>,
    Json(payload): Json<BlockPayload>,
) -> Response {
    info!("POST /blocks");

    match rooms::create_block(&s.client, &token, &payload).await {
        Ok(created) => {
            s.store.blocks.upsert(created.clone());
            (StatusCode::CREATED, Json(created)).into_response()
        }
        Err(e) => {
            error!("Failed to create block: {}", e);
            api_error_response(e)
        }
    }
}

/// PATCH /blocks/:id
pub async fn update_block(
    Path(id): Path<i64>,
    State(s): State<Arc<AppState>>,
    Extension(token): Extension<AuthToken>,
    Json(payload): Json<BlockUpdate>,
) -> Response {
    info!("PATCH /blocks/{}", id);

    match rooms::update_block(&s.client, &token, id, &payload).await {
        Ok(updated) => {
            s.store.blocks.upsert(updated.clone());
            (StatusCode::OK, Json(updated)).into_response()
        }
        Err(e) => {
            error!("Failed to update block {}: {}", id, e);
            api_error_response(e)
        }
    }
}

/// DELETE /blocks/:id
pub async fn delete_block(
    Path(id): Path<i64>,
    State(s): State<Arc<AppState>>,
    Extension(token): Extension<AuthToken>,
) -> Response {
    info!("DELETE /blocks/{}", id);

    match rooms::delete_block(&s.client, &token, id).await {
        Ok(()) => {
            s.store.blocks.remove(id);
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => {
            error!("Failed to delete block {}: {}", id, e);
            api_error_response(e)
        }
    }
}
