//! Fetch wrappers for the `/rooms` and `/blocks` routes.
//!
//! These two resources use snake_case wire fields, unlike the academic
//! resources; the DTOs in [`super::types`] mirror that.

use tracing::info;

use super::client::{AuthToken, BackendClient};
use super::error::ApiError;
use super::types::{Block, BlockPayload, BlockUpdate, Room, RoomPayload, RoomUpdate};

pub async fn fetch_rooms(
    client: &BackendClient,
    token: &AuthToken,
) -> Result<Vec<Room>, ApiError> {
    client.get_list(token, "/rooms", &[]).await
}

pub async fn fetch_room(
    client: &BackendClient,
    token: &AuthToken,
    id: i64,
) -> Result<Room, ApiError> {
    client.get_json(token, &format!("/rooms/{id}"), &[]).await
}

pub async fn create_room(
    client: &BackendClient,
    token: &AuthToken,
    payload: &RoomPayload,
) -> Result<Room, ApiError> {
    let created: Room = client.post_json(token, "/rooms", payload).await?;
    info!(id = created.id, block_id = created.block_id, "Created room");
    Ok(created)
}

pub async fn update_room(
    client: &BackendClient,
    token: &AuthToken,
    id: i64,
    payload: &RoomUpdate,
) -> Result<Room, ApiError> {
    client
        .patch_json(token, &format!("/rooms/{id}"), payload)
        .await
}

pub async fn delete_room(
    client: &BackendClient,
    token: &AuthToken,
    id: i64,
) -> Result<(), ApiError> {
    client.delete(token, &format!("/rooms/{id}")).await?;
    info!(id, "Deleted room");
    Ok(())
}

pub async fn fetch_blocks(
    client: &BackendClient,
    token: &AuthToken,
) -> Result<Vec<Block>, ApiError> {
    client.get_list(token, "/blocks", &[]).await
}

pub async fn fetch_block(
    client: &BackendClient,
    token: &AuthToken,
    id: i64,
) -> Result<Block, ApiError> {
    client.get_json(token, &format!("/blocks/{id}"), &[]).await
}

pub async fn create_block(
    client: &BackendClient,
    token: &AuthToken,
    payload: &BlockPayload,
) -> Result<Block, ApiError> {
    let created: Block = client.post_json(token, "/blocks", payload).await?;
    info!(id = created.id, "Created block");
    Ok(created)
}

pub async fn update_block(
    client: &BackendClient,
    token: &AuthToken,
    id: i64,
    payload: &BlockUpdate,
) -> Result<Block, ApiError> {
    client
        .patch_json(token, &format!("/blocks/{id}"), payload)
        .await
}

pub async fn delete_block(
    client: &BackendClient,
    token: &AuthToken,
    id: i64,
) -> Result<(), ApiError> {
    client.delete(token, &format!("/blocks/{id}")).await?;
    info!(id, "Deleted block");
    Ok(())
}
