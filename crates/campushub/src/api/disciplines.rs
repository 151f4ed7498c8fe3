//! Fetch wrappers for the `/discipline` routes.

use tracing::info;

use super::client::{AuthToken, BackendClient};
use super::error::ApiError;
use super::types::{Discipline, DisciplinePayload, DisciplineUpdate};

pub async fn fetch_all(
    client: &BackendClient,
    token: &AuthToken,
) -> Result<Vec<Discipline>, ApiError> {
    client.get_list(token, "/discipline", &[]).await
}

pub async fn fetch_by_id(
    client: &BackendClient,
    token: &AuthToken,
    id: i64,
) -> Result<Discipline, ApiError> {
    client
        .get_json(token, &format!("/discipline/{id}"), &[])
        .await
}

pub async fn create(
    client: &BackendClient,
    token: &AuthToken,
    payload: &DisciplinePayload,
) -> Result<Discipline, ApiError> {
    payload.validate()?;
    let created: Discipline = client.post_json(token, "/discipline", payload).await?;
    info!(id = created.id, code = %created.code, "Created discipline");
    Ok(created)
}

pub async fn update(
    client: &BackendClient,
    token: &AuthToken,
    id: i64,
    payload: &DisciplineUpdate,
) -> Result<Discipline, ApiError> {
    client
        .patch_json(token, &format!("/discipline/{id}"), payload)
        .await
}

pub async fn delete(client: &BackendClient, token: &AuthToken, id: i64) -> Result<(), ApiError> {
    client.delete(token, &format!("/discipline/{id}")).await?;
    info!(id, "Deleted discipline");
    Ok(())
}
