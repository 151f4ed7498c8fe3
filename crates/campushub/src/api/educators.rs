//! Fetch wrappers for the `/educator` routes.

use tracing::info;

use super::client::{AuthToken, BackendClient};
use super::error::ApiError;
use super::types::{Educator, EducatorPayload};

pub async fn fetch_all(
    client: &BackendClient,
    token: &AuthToken,
) -> Result<Vec<Educator>, ApiError> {
    client.get_list(token, "/educator", &[]).await
}

pub async fn create(
    client: &BackendClient,
    token: &AuthToken,
    payload: &EducatorPayload,
) -> Result<Educator, ApiError> {
    payload.validate()?;
    let created: Educator = client.post_json(token, "/educator", payload).await?;
    info!(id = created.id, "Created educator");
    Ok(created)
}

pub async fn update(
    client: &BackendClient,
    token: &AuthToken,
    id: i64,
    payload: &EducatorPayload,
) -> Result<Educator, ApiError> {
    payload.validate()?;
    client
        .patch_json(token, &format!("/educator/{id}"), payload)
        .await
}

pub async fn delete(client: &BackendClient, token: &AuthToken, id: i64) -> Result<(), ApiError> {
    client.delete(token, &format!("/educator/{id}")).await?;
    info!(id, "Deleted educator");
    Ok(())
}
