//! Fetch wrappers for the `/prerequisites` routes.

use tracing::info;

use super::client::{AuthToken, BackendClient};
use super::error::ApiError;
use super::types::{Prerequisite, PrerequisitePayload};

pub async fn fetch_all(
    client: &BackendClient,
    token: &AuthToken,
) -> Result<Vec<Prerequisite>, ApiError> {
    client.get_list(token, "/prerequisites", &[]).await
}

pub async fn create(
    client: &BackendClient,
    token: &AuthToken,
    payload: &PrerequisitePayload,
) -> Result<Prerequisite, ApiError> {
    payload.validate()?;
    let created: Prerequisite = client.post_json(token, "/prerequisites", payload).await?;
    info!(
        id = created.id,
        discipline_id = created.discipline_id,
        prerequisite_id = created.prerequisite_id,
        "Created prerequisite"
    );
    Ok(created)
}

pub async fn delete(client: &BackendClient, token: &AuthToken, id: i64) -> Result<(), ApiError> {
    client.delete(token, &format!("/prerequisites/{id}")).await?;
    info!(id, "Deleted prerequisite");
    Ok(())
}
