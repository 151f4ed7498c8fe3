//! Fetch wrappers for the `/timetable` routes.

use tracing::info;

use super::client::{AuthToken, BackendClient};
use super::error::ApiError;
use super::types::{TimetableEntry, TimetablePayload, TimetableUpdate};

pub async fn fetch_all(
    client: &BackendClient,
    token: &AuthToken,
) -> Result<Vec<TimetableEntry>, ApiError> {
    client.get_list(token, "/timetable", &[]).await
}

pub async fn create(
    client: &BackendClient,
    token: &AuthToken,
    payload: &TimetablePayload,
) -> Result<TimetableEntry, ApiError> {
    payload.validate()?;
    let created: TimetableEntry = client.post_json(token, "/timetable", payload).await?;
    info!(
        id = created.id,
        discipline_id = created.discipline_id,
        days = %created.days,
        hours = %created.hours,
        "Created timetable entry"
    );
    Ok(created)
}

pub async fn update(
    client: &BackendClient,
    token: &AuthToken,
    id: i64,
    payload: &TimetableUpdate,
) -> Result<TimetableEntry, ApiError> {
    client
        .patch_json(token, &format!("/timetable/{id}"), payload)
        .await
}

pub async fn delete(client: &BackendClient, token: &AuthToken, id: i64) -> Result<(), ApiError> {
    client.delete(token, &format!("/timetable/{id}")).await?;
    info!(id, "Deleted timetable entry");
    Ok(())
}
