//! Fetch wrappers for the `/helper` support-staff directory.

use tracing::info;

use super::client::{AuthToken, BackendClient};
use super::error::ApiError;
use super::types::{Helper, HelperOccupation, HelperPayload, PagedResponse};

/// Query for the paginated helper directory.
#[derive(Debug, Clone, Default)]
pub struct HelperListQuery {
    pub page: u32,
    pub limit: u32,
    pub occupation: Option<HelperOccupation>,
    pub search: Option<String>,
}

pub async fn list(
    client: &BackendClient,
    token: &AuthToken,
    query: &HelperListQuery,
) -> Result<PagedResponse<Helper>, ApiError> {
    let page = query.page.max(1).to_string();
    let limit = query.limit.max(1).to_string();
    let mut params: Vec<(&str, &str)> = vec![("page", &page), ("limit", &limit)];
    let occupation = query.occupation.map(|o| match o {
        HelperOccupation::Professional => "professional",
        HelperOccupation::Volunteer => "volunteer",
    });
    if let Some(occupation) = occupation {
        params.push(("occupation", occupation));
    }
    if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
        params.push(("search", search));
    }
    client.get_paged(token, "/helper/list", &params).await
}

pub async fn create(
    client: &BackendClient,
    token: &AuthToken,
    payload: &HelperPayload,
) -> Result<Helper, ApiError> {
    payload.validate()?;
    let created: Helper = client.post_json(token, "/helper", payload).await?;
    info!(id = created.id, "Created helper");
    Ok(created)
}
