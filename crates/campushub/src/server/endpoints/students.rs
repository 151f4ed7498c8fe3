//! Student registration endpoints, special-needs lookups, and the
//! postal-code auto-fill used by the registration wizard.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

use crate::api::students::{self, StudentListQuery};
use crate::api::types::{NeedSelection, StudentPayload};
use crate::api::AuthToken;
use crate::schedule::{PairSelection, SelectedPair};
use crate::server::types::{api_error_response, ApiErrorType};
use crate::types::AppState;

#[derive(Debug, Deserialize)]
pub struct StudentListParams {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub search: Option<String>,
}

/// GET /students
pub async fn list_students(
    State(s): State<Arc<AppState>>,
    Extension(token): Extension<AuthToken>,
    Query(params): Query<StudentListParams>,
) -> Response {
    info!(
        "GET /students (page={:?}, search={:?})",
        params.page, params.search
    );

    let query = StudentListQuery {
        page: params.page.unwrap_or(1),
        limit: params.limit.unwrap_or(12),
        search: params.search,
    };

    match students::list(&s.client, &token, &query).await {
        Ok(page) => (
            StatusCode::OK,
            Json(json!({
                "data": page.data,
                "pagination": page.pagination,
            })),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to fetch students: {}", e);
            api_error_response(e)
        }
    }
}

/// GET /students/:id
pub async fn get_student(
    Path(id): Path<i64>,
    State(s): State<Arc<AppState>>,
    Extension(token): Extension<AuthToken>,
) -> Response {
    info!("GET /students/{}", id);

    match students::fetch_by_id(&s.client, &token, id).await {
        Ok(student) => (StatusCode::OK, Json(student)).into_response(),
        Err(e) => {
            error!("Failed to fetch student {}: {}", id, e);
            api_error_response(e)
        }
    }
}

/// Registration request: the wizard payload plus its raw need/subcategory
/// picks. When `needs` is present it supersedes any pre-flattened
/// subcategory ids.
#[derive(Debug, Deserialize)]
pub struct RegistrationRequest {
    #[serde(flatten)]
    pub student: StudentPayload,
    #[serde(default)]
    pub needs: Vec<NeedSelection>,
}

/// POST /students
pub async fn create_student(
    State(s): State<Arc<AppState>>,
    Extension(token): Extension<AuthToken>,
    Json(request): Json<RegistrationRequest>,
) -> Response {
    info!("POST /students (needs={})", request.needs.len());

    let mut payload = request.student;
    if !request.needs.is_empty() {
        let mut selection = PairSelection::new();
        for need in &request.needs {
            let pair = SelectedPair::new(
                need.special_need_id.to_string(),
                need.special_need_subcategory_id.to_string(),
                need.special_need_name.clone(),
                need.special_need_subcategory_name.clone(),
            );
            if let Err(e) = selection.add(pair) {
                return ApiErrorType::from((
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "Duplicate need selection",
                    Some(format!(
                        "need {} / subcategory {}: {e}",
                        need.special_need_id, need.special_need_subcategory_id
                    )),
                ))
                .into_response();
            }
        }
        payload.special_need_subcategories = selection.secondary_ids();
    }

    match students::create(&s.client, &token, &payload).await {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(e) => {
            error!("Failed to register student: {}", e);
            api_error_response(e)
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NeedSearchParams {
    #[serde(default)]
    pub search: String,
}

/// GET /special-needs
pub async fn search_special_needs(
    State(s): State<Arc<AppState>>,
    Extension(token): Extension<AuthToken>,
    Query(params): Query<NeedSearchParams>,
) -> Response {
    info!("GET /special-needs (search={:?})", params.search);

    match students::search_special_needs(&s.client, &token, &params.search).await {
        Ok(needs) => (StatusCode::OK, Json(json!({ "data": needs }))).into_response(),
        Err(e) => {
            error!("Failed to search special needs: {}", e);
            api_error_response(e)
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SubcategorySearchParams {
    #[serde(rename = "specialNeedId")]
    pub special_need_id: i64,
    #[serde(default)]
    pub search: String,
}

/// GET /special-need-subcategories
pub async fn search_subcategories(
    State(s): State<Arc<AppState>>,
    Extension(token): Extension<AuthToken>,
    Query(params): Query<SubcategorySearchParams>,
) -> Response {
    info!(
        "GET /special-need-subcategories (specialNeedId={})",
        params.special_need_id
    );

    match students::search_subcategories(&s.client, &token, params.special_need_id, &params.search)
        .await
    {
        Ok(subcategories) => {
            (StatusCode::OK, Json(json!({ "data": subcategories }))).into_response()
        }
        Err(e) => {
            error!("Failed to search subcategories: {}", e);
            api_error_response(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_request_parses_wizard_shape() {
        let json = r#"{
            "firstName": "Rui",
            "lastName": "Souza",
            "email": "rui@example.com",
            "password": "secret1",
            "gender": "male",
            "maritalStatus": "single",
            "isStudent": true,
            "needs": [
                {"specialNeedId": 1, "specialNeedSubcategoryId": 10, "specialNeedName": "Visual"},
                {"specialNeedId": 1, "specialNeedSubcategoryId": 11}
            ]
        }"#;

        let request: RegistrationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.student.first_name, "Rui");
        assert_eq!(request.needs.len(), 2);
        assert_eq!(request.needs[0].special_need_subcategory_id, 10);
        assert!(request.student.special_need_subcategories.is_empty());
    }
}

/// GET /address/:cep
///
/// Public postal-code lookup for the registration wizard's address step.
pub async fn lookup_address(Path(cep): Path<String>, State(s): State<Arc<AppState>>) -> Response {
    info!("GET /address/{}", cep);

    match students::lookup_address(&s.client, &cep).await {
        Ok(Some(address)) => (StatusCode::OK, Json(address)).into_response(),
        Ok(None) => ApiErrorType::from((
            StatusCode::NOT_FOUND,
            "Unknown CEP",
            Some(format!("no address found for '{cep}'")),
        ))
        .into_response(),
        Err(e) => {
            error!("Failed to look up CEP {}: {}", cep, e);
            api_error_response(e)
        }
    }
}
