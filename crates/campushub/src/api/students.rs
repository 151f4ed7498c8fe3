//! Fetch wrappers for student registration and the special-needs lookups,
//! plus the postal-code auto-fill used by the registration wizard.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::info;

use super::client::{AuthToken, BackendClient};
use super::error::ApiError;
use super::types::{
    PagedResponse, SpecialNeed, SpecialNeedSubcategory, Student, StudentPayload,
};

static NON_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\D").unwrap());

/// Query for the paginated student directory.
#[derive(Debug, Clone, Default)]
pub struct StudentListQuery {
    pub page: u32,
    pub limit: u32,
    pub search: Option<String>,
}

pub async fn list(
    client: &BackendClient,
    token: &AuthToken,
    query: &StudentListQuery,
) -> Result<PagedResponse<Student>, ApiError> {
    let page = query.page.max(1).to_string();
    let limit = query.limit.max(1).to_string();
    let mut params: Vec<(&str, &str)> = vec![("page", &page), ("limit", &limit)];
    if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
        params.push(("search", search));
    }
    client.get_paged(token, "/student/list", &params).await
}

pub async fn fetch_by_id(
    client: &BackendClient,
    token: &AuthToken,
    id: i64,
) -> Result<Student, ApiError> {
    client.get_json(token, &format!("/student/{id}"), &[]).await
}

pub async fn create(
    client: &BackendClient,
    token: &AuthToken,
    payload: &StudentPayload,
) -> Result<Student, ApiError> {
    payload.validate()?;
    let created: Student = client.post_json(token, "/student", payload).await?;
    info!(
        id = created.id,
        needs = payload.special_need_subcategories.len(),
        "Registered student"
    );
    Ok(created)
}

pub async fn search_special_needs(
    client: &BackendClient,
    token: &AuthToken,
    search: &str,
) -> Result<Vec<SpecialNeed>, ApiError> {
    client
        .get_list(token, "/special-needs", &[("search", search)])
        .await
}

pub async fn search_subcategories(
    client: &BackendClient,
    token: &AuthToken,
    special_need_id: i64,
    search: &str,
) -> Result<Vec<SpecialNeedSubcategory>, ApiError> {
    let id = special_need_id.to_string();
    client
        .get_list(
            token,
            "/special-need-subcategories",
            &[("specialNeedId", id.as_str()), ("search", search)],
        )
        .await
}

/// Address data resolved from a CEP (Brazilian postal code).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInfo {
    pub cep: String,
    pub street: Option<String>,
    pub complement: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

/// ViaCEP answers 200 with `{"erro": true}` for unknown codes, so the
/// not-found signal lives in the body rather than the status.
#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    #[serde(default)]
    cep: Option<String>,
    #[serde(default)]
    logradouro: Option<String>,
    #[serde(default)]
    complemento: Option<String>,
    #[serde(default)]
    bairro: Option<String>,
    #[serde(default)]
    localidade: Option<String>,
    #[serde(default)]
    uf: Option<String>,
    #[serde(default)]
    erro: Option<serde_json::Value>,
}

impl ViaCepResponse {
    fn is_error(&self) -> bool {
        match &self.erro {
            Some(serde_json::Value::Bool(b)) => *b,
            Some(serde_json::Value::String(s)) => s == "true",
            _ => false,
        }
    }
}

/// Strips formatting from a CEP and requires exactly 8 digits.
pub fn normalize_cep(cep: &str) -> Result<String, ApiError> {
    let digits = NON_DIGITS.replace_all(cep, "").to_string();
    if digits.len() != 8 {
        return Err(ApiError::invalid_payload("CEP must have 8 digits"));
    }
    Ok(digits)
}

/// Resolves address fields for a CEP via the public ViaCEP service.
/// Returns `Ok(None)` when the code is unknown.
pub async fn lookup_address(
    client: &BackendClient,
    cep: &str,
) -> Result<Option<AddressInfo>, ApiError> {
    let digits = normalize_cep(cep)?;
    let url = format!("https://viacep.com.br/ws/{digits}/json/");

    let response: ViaCepResponse = client.get_public_json(&url).await?;
    if response.is_error() {
        return Ok(None);
    }

    Ok(Some(AddressInfo {
        cep: response.cep.unwrap_or(digits),
        street: response.logradouro.filter(|s| !s.is_empty()),
        complement: response.complemento.filter(|s| !s.is_empty()),
        neighborhood: response.bairro.filter(|s| !s.is_empty()),
        city: response.localidade.filter(|s| !s.is_empty()),
        state: response.uf.filter(|s| !s.is_empty()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_cep_strips_formatting() {
        assert_eq!(normalize_cep("95700-000").unwrap(), "95700000");
        assert_eq!(normalize_cep("95.700 000").unwrap(), "95700000");
    }

    #[test]
    fn test_normalize_cep_requires_eight_digits() {
        assert!(normalize_cep("1234").is_err());
        assert!(normalize_cep("").is_err());
        assert!(normalize_cep("123456789").is_err());
    }

    #[test]
    fn test_viacep_error_flag_variants() {
        let boolean: ViaCepResponse = serde_json::from_str(r#"{"erro": true}"#).unwrap();
        assert!(boolean.is_error());

        let string: ViaCepResponse = serde_json::from_str(r#"{"erro": "true"}"#).unwrap();
        assert!(string.is_error());

        let found: ViaCepResponse = serde_json::from_str(
            r#"{"cep":"95700-000","logradouro":"Rua Alfa","bairro":"Centro",
                "localidade":"Bento Gonçalves","uf":"RS"}"#,
        )
        .unwrap();
        assert!(!found.is_error());
    }
}
