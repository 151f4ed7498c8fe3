//! Dashboard statistics and catalog-cache management.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

use crate::api::{self, AuthToken};
use crate::schedule::{coverage, period_distribution};
use crate::server::types::api_error_response;
use crate::types::AppState;

#[derive(Debug, Deserialize)]
pub struct StatsQueryParams {
    /// If true, bypass the catalog cache
    #[serde(default)]
    pub refresh: bool,
}

/// GET /dashboard/stats
///
/// Timetable coverage plus the per-period discipline distribution.
pub async fn get_stats(
    State(s): State<Arc<AppState>>,
    Extension(token): Extension<AuthToken>,
    Query(params): Query<StatsQueryParams>,
) -> Response {
    info!("GET /dashboard/stats (refresh={})", params.refresh);

    match api::fetch_catalog(&s.client, &s.catalog_cache, &token, params.refresh).await {
        Ok(snapshot) => {
            let coverage = coverage(&snapshot.disciplines, &snapshot.timetables);
            let periods = period_distribution(&snapshot.timetables);
            let single_period = periods.single_period();

            (
                StatusCode::OK,
                Json(json!({
                    "totalDisciplines": snapshot.disciplines.len(),
                    "totalTimetables": snapshot.timetables.len(),
                    "coverage": coverage,
                    "periods": periods,
                    "singlePeriod": single_period,
                    "fetchedAt": snapshot.fetched_at,
                })),
            )
                .into_response()
        }
        Err(e) => {
            error!("Failed to compute dashboard stats: {}", e);
            api_error_response(e)
        }
    }
}

/// GET /dashboard/cache_stats
pub async fn get_cache_stats(State(s): State<Arc<AppState>>) -> Response {
    let stats = s.catalog_cache.cache.stats();
    (
        StatusCode::OK,
        Json(json!({
            "total_entries": stats.total_entries,
            "active_entries": stats.active_entries,
            "expired_entries": stats.expired_entries,
        })),
    )
        .into_response()
}

/// POST /dashboard/invalidate_cache
pub async fn invalidate_cache(State(s): State<Arc<AppState>>) -> Response {
    info!("POST /dashboard/invalidate_cache");

    s.catalog_cache.cache.clear();

    (StatusCode::OK, Json(json!({ "message": "Cache invalidated" }))).into_response()
}
