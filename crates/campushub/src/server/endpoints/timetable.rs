//! Timetable endpoints: the rendered grid plus entry CRUD.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

use crate::api::types::{TimetablePayload, TimetableUpdate};
use crate::api::{self, timetables, AuthToken};
use crate::schedule::{build_grid, Period, ALL_DAYS};
use crate::server::types::{api_error_response, ApiErrorType};
use crate::types::AppState;

fn default_semester() -> u32 {
    1
}

/// Query parameters for the grid endpoint.
#[derive(Debug, Deserialize)]
pub struct GridQueryParams {
    #[serde(default = "default_semester")]
    pub semester: u32,
    /// "morning" | "afternoon" | "evening"; absent or "all" keeps every slot
    #[serde(default)]
    pub period: Option<String>,
    /// If true, bypass the catalog cache
    #[serde(default)]
    pub refresh: bool,
}

/// GET /timetable/grid
///
/// Returns the slot × weekday grid for one semester, one row per slot.
pub async fn get_grid(
    State(s): State<Arc<AppState>>,
    Extension(token): Extension<AuthToken>,
    Query(params): Query<GridQueryParams>,
) -> Response {
    info!(
        "GET /timetable/grid (semester={}, period={:?}, refresh={})",
        params.semester, params.period, params.refresh
    );

    let period = match params.period.as_deref() {
        None | Some("all") | Some("") => None,
        Some(code) => match Period::from_code(code) {
            Some(period) => Some(period),
            None => {
                return ApiErrorType::from((
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "Unknown period",
                    Some(format!("no period named '{code}'")),
                ))
                .into_response()
            }
        },
    };

    let snapshot =
        match api::fetch_catalog(&s.client, &s.catalog_cache, &token, params.refresh).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                error!("Failed to fetch catalog for grid: {}", e);
                return api_error_response(e);
            }
        };

    let grid = build_grid(
        params.semester,
        period,
        &snapshot.disciplines,
        &snapshot.timetables,
    );

    let rows: Vec<_> = grid
        .slots()
        .iter()
        .map(|slot| {
            let mut cells = serde_json::Map::new();
            for day in ALL_DAYS {
                cells.insert(day.code().to_string(), json!(grid.cell(*slot, day)));
            }
            json!({
                "slot": slot.code(),
                "label": slot.label(),
                "period": slot.period().code(),
                "cells": cells,
            })
        })
        .collect();

    (
        StatusCode::OK,
        Json(json!({
            "semester": params.semester,
            "occupations": grid.occupation_count(),
            "fetchedAt": snapshot.fetched_at,
            "days": ALL_DAYS.iter().map(|d| json!({
                "code": d.code(),
                "label": d.label(),
            })).collect::<Vec<_>>(),
            "rows": rows,
        })),
    )
        .into_response()
}

/// GET /timetable
pub async fn list_entries(
    State(s): State<Arc<AppState>>,
    Extension(token): Extension<AuthToken>,
) -> Response {
    info!("GET /timetable");

    match timetables::fetch_all(&s.client, &token).await {
        Ok(entries) => {
            s.store.timetables.replace_all(entries.clone());
            (StatusCode::OK, Json(entries)).into_response()
        }
        Err(e) => {
            error!("Failed to fetch timetable entries: {}", e);
            api_error_response(e)
        }
    }
}

/// POST /timetable
pub async fn create_entry(
    State(s): State<Arc<AppState>>,
    Extension(token): Extension<AuthToken>,
    Json(payload): Json<TimetablePayload>,
) -> Response {
    info!("POST /timetable (discipline_id={})", payload.discipline_id);

    match timetables::create(&s.client, &token, &payload).await {
        Ok(created) => {
            s.store.timetables.upsert(created.clone());
            s.catalog_cache.cache.clear();
            (StatusCode::CREATED, Json(created)).into_response()
        }
        Err(e) => {
            error!("Failed to create timetable entry: {}", e);
            api_error_response(e)
        }
    }
}

/// PATCH /timetable/:id
pub async fn update_entry(
    Path(id): Path<i64>,
    State(s): State<Arc<AppState>>,
    Extension(token): Extension<AuthToken>,
    Json(payload): Json<TimetableUpdate>,
) -> Response {
    info!("PATCH /timetable/{}", id);

    match timetables::update(&s.client, &token, id, &payload).await {
        Ok(updated) => {
            s.store.timetables.upsert(updated.clone());
            s.catalog_cache.cache.clear();
            (StatusCode::OK, Json(updated)).into_response()
        }
        Err(e) => {
            error!("Failed to update timetable entry {}: {}", id, e);
            api_error_response(e)
        }
    }
}

/// DELETE /timetable/:id
pub async fn delete_entry(
    Path(id): Path<i64>,
    State(s): State<Arc<AppState>>,
    Extension(token): Extension<AuthToken>,
) -> Response {
    info!("DELETE /timetable/{}", id);

    match timetables::delete(&s.client, &token, id).await {
        Ok(()) => {
            s.store.timetables.remove(id);
            s.catalog_cache.cache.clear();
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => {
            error!("Failed to delete timetable entry {}: {}", id, e);
            api_error_response(e)
        }
    }
}
