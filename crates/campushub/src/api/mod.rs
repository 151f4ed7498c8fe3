//! Typed wrappers over the academic administration backend.
//!
//! Every operation takes the caller's bearer credential explicitly; there
//! is no ambient session. Mutating wrappers validate their payload before
//! any network call. List responses may arrive bare or enveloped; the
//! client normalizes both.

pub mod client;
pub mod disciplines;
pub mod educators;
pub mod error;
pub mod helpers;
pub mod prerequisites;
pub mod rooms;
pub mod students;
pub mod timetables;
pub mod types;

pub use client::{AuthToken, BackendClient, BackendClientConfig};
pub use error::ApiError;

use std::sync::Arc;
use tracing::{info, warn};

use crate::cache::{CatalogCacheState, SessionKey};
use types::CatalogSnapshot;

/// Fetches the discipline and timetable collections together, using the
/// session-keyed cache.
///
/// Flow: cache check, per-session lock, double-check, concurrent fetch of
/// both collections, insert. Two concurrent requests for the same session
/// therefore cost one upstream round trip.
pub async fn fetch_catalog(
    client: &BackendClient,
    cache_state: &Arc<CatalogCacheState>,
    token: &AuthToken,
    force_refresh: bool,
) -> Result<CatalogSnapshot, ApiError> {
    let session_key = SessionKey::from_token(token.as_str());

    if !force_refresh {
        if let Some(cached) = cache_state.cache.get(&session_key) {
            return Ok(cached);
        }
    }

    let lock = cache_state.get_session_lock(&session_key);
    let _guard = lock.lock().await;

    if !force_refresh {
        if let Some(cached) = cache_state.cache.get(&session_key) {
            return Ok(cached);
        }
    }

    let (disciplines, timetables) = futures::try_join!(
        disciplines::fetch_all(client, token),
        timetables::fetch_all(client, token),
    )?;

    let snapshot = CatalogSnapshot {
        disciplines,
        timetables,
        fetched_at: chrono::Utc::now().to_rfc3339(),
    };

    // Misaligned rows still render (the grid falls back to the first slot
    // code), but they point at bad data upstream.
    for entry in snapshot.timetables.iter().filter(|t| !t.is_aligned()) {
        warn!(
            id = entry.id,
            discipline_id = entry.discipline_id,
            days = %entry.days,
            hours = %entry.hours,
            "Timetable entry has mismatched days/hours lists"
        );
    }

    info!(
        session = %session_key,
        disciplines = snapshot.disciplines.len(),
        timetables = snapshot.timetables.len(),
        "Fetched catalog snapshot"
    );

    cache_state.cache.insert(session_key, snapshot.clone());
    Ok(snapshot)
}
