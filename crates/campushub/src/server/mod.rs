use std::sync::Arc;

use axum::routing::{get, post};
use axum::{middleware as mw, Router};

use crate::server::endpoints::{
    dashboard, disciplines, educators, helpers, rooms, status, students, timetable,
};
use crate::types::AppState;

mod endpoints;
mod middleware;
mod types;

/// Creates a router that can be used by `axum`.
///
/// # Parameters
/// - `app_state`: The app server state.
///
/// # Returns
/// The router.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    // Everything except /health requires a bearer credential; the
    // middleware rejects requests without one before any backend call.
    let api_router = Router::new()
        .route("/timetable/grid", get(timetable::get_grid))
        .route(
            "/timetable",
            get(timetable::list_entries).post(timetable::create_entry),
        )
        .route(
            "/timetable/:id",
            axum::routing::patch(timetable::update_entry).delete(timetable::delete_entry),
        )
        .route("/dashboard/stats", get(dashboard::get_stats))
        .route("/dashboard/cache_stats", get(dashboard::get_cache_stats))
        .route(
            "/dashboard/invalidate_cache",
            post(dashboard::invalidate_cache),
        )
        .route(
            "/disciplines",
            get(disciplines::list_disciplines).post(disciplines::create_discipline),
        )
        .route(
            "/disciplines/:id",
            get(disciplines::get_discipline)
                .patch(disciplines::update_discipline)
                .delete(disciplines::delete_discipline),
        )
        .route(
            "/prerequisites",
            get(disciplines::list_prerequisites).post(disciplines::create_prerequisite),
        )
        .route(
            "/prerequisites/:id",
            axum::routing::delete(disciplines::delete_prerequisite),
        )
        .route(
            "/educators",
            get(educators::list_educators).post(educators::create_educator),
        )
        .route(
            "/educators/:id",
            axum::routing::patch(educators::update_educator).delete(educators::delete_educator),
        )
        .route("/rooms", get(rooms::list_rooms).post(rooms::create_room))
        .route(
            "/rooms/:id",
            get(rooms::get_room)
                .patch(rooms::update_room)
                .delete(rooms::delete_room),
        )
        .route("/blocks", get(rooms::list_blocks).post(rooms::create_block))
        .route(
            "/blocks/:id",
            get(rooms::get_block)
                .patch(rooms::update_block)
                .delete(rooms::delete_block),
        )
        .route(
            "/students",
            get(students::list_students).post(students::create_student),
        )
        .route("/students/:id", get(students::get_student))
        .route("/special-needs", get(students::search_special_needs))
        .route(
            "/special-need-subcategories",
            get(students::search_subcategories),
        )
        .route("/address/:cep", get(students::lookup_address))
        .route(
            "/helpers",
            get(helpers::list_helpers).post(helpers::create_helper),
        )
        .layer(mw::from_fn(middleware::require_token));

    Router::new()
        .route("/health", get(status::get_health))
        .merge(api_router)
        .with_state(app_state)
}
