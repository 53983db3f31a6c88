//! Route definitions for dashboard templates.
//!
//! Two routers are provided:
//! - `catalog_router()` for the built-in catalog mounted at `/dashboard-templates`
//! - `user_router()` for per-user templates mounted at
//!   `/users/{user_id}/dashboard-templates`

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::dashboard_templates;
use crate::state::AppState;

/// Built-in catalog routes mounted at `/dashboard-templates`.
///
/// ```text
/// GET    /base  -> list_base_templates
/// ```
pub fn catalog_router() -> Router<AppState> {
    Router::new().route("/base", get(dashboard_templates::list_base_templates))
}

/// Per-user template routes mounted at `/users/{user_id}/dashboard-templates`.
///
/// ```text
/// GET    /                               -> list_templates
/// POST   /                               -> create_template
/// GET    /default                        -> get_default_template
/// POST   /from-base/{template}           -> create_from_base
/// GET    /{id}                           -> get_template
/// PUT    /{id}                           -> rename_template
/// DELETE /{id}                           -> delete_template
/// POST   /{id}/default                   -> set_default_template
/// GET    /{id}/layouts/{breakpoint}      -> get_layout
/// PUT    /{id}/layouts/{breakpoint}      -> replace_layout
/// ```
pub fn user_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(dashboard_templates::list_templates).post(dashboard_templates::create_template),
        )
        .route("/default", get(dashboard_templates::get_default_template))
        .route(
            "/from-base/{template}",
            post(dashboard_templates::create_from_base),
        )
        .route(
            "/{id}",
            get(dashboard_templates::get_template)
                .put(dashboard_templates::rename_template)
                .delete(dashboard_templates::delete_template),
        )
        .route(
            "/{id}/default",
            post(dashboard_templates::set_default_template),
        )
        .route(
            "/{id}/layouts/{breakpoint}",
            get(dashboard_templates::get_layout).put(dashboard_templates::replace_layout),
        )
}
