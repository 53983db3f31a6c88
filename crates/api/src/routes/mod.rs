pub mod dashboard_templates;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /dashboard-templates/base                                    built-in catalog
///
/// /users/{user_id}/dashboard-templates                         list, create
/// /users/{user_id}/dashboard-templates/default                 user's default
/// /users/{user_id}/dashboard-templates/from-base/{template}    copy a built-in
/// /users/{user_id}/dashboard-templates/{id}                    get, rename, delete
/// /users/{user_id}/dashboard-templates/{id}/default            mark default (POST)
/// /users/{user_id}/dashboard-templates/{id}/layouts/{bp}       get, replace items
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest(
            "/dashboard-templates",
            dashboard_templates::catalog_router(),
        )
        .nest(
            "/users/{user_id}/dashboard-templates",
            dashboard_templates::user_router(),
        )
}
