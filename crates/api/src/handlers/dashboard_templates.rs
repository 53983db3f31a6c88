//! Handlers for user dashboard templates and the built-in catalog.
//!
//! Submitted grid items are validated against their breakpoint before they
//! are encoded into a template config, so a rejected request never changes
//! stored data.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use gridboard_core::dashboard_template::{
    validate_layout, AvailableTemplate, GridItem, GridSize, TemplateConfig,
};
use gridboard_core::error::CoreError;
use gridboard_core::types::{DbId, UserIdentityId};
use gridboard_db::models::dashboard_template::{
    CreateDashboardTemplate, UpdateDashboardTemplate,
};
use gridboard_db::repositories::DashboardTemplateRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::DataResponse;
use crate::state::AppState;

/// Path parameters for a single template.
#[derive(Debug, Deserialize)]
pub struct TemplatePath {
    pub user_id: UserIdentityId,
    pub id: DbId,
}

/// Path parameters for one breakpoint layout of a template.
#[derive(Debug, Deserialize)]
pub struct LayoutPath {
    pub user_id: UserIdentityId,
    pub id: DbId,
    pub breakpoint: String,
}

/// Path parameters for copying a built-in template.
#[derive(Debug, Deserialize)]
pub struct BasePath {
    pub user_id: UserIdentityId,
    pub template: String,
}

fn template_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "DashboardTemplate",
        id,
    })
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// GET /api/v1/dashboard-templates/base
///
/// List the built-in templates keyed by template kind.
pub async fn list_base_templates(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(DataResponse::json(state.catalog))
}

// ---------------------------------------------------------------------------
// User templates
// ---------------------------------------------------------------------------

/// GET /api/v1/users/{user_id}/dashboard-templates
pub async fn list_templates(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<UserIdentityId>,
) -> AppResult<impl IntoResponse> {
    let templates = DashboardTemplateRepo::list_for_user(&state.pool, user_id).await?;

    Ok(DataResponse::json(templates))
}

/// POST /api/v1/users/{user_id}/dashboard-templates
///
/// Create a template from a name pair and per-breakpoint item lists.
pub async fn create_template(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<UserIdentityId>,
    AppJson(input): AppJson<CreateDashboardTemplate>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let config = input.template_config.to_template_config();
    let template = DashboardTemplateRepo::create(
        &state.pool,
        user_id,
        &input.template_base,
        input.default,
        &config,
    )
    .await?;

    tracing::info!(
        template_id = template.id,
        user_id,
        name = %template.template_base.name,
        default = template.default,
        "Dashboard template created",
    );

    Ok((StatusCode::CREATED, DataResponse::json(template)))
}

/// POST /api/v1/users/{user_id}/dashboard-templates/from-base/{template}
///
/// Copy a built-in template into the user's templates.
pub async fn create_from_base(
    State(state): State<AppState>,
    AppPath(path): AppPath<BasePath>,
) -> AppResult<impl IntoResponse> {
    let kind = path.template.parse::<AvailableTemplate>()?;
    let base = state.catalog.get(&kind).ok_or_else(|| {
        AppError::InternalError(format!("Built-in template {kind} missing from catalog"))
    })?;

    let template = DashboardTemplateRepo::create(
        &state.pool,
        path.user_id,
        &base.template_base(),
        false,
        &base.template_config,
    )
    .await?;

    tracing::info!(
        template_id = template.id,
        user_id = path.user_id,
        base = %kind,
        "Dashboard template copied from built-in",
    );

    Ok((StatusCode::CREATED, DataResponse::json(template)))
}

/// GET /api/v1/users/{user_id}/dashboard-templates/default
///
/// Returns `null` data when the user has no default template.
pub async fn get_default_template(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<UserIdentityId>,
) -> AppResult<impl IntoResponse> {
    let template = DashboardTemplateRepo::find_default_for_user(&state.pool, user_id).await?;

    Ok(DataResponse::json(template))
}

/// GET /api/v1/users/{user_id}/dashboard-templates/{id}
pub async fn get_template(
    State(state): State<AppState>,
    AppPath(path): AppPath<TemplatePath>,
) -> AppResult<impl IntoResponse> {
    let template = DashboardTemplateRepo::find_for_user(&state.pool, path.user_id, path.id)
        .await?
        .ok_or_else(|| template_not_found(path.id))?;

    Ok(DataResponse::json(template))
}

/// PUT /api/v1/users/{user_id}/dashboard-templates/{id}
///
/// Change the template's name and/or display name.
pub async fn rename_template(
    State(state): State<AppState>,
    AppPath(path): AppPath<TemplatePath>,
    AppJson(input): AppJson<UpdateDashboardTemplate>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let template = DashboardTemplateRepo::rename(&state.pool, path.user_id, path.id, &input)
        .await?
        .ok_or_else(|| template_not_found(path.id))?;

    tracing::info!(
        template_id = path.id,
        user_id = path.user_id,
        "Dashboard template renamed",
    );

    Ok(DataResponse::json(template))
}

/// DELETE /api/v1/users/{user_id}/dashboard-templates/{id}
pub async fn delete_template(
    State(state): State<AppState>,
    AppPath(path): AppPath<TemplatePath>,
) -> AppResult<impl IntoResponse> {
    let deleted = DashboardTemplateRepo::delete(&state.pool, path.user_id, path.id).await?;

    if !deleted {
        return Err(template_not_found(path.id));
    }

    tracing::info!(
        template_id = path.id,
        user_id = path.user_id,
        "Dashboard template deleted",
    );

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/users/{user_id}/dashboard-templates/{id}/default
///
/// Make this the user's default template.
pub async fn set_default_template(
    State(state): State<AppState>,
    AppPath(path): AppPath<TemplatePath>,
) -> AppResult<impl IntoResponse> {
    let template = DashboardTemplateRepo::set_default(&state.pool, path.user_id, path.id)
        .await?
        .ok_or_else(|| template_not_found(path.id))?;

    tracing::info!(
        template_id = path.id,
        user_id = path.user_id,
        "Default dashboard template set",
    );

    Ok(DataResponse::json(template))
}

// ---------------------------------------------------------------------------
// Breakpoint layouts
// ---------------------------------------------------------------------------

/// GET /api/v1/users/{user_id}/dashboard-templates/{id}/layouts/{breakpoint}
///
/// Decode the stored items of one breakpoint.
pub async fn get_layout(
    State(state): State<AppState>,
    AppPath(path): AppPath<LayoutPath>,
) -> AppResult<impl IntoResponse> {
    let breakpoint = path.breakpoint.parse::<GridSize>()?;

    let template = DashboardTemplateRepo::find_for_user(&state.pool, path.user_id, path.id)
        .await?
        .ok_or_else(|| template_not_found(path.id))?;

    let items = template
        .template_config
        .breakpoint_items(breakpoint)
        .map_err(|e| {
            AppError::InternalError(format!(
                "Stored {breakpoint} layout of template {} is not a grid item list: {e}",
                path.id
            ))
        })?;

    Ok(DataResponse::json(items))
}

/// PUT /api/v1/users/{user_id}/dashboard-templates/{id}/layouts/{breakpoint}
///
/// Replace the items of one breakpoint. The other breakpoints are untouched.
pub async fn replace_layout(
    State(state): State<AppState>,
    AppPath(path): AppPath<LayoutPath>,
    AppJson(items): AppJson<Vec<GridItem>>,
) -> AppResult<impl IntoResponse> {
    let breakpoint = path.breakpoint.parse::<GridSize>()?;
    validate_layout(breakpoint, &items)?;

    let mut config = TemplateConfig::default();
    config.set_breakpoint_items(breakpoint, &items);

    let template = DashboardTemplateRepo::replace_layout(
        &state.pool,
        path.user_id,
        path.id,
        breakpoint,
        config.breakpoint(breakpoint),
    )
    .await?
    .ok_or_else(|| template_not_found(path.id))?;

    tracing::info!(
        template_id = path.id,
        user_id = path.user_id,
        %breakpoint,
        item_count = items.len(),
        "Dashboard template layout replaced",
    );

    Ok(DataResponse::json(template))
}
