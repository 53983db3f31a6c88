//! Repository for the `dashboard_templates` table.
//!
//! Every lookup is scoped to the owning user so one user can never read or
//! modify another user's templates by guessing an ID.

use gridboard_core::dashboard_template::{DashboardTemplateBase, GridSize, TemplateConfig};
use gridboard_core::types::{DbId, UserIdentityId};
use sqlx::{PgConnection, PgPool};

use crate::models::dashboard_template::{
    DashboardTemplate, DashboardTemplateRow, UpdateDashboardTemplate,
};

/// Column list for `dashboard_templates` queries.
const COLUMNS: &str = "\
    id, user_identity_id, is_default, name, display_name, \
    sx, md, lg, xl, created_at, updated_at";

/// Provides data access for dashboard templates.
pub struct DashboardTemplateRepo;

impl DashboardTemplateRepo {
    /// Insert a new template for a user.
    ///
    /// When `is_default` is set, the user's previous default is cleared in
    /// the same transaction.
    pub async fn create(
        pool: &PgPool,
        user_identity_id: UserIdentityId,
        base: &DashboardTemplateBase,
        is_default: bool,
        config: &TemplateConfig,
    ) -> Result<DashboardTemplate, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if is_default {
            Self::clear_default(&mut *tx, user_identity_id, None).await?;
        }

        let query = format!(
            "INSERT INTO dashboard_templates \
                 (user_identity_id, is_default, name, display_name, sx, md, lg, xl) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, DashboardTemplateRow>(&query)
            .bind(user_identity_id)
            .bind(is_default)
            .bind(&base.name)
            .bind(&base.display_name)
            .bind(&config.sx)
            .bind(&config.md)
            .bind(&config.lg)
            .bind(&config.xl)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row.into())
    }

    /// List a user's templates, default first, then by name.
    pub async fn list_for_user(
        pool: &PgPool,
        user_identity_id: UserIdentityId,
    ) -> Result<Vec<DashboardTemplate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM dashboard_templates \
             WHERE user_identity_id = $1 \
             ORDER BY is_default DESC, name, id"
        );
        let rows = sqlx::query_as::<_, DashboardTemplateRow>(&query)
            .bind(user_identity_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Find one of a user's templates by ID.
    pub async fn find_for_user(
        pool: &PgPool,
        user_identity_id: UserIdentityId,
        id: DbId,
    ) -> Result<Option<DashboardTemplate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM dashboard_templates \
             WHERE id = $1 AND user_identity_id = $2"
        );
        let row = sqlx::query_as::<_, DashboardTemplateRow>(&query)
            .bind(id)
            .bind(user_identity_id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Into::into))
    }

    /// Find the template a user has marked as default, if any.
    pub async fn find_default_for_user(
        pool: &PgPool,
        user_identity_id: UserIdentityId,
    ) -> Result<Option<DashboardTemplate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM dashboard_templates \
             WHERE user_identity_id = $1 AND is_default"
        );
        let row = sqlx::query_as::<_, DashboardTemplateRow>(&query)
            .bind(user_identity_id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Into::into))
    }

    /// Change a template's name and/or display name.
    ///
    /// Uses `COALESCE` so only provided fields are changed.
    pub async fn rename(
        pool: &PgPool,
        user_identity_id: UserIdentityId,
        id: DbId,
        dto: &UpdateDashboardTemplate,
    ) -> Result<Option<DashboardTemplate>, sqlx::Error> {
        let query = format!(
            "UPDATE dashboard_templates SET \
                 name         = COALESCE($3, name), \
                 display_name = COALESCE($4, display_name), \
                 updated_at   = NOW() \
             WHERE id = $1 AND user_identity_id = $2 \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, DashboardTemplateRow>(&query)
            .bind(id)
            .bind(user_identity_id)
            .bind(&dto.name)
            .bind(&dto.display_name)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Into::into))
    }

    /// Overwrite the stored items of one breakpoint, leaving the other three
    /// untouched.
    pub async fn replace_layout(
        pool: &PgPool,
        user_identity_id: UserIdentityId,
        id: DbId,
        breakpoint: GridSize,
        items: &serde_json::Value,
    ) -> Result<Option<DashboardTemplate>, sqlx::Error> {
        // The column name comes from a closed enum, never from user input.
        let column = breakpoint.as_str();
        let query = format!(
            "UPDATE dashboard_templates SET \
                 {column}   = $3, \
                 updated_at = NOW() \
             WHERE id = $1 AND user_identity_id = $2 \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, DashboardTemplateRow>(&query)
            .bind(id)
            .bind(user_identity_id)
            .bind(items)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Into::into))
    }

    /// Mark a template as the user's default, clearing any previous default.
    ///
    /// Returns `None` (and changes nothing) if the template does not exist
    /// for this user.
    pub async fn set_default(
        pool: &PgPool,
        user_identity_id: UserIdentityId,
        id: DbId,
    ) -> Result<Option<DashboardTemplate>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let cleared = Self::clear_default(&mut *tx, user_identity_id, Some(id)).await?;

        let query = format!(
            "UPDATE dashboard_templates SET \
                 is_default = TRUE, \
                 updated_at = NOW() \
             WHERE id = $1 AND user_identity_id = $2 \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, DashboardTemplateRow>(&query)
            .bind(id)
            .bind(user_identity_id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(row) = row else {
            tx.rollback().await?;
            return Ok(None);
        };

        tx.commit().await?;
        tracing::debug!(
            user_identity_id,
            template_id = id,
            cleared,
            "Default dashboard template changed",
        );
        Ok(Some(row.into()))
    }

    /// Delete one of a user's templates.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(
        pool: &PgPool,
        user_identity_id: UserIdentityId,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM dashboard_templates WHERE id = $1 AND user_identity_id = $2",
        )
        .bind(id)
        .bind(user_identity_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Clear the default flag on a user's templates, optionally sparing one.
    ///
    /// Returns the number of rows changed.
    async fn clear_default(
        conn: &mut PgConnection,
        user_identity_id: UserIdentityId,
        except_id: Option<DbId>,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE dashboard_templates SET \
                 is_default = FALSE, \
                 updated_at = NOW() \
             WHERE user_identity_id = $1 AND is_default \
               AND ($2::BIGINT IS NULL OR id <> $2)",
        )
        .bind(user_identity_id)
        .bind(except_id)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }
}
