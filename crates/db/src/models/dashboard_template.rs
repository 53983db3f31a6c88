//! Dashboard template entity model and DTOs.

use gridboard_core::dashboard_template::{DashboardTemplateBase, GridLayouts, TemplateConfig};
use gridboard_core::error::CoreError;
use gridboard_core::types::{DbId, Timestamp, UserIdentityId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `dashboard_templates` table.
#[derive(Debug, Clone, FromRow)]
pub struct DashboardTemplateRow {
    pub id: DbId,
    pub user_identity_id: UserIdentityId,
    pub is_default: bool,
    pub name: String,
    pub display_name: String,
    pub sx: serde_json::Value,
    pub md: serde_json::Value,
    pub lg: serde_json::Value,
    pub xl: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A user's saved dashboard template.
///
/// The flat table row is regrouped into the embedded `templateBase` and
/// `templateConfig` objects of the wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardTemplate {
    pub id: DbId,
    #[serde(rename = "userIdentityID")]
    pub user_identity_id: UserIdentityId,
    pub default: bool,
    pub template_base: DashboardTemplateBase,
    pub template_config: TemplateConfig,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<DashboardTemplateRow> for DashboardTemplate {
    fn from(row: DashboardTemplateRow) -> Self {
        Self {
            id: row.id,
            user_identity_id: row.user_identity_id,
            default: row.is_default,
            template_base: DashboardTemplateBase {
                name: row.name,
                display_name: row.display_name,
            },
            template_config: TemplateConfig {
                sx: row.sx,
                md: row.md,
                lg: row.lg,
                xl: row.xl,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a template. Layout items arrive decoded so they can be
/// validated before being encoded into storage blobs.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDashboardTemplate {
    pub template_base: DashboardTemplateBase,
    #[serde(default)]
    pub default: bool,
    #[serde(default)]
    pub template_config: GridLayouts,
}

impl CreateDashboardTemplate {
    /// Validate the name pair and every layout item.
    pub fn validate(&self) -> Result<(), CoreError> {
        self.template_base.validate()?;
        self.template_config.validate()?;
        Ok(())
    }
}

/// DTO for renaming a template. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDashboardTemplate {
    pub name: Option<String>,
    pub display_name: Option<String>,
}

impl UpdateDashboardTemplate {
    /// Reject fields that are present but blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(CoreError::Validation(
                "Template name must not be empty".to_string(),
            ));
        }
        if self
            .display_name
            .as_deref()
            .is_some_and(|n| n.trim().is_empty())
        {
            return Err(CoreError::Validation(
                "Template display name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
