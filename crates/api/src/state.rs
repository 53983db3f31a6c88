use std::sync::Arc;

use gridboard_core::base_templates::BaseTemplates;

use crate::config::ServerConfig;

/// Handler state, cloned per request.
#[derive(Clone)]
pub struct AppState {
    /// Postgres pool holding the `dashboard_templates` table.
    pub pool: gridboard_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Built-in templates, assembled once at startup and served read-only.
    pub catalog: Arc<BaseTemplates>,
}

impl AppState {
    /// State over `pool` with the built-in catalog loaded.
    pub fn new(pool: gridboard_db::DbPool, config: ServerConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
            catalog: Arc::new(gridboard_core::base_templates::base_templates()),
        }
    }
}
