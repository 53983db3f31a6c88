use crate::types::DbId;

/// Errors raised by template operations before anything reaches storage.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A template id that does not exist for the requesting user.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A name, breakpoint, or layout item that breaks a template rule.
    #[error("Invalid template: {0}")]
    Validation(String),
}
