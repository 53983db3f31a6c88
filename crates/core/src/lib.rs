//! Gridboard domain model.
//!
//! Pure types and validation for dashboard templates. This crate has no
//! database or HTTP dependencies so both the repository layer and the API
//! layer can share it.

pub mod base_templates;
pub mod dashboard_template;
pub mod error;
pub mod types;
