//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - An entity struct built from a `FromRow` database row
//! - `Deserialize` DTOs for inserts and patches

pub mod dashboard_template;
