/// Row id of a stored dashboard template (`BIGSERIAL`).
pub type DbId = i64;

/// Owner reference carried on every template. Opaque here; whatever issues
/// identities upstream decides what the number means.
pub type UserIdentityId = i64;

/// `created_at` / `updated_at` columns, always UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
