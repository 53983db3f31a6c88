//! The `{ "data": ... }` envelope shared by every successful response.
//!
//! Templates, layouts, and the catalog all go out wrapped, including the
//! "no default template" case, which is `{"data": null}`.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    /// Wrap `data` and hand it to axum as a JSON body.
    pub fn json(data: T) -> Json<Self> {
        Json(Self { data })
    }
}
