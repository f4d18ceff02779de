//! Shared response envelope for API handlers.
//!
//! Resource and collection responses are wrapped as `{ "data": ... }`;
//! error bodies are produced by [`crate::error::AppError`] instead.

use axum::Json;
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Wrap a payload in the envelope, ready to return from a handler.
///
/// ```ignore
/// Ok(data(products))
/// ```
pub fn data<T: Serialize>(payload: T) -> Json<DataResponse<T>> {
    Json(DataResponse { data: payload })
}
