//! Handler for the session role check.

use axum::Json;
use famous_core::roles::ROLE_NONE;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::session::Session;
use crate::response::{data, DataResponse};

/// Result of `GET /session/role`.
#[derive(Debug, Serialize)]
pub struct RoleCheckResponse {
    pub user_id: String,
    /// Role claim as sent by the identity provider, or `"none"` when absent.
    pub role: String,
    pub is_admin: bool,
}

/// GET /api/v1/session/role
///
/// Report the caller's role. No session is a 401; a session without a role
/// claim is a normal, non-admin response.
pub async fn role_check(session: Session) -> AppResult<Json<DataResponse<RoleCheckResponse>>> {
    let is_admin = session.is_admin();
    Ok(data(RoleCheckResponse {
        role: session.role.unwrap_or_else(|| ROLE_NONE.to_string()),
        user_id: session.user_id,
        is_admin,
    }))
}
