//! Session extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use famous_core::error::CoreError;
use famous_core::roles::is_admin;

use crate::auth::session::validate_session_token;
use crate::error::AppError;
use crate::state::AppState;

/// The caller's session, decoded from the `Authorization` header.
///
/// Read fresh for every request and never cached, so a role change at the
/// identity provider takes effect as soon as the front-end holds a new token.
///
/// ```ignore
/// async fn my_handler(session: Session) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %session.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    /// Identity provider user id (`claims.sub`).
    pub user_id: String,
    pub email: Option<String>,
    /// Role claim as sent; `None` when absent or blank.
    pub role: Option<String>,
}

impl Session {
    /// Whether this session carries the admin role. A missing role claim is
    /// treated as non-admin.
    pub fn is_admin(&self) -> bool {
        is_admin(self.role.as_deref())
    }
}

impl FromRequestParts<AppState> for Session {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("No active session".into()))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_session_token(token, &state.config.session).map_err(|e| {
            tracing::debug!(error = %e, "Rejected session token");
            AppError::Core(CoreError::Unauthorized("Invalid or expired session".into()))
        })?;

        Ok(Session {
            user_id: claims.sub,
            email: claims.email,
            // A blank claim carries no role, same as an absent one.
            role: claims.role.filter(|r| !r.trim().is_empty()),
        })
    }
}
