//! Domain error type shared across the workspace.

use crate::types::DbId;

/// Errors raised by domain logic and surfaced by the API layer.
///
/// The API maps each variant to a fixed HTTP status; see
/// `famous_api::error::AppError`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A row looked up by primary key does not exist.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A row looked up by a natural key (slug, payment intent id) does not exist.
    #[error("Entity not found: {entity} '{key}'")]
    NotFoundByKey { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// No session, or the session token could not be verified.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// A valid session without the required role.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// A required collaborator is not configured on this deployment.
    #[error("Unavailable: {0}")]
    Unavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
