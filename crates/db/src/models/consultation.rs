//! Consultation request model. Only read for connectivity diagnostics.

use famous_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `consultations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Consultation {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub message: Option<String>,
    pub created_at: Timestamp,
}
