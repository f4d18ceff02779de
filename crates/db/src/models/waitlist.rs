//! Waitlist entry model and DTO.

use famous_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `waitlist` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WaitlistEntry {
    pub id: DbId,
    pub email: String,
    pub name: Option<String>,
    pub subscribed_at: Timestamp,
}

/// DTO for a new waitlist signup. `email` must already be normalised.
#[derive(Debug, Deserialize)]
pub struct CreateWaitlistEntry {
    pub email: String,
    pub name: Option<String>,
}
