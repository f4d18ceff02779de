//! Repository for the `waitlist` table.

use sqlx::PgPool;

use crate::models::waitlist::{CreateWaitlistEntry, WaitlistEntry};

const COLUMNS: &str = "id, email, name, subscribed_at";

/// Provides signup and listing for the launch waitlist.
pub struct WaitlistRepo;

impl WaitlistRepo {
    /// List all entries, most recent signup first.
    pub async fn list_recent(pool: &PgPool) -> Result<Vec<WaitlistEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM waitlist ORDER BY subscribed_at DESC, id DESC");
        sqlx::query_as::<_, WaitlistEntry>(&query)
            .fetch_all(pool)
            .await
    }

    /// Insert a signup. A duplicate email violates `uq_waitlist_email`.
    pub async fn subscribe(
        pool: &PgPool,
        input: &CreateWaitlistEntry,
    ) -> Result<WaitlistEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO waitlist (email, name)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WaitlistEntry>(&query)
            .bind(&input.email)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }
}
