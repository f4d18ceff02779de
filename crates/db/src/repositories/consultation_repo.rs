//! Repository for the `consultations` table.

use sqlx::PgPool;

use crate::models::consultation::Consultation;

const COLUMNS: &str = "id, name, email, message, created_at";

/// Read access used by the database diagnostics endpoint.
pub struct ConsultationRepo;

impl ConsultationRepo {
    /// Most recent consultations, newest first, capped at `limit`.
    pub async fn list(pool: &PgPool, limit: i64) -> Result<Vec<Consultation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM consultations ORDER BY created_at DESC LIMIT $1");
        sqlx::query_as::<_, Consultation>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM consultations")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
