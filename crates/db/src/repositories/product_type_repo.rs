//! Repository for the `product_types` table.

use famous_core::types::DbId;
use sqlx::PgPool;

use crate::models::product_type::ProductType;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Read-only access to product types.
pub struct ProductTypeRepo;

impl ProductTypeRepo {
    /// List all product types ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<ProductType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM product_types ORDER BY name ASC, id ASC");
        sqlx::query_as::<_, ProductType>(&query).fetch_all(pool).await
    }

    /// Find a product type by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProductType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM product_types WHERE id = $1");
        sqlx::query_as::<_, ProductType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
