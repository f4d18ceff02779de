//! Repository for the `product_sizes` table.

use famous_core::types::DbId;
use sqlx::PgPool;

use crate::models::product_size::ProductSize;

const COLUMNS: &str = "id, product_type_id, size, created_at, updated_at";

/// Read-only access to size variants.
pub struct ProductSizeRepo;

impl ProductSizeRepo {
    /// List the sizes offered for a product type, in insertion order
    /// (which is how sizes are seeded: S, M, L, XL...).
    pub async fn list_by_product_type(
        pool: &PgPool,
        product_type_id: DbId,
    ) -> Result<Vec<ProductSize>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM product_sizes WHERE product_type_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, ProductSize>(&query)
            .bind(product_type_id)
            .fetch_all(pool)
            .await
    }
}
