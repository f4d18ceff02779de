//! Repository for the `products` table.

use famous_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::Product;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, price, image_url, product_type_id, \
                       created_at, updated_at";

/// Read-only access to the catalog.
pub struct ProductRepo;

impl ProductRepo {
    /// List every product ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY id ASC");
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// List products belonging to one product type.
    pub async fn list_by_product_type(
        pool: &PgPool,
        product_type_id: DbId,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM products WHERE product_type_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Product>(&query)
            .bind(product_type_id)
            .fetch_all(pool)
            .await
    }

    /// Find a product by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
