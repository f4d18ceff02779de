//! Size variant model.

use famous_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `product_sizes` table. Sizes belong to a product type,
/// not to an individual product.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProductSize {
    pub id: DbId,
    pub product_type_id: DbId,
    pub size: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
