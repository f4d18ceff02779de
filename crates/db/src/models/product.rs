//! Sellable product model.

use famous_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    /// Unit price in the smallest currency unit (cents).
    pub price: i64,
    pub image_url: Option<String>,
    pub product_type_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
