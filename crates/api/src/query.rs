//! Query parameter types shared by handler modules.

use famous_core::types::DbId;
use serde::Deserialize;

/// `GET /products?product_type_id=` filter.
#[derive(Debug, Deserialize)]
pub struct ProductFilterParams {
    pub product_type_id: Option<DbId>,
}

/// `GET /slugs?text=&qualifier=`.
#[derive(Debug, Deserialize)]
pub struct SlugParams {
    pub text: String,
    pub qualifier: Option<String>,
}

/// `?limit=` for diagnostic sampling. Clamped by the handler.
#[derive(Debug, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}
