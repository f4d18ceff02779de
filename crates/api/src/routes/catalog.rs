//! Route definitions for the public catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Routes mounted at `/products`.
///
/// ```text
/// GET    /                 -> list_products (?product_type_id=)
/// GET    /{id}             -> get_product
/// GET    /by-slug/{slug}   -> get_product_by_slug
/// ```
pub fn product_router() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::list_products))
        .route("/{id}", get(catalog::get_product))
        .route("/by-slug/{slug}", get(catalog::get_product_by_slug))
}

/// Routes mounted at `/product-types`.
///
/// ```text
/// GET    /                 -> list_product_types
/// GET    /{id}/sizes       -> list_product_sizes
/// ```
pub fn product_type_router() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::list_product_types))
        .route("/{id}/sizes", get(catalog::list_product_sizes))
}
