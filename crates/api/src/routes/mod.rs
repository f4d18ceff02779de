pub mod admin;
pub mod catalog;
pub mod checkout;
pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /products                                        list (public)
/// /products/{id}                                   detail
/// /products/by-slug/{slug}                         detail by derived slug
/// /product-types                                   list
/// /product-types/{id}/sizes                        sizes for a type
///
/// /checkout/customers                              create customer (POST)
/// /checkout/payment-intents                        create intent (POST)
/// /checkout/payment-intents/{id}                   verify intent (GET)
/// /checkout/webhook                                gateway events (POST, signed)
///
/// /session/role                                    role check (session required)
///
/// /waitlist                                        signup (POST, public)
/// /admin/waitlist                                  list (admin only)
/// /admin/diagnostics/database                      row-store probe (admin only)
///
/// /metadata/{description}                          link-preview metadata
/// /slugs                                           slug preview (?text=&qualifier=)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Catalog.
        .nest("/products", catalog::product_router())
        .nest("/product-types", catalog::product_type_router())
        // Checkout and payment verification.
        .nest("/checkout", checkout::router())
        // Session.
        .route("/session/role", get(handlers::session::role_check))
        // Waitlist signup (public) and admin tools.
        .route("/waitlist", post(handlers::waitlist::subscribe))
        .nest("/admin", admin::router())
        // Link previews and slugs.
        .route(
            "/metadata/{description}",
            get(handlers::metadata::page_metadata),
        )
        .route("/slugs", get(handlers::metadata::preview_slug))
}
