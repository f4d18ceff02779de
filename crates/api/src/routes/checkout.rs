//! Route definitions for the `/checkout` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::checkout;
use crate::state::AppState;

/// Routes mounted at `/checkout`.
///
/// ```text
/// POST   /customers                -> create_customer
/// POST   /payment-intents          -> create_payment_intent
/// GET    /payment-intents/{id}     -> verify_payment_intent
/// POST   /webhook                  -> webhook (gateway-signed)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/customers", post(checkout::create_customer))
        .route("/payment-intents", post(checkout::create_payment_intent))
        .route("/payment-intents/{id}", get(checkout::verify_payment_intent))
        .route("/webhook", post(checkout::webhook))
}
