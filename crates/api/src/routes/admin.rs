//! Route definitions for the `/admin` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{diagnostics, waitlist};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// All routes require the `admin` role (enforced by handler extractors).
///
/// ```text
/// GET    /waitlist                -> waitlist::list
/// GET    /diagnostics/database    -> diagnostics::database
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/waitlist", get(waitlist::list))
        .route("/diagnostics/database", get(diagnostics::database))
}
