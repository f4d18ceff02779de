use std::sync::Arc;

use famous_payments::PaymentGateway;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted internally and everything
/// else sits behind an `Arc`. No per-user data is cached here; sessions are
/// read from each request.
#[derive(Clone)]
pub struct AppState {
    /// Row-store connection pool.
    pub pool: famous_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Payment gateway client. A trait object so tests can substitute a fake.
    pub payments: Arc<dyn PaymentGateway>,
}
