use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// The pool is the only shared mutable resource; there is no in-process
/// cache or lock.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: jennskin_db::DbPool,
    /// Server configuration (JWT settings, upload directory, cookie flags).
    pub config: Arc<ServerConfig>,
}
