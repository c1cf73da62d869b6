use sqlx::PgPool;

use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// The pool is the only storage handle; each request borrows a session from it
/// and returns it (commit or rollback) on every exit path.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    #[allow(dead_code)]
    pub config: Config,
}
