use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::TokenVerifier;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Pluggable credential verification. Default: `StaticTokenVerifier` against
    /// the configured token; swap for a real issuer without touching handlers.
    pub verifier: Arc<dyn TokenVerifier>,
}
