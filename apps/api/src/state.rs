use std::sync::Arc;

use crate::config::Config;
use crate::store::Store;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable store. Default: MemStore. PgStore when DATABASE_URL is set.
    pub store: Arc<dyn Store>,
    pub config: Config,
}
