//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the database pool and the location of the webui bundle.

use std::path::PathBuf;
use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub webui_dir: Arc<PathBuf>,
}

impl AppState {
    #[must_use]
    pub fn new(pool: SqlitePool, webui_dir: PathBuf) -> Self {
        Self { pool, webui_dir: Arc::new(webui_dir) }
    }
}
