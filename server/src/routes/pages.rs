//! History-API fallback for the webui bundle.
//!
//! Deep links such as `/users` have no file on disk; the browser router
//! handles them once the SPA shell loads. The shell is served with the
//! status the route table assigns: 200 for declared pages, 404 for paths
//! that land on the not-found catch-all.

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use models::Page;
use models::route::page_for;
use tracing::warn;

use crate::state::AppState;

pub const INDEX_FILE: &str = "index.html";

/// Status the shell is served with for `path`.
#[must_use]
pub fn shell_status(path: &str) -> StatusCode {
    match page_for(path) {
        Page::NotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::OK,
    }
}

/// Serve `index.html` for any path that is not a file in the bundle.
pub async fn spa_entry(State(state): State<AppState>, uri: Uri) -> Response {
    let index = state.webui_dir.join(INDEX_FILE);
    match tokio::fs::read_to_string(&index).await {
        Ok(html) => (shell_status(uri.path()), Html(html)).into_response(),
        Err(e) => {
            warn!(path = %index.display(), error = %e, "webui bundle unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "webui bundle not found; build it with `trunk build --release` in webui/",
            )
                .into_response()
        }
    }
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
