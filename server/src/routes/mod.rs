//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API under `/api`, the liveness probe, and the
//! webui bundle under a single Axum router. Static files are served from the
//! bundle directory; anything else falls through to [`pages::spa_entry`],
//! which hands the SPA shell to the browser router.

pub mod conversations;
pub mod pages;
pub mod users;

use axum::Router;
use axum::extract::State;
use axum::handler::Handler;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use models::ErrorBody;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::state::AppState;

// =============================================================================
// API ERROR
// =============================================================================

/// Error response rendered as `{"error": "..."}` with a status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody::new(self.message))).into_response()
    }
}

// =============================================================================
// ROUTER
// =============================================================================

/// JSON API, mounted under `/api`.
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/user/session", post(users::create_session))
        .route("/user", post(users::update_username))
        .route("/users", get(users::list_users))
        .route("/users/{id}", get(users::get_user).delete(users::delete_user))
        .route("/conversation", post(conversations::create_conversation))
        .route("/conversations", get(conversations::list_conversations))
        .route("/conversations/{id}", get(conversations::get_conversation))
        .route("/conversations/{id}/members", get(conversations::list_members))
        .fallback(api_not_found)
}

/// Full application router: API, liveness, and the webui bundle.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let webui = ServeDir::new(state.webui_dir.as_path()).fallback(pages::spa_entry.with_state(state.clone()));

    Router::new()
        .nest("/api", api_routes())
        .route("/liveness", get(liveness))
        .fallback_service(webui)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn api_not_found() -> ApiError {
    ApiError::not_found("no such endpoint")
}

/// `GET /liveness`: 200 while the database answers.
async fn liveness(State(state): State<AppState>) -> StatusCode {
    match crate::db::ping(&state.pool).await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            warn!(error = %e, "liveness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}


#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
