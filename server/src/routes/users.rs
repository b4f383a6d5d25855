//! `/api` handlers for users.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use models::User;
use serde::Deserialize;
use tracing::error;

use super::ApiError;
use crate::services::user::{self, UserError};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SessionQuery {
    pub username: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUsernameQuery {
    pub user_id: Option<String>,
    pub new_username: Option<String>,
}

pub(crate) fn user_error_to_api(err: UserError) -> ApiError {
    match err {
        UserError::NotFound(_) => ApiError::not_found("user not found"),
        UserError::UsernameTaken(_) => ApiError::new(StatusCode::CONFLICT, "username already exists"),
        UserError::InvalidUsername(e) => ApiError::bad_request(e.to_string()),
        UserError::Database(e) => {
            error!(error = %e, "user query failed");
            ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// Non-blank query parameter or a 400 naming it.
fn required<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str, ApiError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::bad_request(format!("{name} parameter is required")))
}

/// `POST /api/user/session?username=`: register a user by name.
pub async fn create_session(
    State(state): State<AppState>,
    Query(query): Query<SessionQuery>,
) -> Result<Json<User>, ApiError> {
    let username = required(query.username.as_deref(), "username")?;
    let user = user::create_user(&state.pool, username)
        .await
        .map_err(user_error_to_api)?;
    Ok(Json(user))
}

/// `GET /api/users`: list every user.
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = user::list_users(&state.pool).await.map_err(user_error_to_api)?;
    Ok(Json(users))
}

/// `POST /api/user?userId=&newUsername=`: rename a user.
pub async fn update_username(
    State(state): State<AppState>,
    Query(query): Query<UpdateUsernameQuery>,
) -> Result<Json<User>, ApiError> {
    let user_id = required(query.user_id.as_deref(), "userId")?;
    let new_username = required(query.new_username.as_deref(), "newUsername")?;
    let user = user::update_username(&state.pool, user_id, new_username)
        .await
        .map_err(user_error_to_api)?;
    Ok(Json(user))
}

/// `GET /api/users/:id`: fetch one user.
pub async fn get_user(State(state): State<AppState>, Path(user_id): Path<String>) -> Result<Json<User>, ApiError> {
    let user = user::get_user(&state.pool, &user_id).await.map_err(user_error_to_api)?;
    Ok(Json(user))
}

/// `DELETE /api/users/:id`: delete a user and their memberships.
pub async fn delete_user(State(state): State<AppState>, Path(user_id): Path<String>) -> Result<StatusCode, ApiError> {
    user::delete_user(&state.pool, &user_id).await.map_err(user_error_to_api)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
