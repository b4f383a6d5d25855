//! Conversation routes.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use models::{Conversation, ConversationRequest, User};
use serde::Deserialize;
use tracing::{debug, error};

use super::ApiError;
use crate::services::conversation::{self, ConversationError};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ListQuery {
    /// Only conversations containing this user.
    pub member: Option<String>,
}

pub(crate) fn conversation_error_to_api(err: ConversationError) -> ApiError {
    match err {
        ConversationError::Rule(e) => ApiError::bad_request(e.to_string()),
        e @ ConversationError::UnknownMember(_) => ApiError::not_found(e.to_string()),
        ConversationError::NotFound(_) => ApiError::not_found("conversation not found"),
        ConversationError::Database(e) => {
            error!(error = %e, "conversation query failed");
            ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// `POST /api/conversation`: create a conversation with its members.
pub async fn create_conversation(
    State(state): State<AppState>,
    payload: Result<Json<ConversationRequest>, JsonRejection>,
) -> Result<Json<Conversation>, ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        debug!(error = %rejection, "rejected conversation body");
        ApiError::bad_request("invalid request body")
    })?;

    let conversation = conversation::create_conversation(&state.pool, &req)
        .await
        .map_err(conversation_error_to_api)?;
    Ok(Json(conversation))
}

/// `GET /api/conversations?member=`: list conversations.
pub async fn list_conversations(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Conversation>>, ApiError> {
    let conversations = match query.member.as_deref().filter(|m| !m.is_empty()) {
        Some(member) => conversation::list_conversations_by_member(&state.pool, member).await,
        None => conversation::list_conversations(&state.pool).await,
    }
    .map_err(conversation_error_to_api)?;
    Ok(Json(conversations))
}

/// `GET /api/conversations/:id`: fetch one conversation.
pub async fn get_conversation(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
) -> Result<Json<Conversation>, ApiError> {
    let conversation = conversation::get_conversation(&state.pool, &conversation_id)
        .await
        .map_err(conversation_error_to_api)?;
    Ok(Json(conversation))
}

/// `GET /api/conversations/:id/members`: list members.
pub async fn list_members(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
) -> Result<Json<Vec<User>>, ApiError> {
    let members = conversation::conversation_members(&state.pool, &conversation_id)
        .await
        .map_err(conversation_error_to_api)?;
    Ok(Json(members))
}

#[cfg(test)]
#[path = "conversations_test.rs"]
mod tests;
