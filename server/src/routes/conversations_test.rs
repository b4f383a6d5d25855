use axum::http::Method;
use serde_json::json;

use super::*;
use crate::routes::test_helpers::send_json;
use crate::state::test_helpers::{seed_user, test_app_state};

#[test]
fn conversation_error_to_api_maps_statuses() {
    let rule = conversation_error_to_api(ConversationError::Rule(models::ConversationRuleError::SingleMember));
    assert_eq!(rule.status, StatusCode::BAD_REQUEST);
    assert_eq!(rule.message, "cannot create a conversation with only one user");

    let unknown = conversation_error_to_api(ConversationError::UnknownMember("u1".into()));
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
    assert_eq!(unknown.message, "user with UserID u1 does not exist");

    assert_eq!(
        conversation_error_to_api(ConversationError::NotFound("c".into())).status,
        StatusCode::NOT_FOUND
    );
}

// =============================================================================
// POST /api/conversation
// =============================================================================

#[tokio::test]
async fn create_conversation_returns_camel_case_body() {
    let state = test_app_state().await;
    let a = seed_user(&state, "a").await;
    let b = seed_user(&state, "b").await;
    let body = json!({ "user_ids": [a.user_id, b.user_id], "is_group": false }).to_string();

    let (status, conv) = send_json(state, Method::POST, "/api/conversation", Some(&body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(conv["isGroup"], false);
    assert_eq!(conv["groupName"], "");
    assert_eq!(conv["conversationId"].as_str().map(str::len), Some(32));
}

#[tokio::test]
async fn create_conversation_invalid_body_is_bad_request() {
    let state = test_app_state().await;
    let (status, body) = send_json(state, Method::POST, "/api/conversation", Some("{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid request body");
}

#[tokio::test]
async fn create_conversation_without_members_is_bad_request() {
    let state = test_app_state().await;
    let (status, body) = send_json(state, Method::POST, "/api/conversation", Some(r#"{"user_ids":[]}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "user_ids is required");
}

#[tokio::test]
async fn create_conversation_with_three_needs_group_flag() {
    let state = test_app_state().await;
    let a = seed_user(&state, "a").await;
    let b = seed_user(&state, "b").await;
    let c = seed_user(&state, "c").await;
    let body = json!({ "user_ids": [a.user_id, b.user_id, c.user_id] }).to_string();

    let (status, _) = send_json(state, Method::POST, "/api/conversation", Some(&body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_conversation_unknown_member_is_not_found() {
    let state = test_app_state().await;
    let a = seed_user(&state, "a").await;
    let body = json!({ "user_ids": [a.user_id, "ghost"] }).to_string();

    let (status, body) = send_json(state, Method::POST, "/api/conversation", Some(&body)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "user with UserID ghost does not exist");
}

// =============================================================================
// GET /api/conversations[...]
// =============================================================================

#[tokio::test]
async fn list_get_and_members() {
    let state = test_app_state().await;
    let a = seed_user(&state, "a").await;
    let b = seed_user(&state, "b").await;
    let c = seed_user(&state, "c").await;

    let group = json!({ "user_ids": [a.user_id, b.user_id, c.user_id], "is_group": true, "group_name": "abc" });
    let (_, created) =
        send_json(state.clone(), Method::POST, "/api/conversation", Some(&group.to_string())).await;
    let id = created["conversationId"].as_str().unwrap().to_owned();

    let (status, all) = send_json(state.clone(), Method::GET, "/api/conversations", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().map(Vec::len), Some(1));

    let uri = format!("/api/conversations?member={}", a.user_id);
    let (_, mine) = send_json(state.clone(), Method::GET, &uri, None).await;
    assert_eq!(mine[0]["groupName"], "abc");

    let (_, none) = send_json(state.clone(), Method::GET, "/api/conversations?member=ghost", None).await;
    assert_eq!(none, json!([]));

    let (status, one) = send_json(state.clone(), Method::GET, &format!("/api/conversations/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(one["conversationId"], id.as_str());

    let (status, members) =
        send_json(state.clone(), Method::GET, &format!("/api/conversations/{id}/members"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(members.as_array().map(Vec::len), Some(3));

    let (status, _) = send_json(state, Method::GET, "/api/conversations/ghost/members", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
