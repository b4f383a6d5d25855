//! REST helpers for the server's `/api` endpoints.
//!
//! Browser (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning an error, since these calls only mean
//! something inside the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, String>` carrying a message fit for the
//! page: the server's `{"error": ...}` text when it sent one, otherwise a
//! short status line.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use models::{Conversation, ConversationRequest, User};
#[cfg(any(test, feature = "csr"))]
use models::ErrorBody;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

pub const USERS_ENDPOINT: &str = "/api/users";
pub const CONVERSATION_ENDPOINT: &str = "/api/conversation";

#[cfg(not(feature = "csr"))]
const UNAVAILABLE: &str = "not available outside the browser";

fn encode(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

/// `POST` target that registers `username`.
pub fn session_endpoint(username: &str) -> String {
    format!("/api/user/session?username={}", encode(username))
}

/// `POST` target that renames `user_id` to `new_username`.
pub fn update_username_endpoint(user_id: &str, new_username: &str) -> String {
    format!("/api/user?userId={}&newUsername={}", encode(user_id), encode(new_username))
}

#[cfg(any(test, feature = "csr"))]
fn request_failed_message(action: &str, status: u16) -> String {
    format!("{action} failed: {status}")
}

#[cfg(any(test, feature = "csr"))]
fn failure_message(action: &str, status: u16, body: Option<ErrorBody>) -> String {
    body.map(|b| b.error)
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| request_failed_message(action, status))
}

#[cfg(any(test, feature = "csr"))]
fn find_by_username<'a>(users: &'a [User], username: &str) -> Option<&'a User> {
    users.iter().find(|u| u.username == username)
}

#[cfg(feature = "csr")]
enum Session {
    Created(User),
    Taken,
}

#[cfg(feature = "csr")]
async fn read_failure(resp: gloo_net::http::Response, action: &str) -> String {
    let status = resp.status();
    failure_message(action, status, resp.json::<ErrorBody>().await.ok())
}

#[cfg(feature = "csr")]
async fn post_session(username: &str) -> Result<Session, String> {
    let resp = gloo_net::http::Request::post(&session_endpoint(username))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if resp.status() == 409 {
        return Ok(Session::Taken);
    }
    if !resp.ok() {
        return Err(read_failure(resp, "create session").await);
    }
    resp.json::<User>().await.map(Session::Created).map_err(|e| e.to_string())
}

/// Fetch every registered user from `GET /api/users`.
pub async fn fetch_users() -> Result<Vec<User>, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(USERS_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(read_failure(resp, "fetch users").await);
        }
        resp.json::<Vec<User>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(UNAVAILABLE.to_owned())
    }
}

/// Register a new user. Fails with `username already exists` on a taken name.
pub async fn create_session(username: &str) -> Result<User, String> {
    #[cfg(feature = "csr")]
    {
        match post_session(username).await? {
            Session::Created(user) => Ok(user),
            Session::Taken => Err("username already exists".to_owned()),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = username;
        Err(UNAVAILABLE.to_owned())
    }
}

/// Sign in as `username`, registering it first if needed.
///
/// There is no password: an existing name is looked up in the user list
/// and adopted as-is.
pub async fn login(username: &str) -> Result<User, String> {
    #[cfg(feature = "csr")]
    {
        match post_session(username).await? {
            Session::Created(user) => {
                log::info!("registered new user {}", user.username);
                Ok(user)
            }
            Session::Taken => {
                let users = fetch_users().await?;
                find_by_username(&users, username)
                    .cloned()
                    .ok_or_else(|| format!("user {username} not found"))
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = username;
        Err(UNAVAILABLE.to_owned())
    }
}

/// Rename a user via `POST /api/user?userId=&newUsername=`.
pub async fn update_username(user_id: &str, new_username: &str) -> Result<User, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&update_username_endpoint(user_id, new_username))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(read_failure(resp, "rename").await);
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (user_id, new_username);
        Err(UNAVAILABLE.to_owned())
    }
}

/// Create a conversation. Membership rules are checked before sending.
pub async fn create_conversation(request: &ConversationRequest) -> Result<Conversation, String> {
    request.validate().map_err(|e| e.to_string())?;

    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(CONVERSATION_ENDPOINT)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(read_failure(resp, "create conversation").await);
        }
        resp.json::<Conversation>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(UNAVAILABLE.to_owned())
    }
}
