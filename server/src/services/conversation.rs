//! Conversation storage and membership queries.
//!
//! DESIGN
//! ======
//! A conversation and its membership rows are written in one transaction.
//! Membership rules from [`ConversationRequest::validate`] run before the
//! transaction opens; member existence is checked inside it so a missing
//! user rolls back the whole conversation.

use models::{Conversation, ConversationRequest, ConversationRuleError, User};
use sqlx::SqlitePool;
use tracing::info;

use super::user::new_id;

#[derive(Debug, thiserror::Error)]
pub enum ConversationError {
    #[error(transparent)]
    Rule(#[from] ConversationRuleError),
    #[error("user with UserID {0} does not exist")]
    UnknownMember(String),
    #[error("conversation not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

type ConversationRow = (String, bool, String, String);

const SELECT_CONVERSATION: &str = "SELECT c.conversation_id, c.is_group,
        COALESCE(c.group_name, ''), COALESCE(c.group_photo, '')
    FROM conversations c";

fn to_conversation((conversation_id, is_group, group_name, group_photo): ConversationRow) -> Conversation {
    Conversation { conversation_id, is_group, group_name, group_photo }
}

/// Create a conversation and attach every requested member.
///
/// # Errors
///
/// Returns [`ConversationError::Rule`] for membership rule violations and
/// [`ConversationError::UnknownMember`] if any ID has no user.
pub async fn create_conversation(pool: &SqlitePool, req: &ConversationRequest) -> Result<Conversation, ConversationError> {
    req.validate()?;

    let mut tx = pool.begin().await?;

    let row = sqlx::query_as::<_, ConversationRow>(
        "INSERT INTO conversations (conversation_id, is_group, group_name, group_photo)
         VALUES (?, ?, ?, ?)
         RETURNING conversation_id, is_group, COALESCE(group_name, ''), COALESCE(group_photo, '')",
    )
    .bind(new_id())
    .bind(req.is_group)
    .bind(req.group_name())
    .bind(req.group_photo())
    .fetch_one(&mut *tx)
    .await?;
    let conversation = to_conversation(row);

    for user_id in &req.user_ids {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE user_id = ?)")
            .bind(user_id)
            .fetch_one(&mut *tx)
            .await?;
        if !exists {
            // Dropping `tx` rolls back the conversation insert.
            return Err(ConversationError::UnknownMember(user_id.clone()));
        }

        sqlx::query("INSERT INTO conversation_members (user_id, conversation_id) VALUES (?, ?)")
            .bind(user_id)
            .bind(&conversation.conversation_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    info!(
        conversation_id = %conversation.conversation_id,
        members = req.user_ids.len(),
        is_group = conversation.is_group,
        "conversation created"
    );
    Ok(conversation)
}

/// Fetch one conversation.
///
/// # Errors
///
/// Returns [`ConversationError::NotFound`] for an unknown ID.
pub async fn get_conversation(pool: &SqlitePool, conversation_id: &str) -> Result<Conversation, ConversationError> {
    sqlx::query_as::<_, ConversationRow>(&format!("{SELECT_CONVERSATION} WHERE c.conversation_id = ?"))
        .bind(conversation_id)
        .fetch_optional(pool)
        .await?
        .map(to_conversation)
        .ok_or_else(|| ConversationError::NotFound(conversation_id.to_owned()))
}

/// List every conversation in creation order.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_conversations(pool: &SqlitePool) -> Result<Vec<Conversation>, ConversationError> {
    let rows = sqlx::query_as::<_, ConversationRow>(&format!("{SELECT_CONVERSATION} ORDER BY c.rowid"))
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(to_conversation).collect())
}

/// List conversations that include `user_id`, in creation order.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_conversations_by_member(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Vec<Conversation>, ConversationError> {
    let rows = sqlx::query_as::<_, ConversationRow>(&format!(
        "{SELECT_CONVERSATION}
         JOIN conversation_members m ON m.conversation_id = c.conversation_id
         WHERE m.user_id = ?
         ORDER BY c.rowid"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(to_conversation).collect())
}

/// List the members of a conversation ordered by username.
///
/// # Errors
///
/// Returns [`ConversationError::NotFound`] for an unknown conversation.
pub async fn conversation_members(pool: &SqlitePool, conversation_id: &str) -> Result<Vec<User>, ConversationError> {
    get_conversation(pool, conversation_id).await?;

    let rows = sqlx::query_as::<_, (String, String, Option<String>)>(
        "SELECT u.user_id, u.username, u.photo
         FROM users u
         JOIN conversation_members m ON m.user_id = u.user_id
         WHERE m.conversation_id = ?
         ORDER BY u.username",
    )
    .bind(conversation_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(user_id, username, photo)| User { user_id, username, photo })
        .collect())
}

#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;
