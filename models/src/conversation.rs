//! Conversations and the membership rules for creating them.
//!
//! DESIGN
//! ======
//! The same rules run in the browser before a request is sent and on the
//! server before anything touches the database, so both sides report the
//! same message for the same mistake.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A direct or group conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub conversation_id: String,
    pub is_group: bool,
    /// Empty when unset.
    #[serde(default)]
    pub group_name: String,
    /// Empty when unset.
    #[serde(default)]
    pub group_photo: String,
}

/// Body of `POST /api/conversation`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationRequest {
    #[serde(default)]
    pub user_ids: Vec<String>,
    #[serde(default)]
    pub is_group: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub group_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub group_photo: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversationRuleError {
    #[error("user_ids is required")]
    MissingMembers,
    #[error("cannot create a conversation with only one user")]
    SingleMember,
    #[error("cannot create a group conversation with more than two users without setting isGroup to true")]
    GroupFlagRequired,
    #[error("duplicate user id {0}")]
    DuplicateMember(String),
}

impl ConversationRequest {
    /// Direct (two-person) conversation between `a` and `b`.
    #[must_use]
    pub fn direct(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self { user_ids: vec![a.into(), b.into()], ..Self::default() }
    }

    /// Check membership rules.
    ///
    /// # Errors
    ///
    /// Returns the first rule the request violates.
    pub fn validate(&self) -> Result<(), ConversationRuleError> {
        match self.user_ids.len() {
            0 => return Err(ConversationRuleError::MissingMembers),
            1 => return Err(ConversationRuleError::SingleMember),
            2 => {}
            _ if !self.is_group => return Err(ConversationRuleError::GroupFlagRequired),
            _ => {}
        }

        let mut seen = HashSet::with_capacity(self.user_ids.len());
        for id in &self.user_ids {
            if !seen.insert(id.as_str()) {
                return Err(ConversationRuleError::DuplicateMember(id.clone()));
            }
        }
        Ok(())
    }

    /// Group name, or `None` when blank.
    #[must_use]
    pub fn group_name(&self) -> Option<&str> {
        non_blank(&self.group_name)
    }

    /// Group photo, or `None` when blank.
    #[must_use]
    pub fn group_photo(&self) -> Option<&str> {
        non_blank(&self.group_photo)
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;
