//! User records and username rules.

use serde::{Deserialize, Serialize};

/// A registered chat user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// 32-char lowercase hex identifier.
    pub user_id: String,
    /// Unique display name.
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsernameError {
    #[error("username must not be empty")]
    Empty,
}

/// Trim a candidate username and reject blank input.
///
/// # Errors
///
/// Returns [`UsernameError::Empty`] if nothing is left after trimming.
pub fn normalize_username(raw: &str) -> Result<&str, UsernameError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(UsernameError::Empty);
    }
    Ok(trimmed)
}

#[cfg(test)]
#[path = "user_test.rs"]
mod tests;
