//! Session state for the current browser user.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use models::User;

/// Who is signed in, if anyone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
}

impl AuthState {
    /// State seeded from a user remembered across reloads.
    pub fn restored(user: Option<User>) -> Self {
        Self { user }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.user_id.as_str())
    }

    /// Username for the nav bar; `Guest` when signed out.
    pub fn display_name(&self) -> String {
        self.user.as_ref().map_or_else(|| "Guest".to_owned(), |u| u.username.clone())
    }

    pub fn sign_in(&mut self, user: User) {
        self.user = Some(user);
    }

    pub fn sign_out(&mut self) {
        self.user = None;
    }

    /// Whether `other` is someone the current user can start a chat with.
    pub fn can_chat_with(&self, other: &User) -> bool {
        self.user_id().is_some_and(|me| me != other.user_id)
    }
}
