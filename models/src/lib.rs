//! Shared wire types and navigation table for the chat app.
//!
//! This crate owns the JSON shapes exchanged between `server` and `webui`,
//! the validation rules both sides enforce, and the ordered route table
//! used by the client router and the server's history fallback.

pub mod conversation;
pub mod route;
pub mod user;

use serde::{Deserialize, Serialize};

pub use conversation::{Conversation, ConversationRequest, ConversationRuleError};
pub use route::{Page, PathPattern, RouteEntry, RouteMatch, RouteTable, RouteTableError};
pub use user::{User, UsernameError};

/// JSON error body returned by every failing API call: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { error: message.into() }
    }
}
