//! Conversation message types.
//!
//! Messages are immutable once created. A session hands out shared references
//! or clones, never mutable access.

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Represents the role of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Message typed (or picked from suggestions) by the user.
    User,
    /// Message from the simulated assistant.
    Assistant,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => f.write_str("user"),
            Self::Assistant => f.write_str("assistant"),
        }
    }
}

/// Per-session message identifier. Increases with every append.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single message in a conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    /// Position-ordered identifier.
    pub id: MessageId,
    /// The role of the message sender.
    pub role: MessageRole,
    /// The content of the message.
    pub content: String,
    /// Creation instant, used for display.
    pub timestamp: DateTime<Utc>,
}

impl ConversationMessage {
    pub fn is_user(&self) -> bool {
        self.role == MessageRole::User
    }

    /// Content collapsed to at most `max_chars` characters.
    ///
    /// Longer content is cut on a char boundary and suffixed with `...`.
    pub fn preview(&self, max_chars: usize) -> Cow<'_, str> {
        match self.content.char_indices().nth(max_chars) {
            None => Cow::Borrowed(&self.content),
            Some((cut, _)) => Cow::Owned(format!("{}...", &self.content[..cut])),
        }
    }

    /// `true` if [`preview`](Self::preview) would truncate.
    pub fn is_long(&self, max_chars: usize) -> bool {
        self.content.chars().count() > max_chars
    }

    /// Local wall-clock time of the message as `HH:MM`.
    pub fn clock_label(&self) -> String {
        self.timestamp
            .with_timezone(&Local)
            .format("%H:%M")
            .to_string()
    }
}
