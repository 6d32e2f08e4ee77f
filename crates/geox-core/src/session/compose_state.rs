//! Turn-taking state for session interaction.

use serde::{Deserialize, Serialize};

use super::message::MessageId;

/// Whether the session is waiting on an assistant reply.
///
/// At most one reply is outstanding at a time: while `AwaitingReply`, new
/// submissions are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ComposeState {
    /// Ready for the next user message.
    #[default]
    Idle,
    /// A user message was accepted and its reply is pending.
    AwaitingReply {
        /// The user message being answered.
        prompt_id: MessageId,
    },
}

impl ComposeState {
    pub fn is_composing(&self) -> bool {
        matches!(self, Self::AwaitingReply { .. })
    }
}

/// Result of a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The user message was appended and a reply is pending.
    Accepted(MessageId),
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Why a submission left the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Text was empty after trimming.
    Empty,
    /// A reply is already pending.
    Composing,
    /// The session was torn down.
    Closed,
    /// A suggested-question index with no question behind it.
    UnknownSuggestion,
}
