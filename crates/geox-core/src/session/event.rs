use serde::{Deserialize, Serialize};

use super::message::ConversationMessage;

/// Change notifications published by a session.
///
/// Consumers re-render on every event; the message log itself is read through
/// the owning manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A message was appended to the log.
    MessageAppended { message: ConversationMessage },
    /// The composing flag flipped.
    ComposingChanged { composing: bool },
    /// The onboarding sequence was synthesized.
    OnboardingCompleted { count: usize },
}
