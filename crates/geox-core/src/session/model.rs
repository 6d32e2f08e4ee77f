//! Session domain model.
//!
//! The `Session` is the authoritative message log plus the composing state
//! machine. It is synchronous and clock-agnostic: callers pass `now` so the
//! runtime layer decides where time comes from.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::compose_state::{ComposeState, IgnoreReason, SubmitOutcome};
use super::message::{ConversationMessage, MessageId, MessageRole};
use crate::analysis::ModelType;
use crate::responder::onboarding_script;

/// One conversation: ordered messages, composing flag, and model context.
///
/// The log is append-only. The only replacement happens when onboarding is
/// synthesized into an empty log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    /// Unique session identifier (UUID format)
    pub id: String,
    /// Timestamp when the session was created
    pub created_at: DateTime<Utc>,
    model_type: ModelType,
    compose_state: ComposeState,
    content_ready: bool,
    messages: Vec<ConversationMessage>,
    next_message_id: u64,
}

impl Session {
    /// Creates an empty session for a model type.
    pub fn new(model_type: ModelType) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            model_type,
            compose_state: ComposeState::Idle,
            content_ready: false,
            messages: Vec::new(),
            next_message_id: 1,
        }
    }

    /// The message log in append order.
    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn model_type(&self) -> ModelType {
        self.model_type
    }

    /// Switches the model context. History is kept.
    pub fn set_model_type(&mut self, model_type: ModelType) {
        self.model_type = model_type;
    }

    pub fn compose_state(&self) -> ComposeState {
        self.compose_state
    }

    pub fn is_composing(&self) -> bool {
        self.compose_state.is_composing()
    }

    pub fn content_ready(&self) -> bool {
        self.content_ready
    }

    /// The user message whose reply is pending, if any.
    pub fn pending_prompt(&self) -> Option<&ConversationMessage> {
        match self.compose_state {
            ComposeState::Idle => None,
            ComposeState::AwaitingReply { prompt_id } => {
                self.messages.iter().rev().find(|m| m.id == prompt_id)
            }
        }
    }

    /// Accepts a user message.
    ///
    /// The trimmed text is appended as a `user` message and the session moves
    /// to `AwaitingReply`. Empty text, or any text while a reply is pending,
    /// leaves the session untouched.
    pub fn submit(&mut self, text: &str, now: DateTime<Utc>) -> SubmitOutcome {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return SubmitOutcome::Ignored(IgnoreReason::Empty);
        }
        if self.is_composing() {
            return SubmitOutcome::Ignored(IgnoreReason::Composing);
        }

        let id = self.push(MessageRole::User, trimmed.to_string(), now).id;
        self.compose_state = ComposeState::AwaitingReply { prompt_id: id };
        SubmitOutcome::Accepted(id)
    }

    /// Appends the assistant reply and returns to `Idle`.
    ///
    /// Returns `None` (and changes nothing) if no reply was pending.
    pub fn complete_reply(
        &mut self,
        content: String,
        now: DateTime<Utc>,
    ) -> Option<ConversationMessage> {
        if !self.is_composing() {
            return None;
        }
        let message = self.push(MessageRole::Assistant, content, now).clone();
        self.compose_state = ComposeState::Idle;
        Some(message)
    }

    /// Records the content-availability signal.
    ///
    /// Only the `false -> true` edge matters. On that edge, an empty log is
    /// replaced by the three onboarding messages for the current model type;
    /// a non-empty log is left as is. Returns the synthesized messages.
    pub fn set_content_ready(
        &mut self,
        ready: bool,
        now: DateTime<Utc>,
    ) -> Vec<ConversationMessage> {
        let rising = ready && !self.content_ready;
        self.content_ready = ready;
        if !rising || !self.messages.is_empty() {
            return Vec::new();
        }

        let mut onboarding = Vec::with_capacity(3);
        for line in onboarding_script(self.model_type, now) {
            onboarding.push(ConversationMessage {
                id: self.next_id(),
                role: MessageRole::Assistant,
                content: line.content.to_string(),
                timestamp: line.timestamp,
            });
        }
        self.messages = onboarding.clone();
        onboarding
    }

    fn next_id(&mut self) -> MessageId {
        let id = MessageId(self.next_message_id);
        self.next_message_id += 1;
        id
    }

    fn push(
        &mut self,
        role: MessageRole,
        content: String,
        timestamp: DateTime<Utc>,
    ) -> &ConversationMessage {
        let id = self.next_id();
        // Keep timestamp order identical to append order.
        let timestamp = match self.messages.last() {
            Some(last) if timestamp <= last.timestamp => {
                last.timestamp + TimeDelta::microseconds(1)
            }
            _ => timestamp,
        };
        self.messages.push(ConversationMessage {
            id,
            role,
            content,
            timestamp,
        });
        &self.messages[self.messages.len() - 1]
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ModelType::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::{OnboardingStep, resolve};

    #[test]
    fn test_new_session_is_empty_and_idle() {
        let session = Session::new(ModelType::Crop);
        assert!(session.is_empty());
        assert!(!session.is_composing());
        assert!(!session.content_ready());
        assert_eq!(session.model_type(), ModelType::Crop);
        assert!(Uuid::parse_str(&session.id).is_ok());
    }

    #[test]
    fn test_submit_appends_trimmed_user_message() {
        let mut session = Session::default();
        let outcome = session.submit("  How much water?\n", Utc::now());

        let SubmitOutcome::Accepted(id) = outcome else {
            panic!("expected accepted, got {outcome:?}");
        };
        assert_eq!(session.len(), 1);
        let msg = &session.messages()[0];
        assert_eq!(msg.id, id);
        assert_eq!(msg.role, MessageRole::User);
        assert_eq!(msg.content, "How much water?");
        assert!(session.is_composing());
        assert_eq!(session.pending_prompt(), Some(msg));
    }

    #[test]
    fn test_submit_whitespace_is_ignored() {
        let mut session = Session::default();
        assert_eq!(
            session.submit(" \t\n", Utc::now()),
            SubmitOutcome::Ignored(IgnoreReason::Empty)
        );
        assert!(session.is_empty());
        assert!(!session.is_composing());
    }

    #[test]
    fn test_submit_while_composing_is_ignored() {
        let mut session = Session::default();
        session.submit("first", Utc::now());
        let before = session.clone();

        assert_eq!(
            session.submit("second", Utc::now()),
            SubmitOutcome::Ignored(IgnoreReason::Composing)
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_complete_reply_returns_to_idle() {
        let mut session = Session::default();
        session.submit("urban?", Utc::now());
        let reply = session
            .complete_reply(resolve(ModelType::Land, "urban?").to_string(), Utc::now())
            .expect("reply should be applied");

        assert_eq!(reply.role, MessageRole::Assistant);
        assert_eq!(session.len(), 2);
        assert!(!session.is_composing());
        assert!(session.pending_prompt().is_none());
    }

    #[test]
    fn test_complete_reply_without_pending_is_noop() {
        let mut session = Session::default();
        assert!(session.complete_reply("stray".to_string(), Utc::now()).is_none());
        assert!(session.is_empty());
    }

    #[test]
    fn test_message_ids_increase() {
        let mut session = Session::default();
        for i in 0..5 {
            session.submit(&format!("q{i}"), Utc::now());
            session.complete_reply("a".to_string(), Utc::now());
        }
        let ids: Vec<_> = session.messages().iter().map(|m| m.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_timestamps_follow_append_order() {
        let now = Utc::now();
        let mut session = Session::default();
        session.submit("same instant", now);
        session.complete_reply("reply".to_string(), now);
        session.submit("earlier clock", now - TimeDelta::seconds(5));

        let stamps: Vec<_> = session.messages().iter().map(|m| m.timestamp).collect();
        assert!(stamps.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_onboarding_on_first_content_edge() {
        let now = Utc::now();
        let mut session = Session::new(ModelType::Soil);
        let added = session.set_content_ready(true, now);

        assert_eq!(added.len(), 3);
        assert_eq!(session.messages(), added.as_slice());
        assert!(added.iter().all(|m| m.role == MessageRole::Assistant));
        assert_eq!(added[0].content, OnboardingStep::Welcome.text(ModelType::Soil));
        assert_eq!(added[1].content, OnboardingStep::Analysis.text(ModelType::Soil));
        assert_eq!(added[2].content, OnboardingStep::Details.text(ModelType::Soil));
        assert!(added[0].timestamp < added[1].timestamp);
        assert!(added[1].timestamp < added[2].timestamp);
        assert_eq!(now - added[2].timestamp, TimeDelta::seconds(30));
    }

    #[test]
    fn test_onboarding_only_on_rising_edge() {
        let mut session = Session::default();
        assert_eq!(session.set_content_ready(true, Utc::now()).len(), 3);
        // Still ready: no edge.
        assert!(session.set_content_ready(true, Utc::now()).is_empty());
        assert_eq!(session.len(), 3);
    }

    #[test]
    fn test_reupload_with_history_does_not_reonboard() {
        let mut session = Session::default();
        session.set_content_ready(true, Utc::now());
        session.set_content_ready(false, Utc::now());
        assert!(session.set_content_ready(true, Utc::now()).is_empty());
        assert_eq!(session.len(), 3);
    }

    #[test]
    fn test_content_edge_after_user_message_skips_onboarding() {
        let mut session = Session::default();
        session.submit("hello", Utc::now());
        assert!(session.set_content_ready(true, Utc::now()).is_empty());
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_model_switch_keeps_history() {
        let mut session = Session::default();
        session.set_content_ready(true, Utc::now());
        session.set_model_type(ModelType::Crop);
        assert_eq!(session.len(), 3);
        assert_eq!(session.model_type(), ModelType::Crop);
    }
}
