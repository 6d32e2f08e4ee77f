//! Session domain module.
//!
//! # Module Structure
//!
//! - `message`: Conversation message types (`MessageRole`, `ConversationMessage`)
//! - `compose_state`: Turn-taking state (`ComposeState`, `SubmitOutcome`)
//! - `model`: The `Session` state machine
//! - `event`: Change notifications (`SessionEvent`)
//! - `transcript`: JSON export/import and terminal rendering

mod compose_state;
mod event;
mod message;
mod model;
pub mod transcript;

pub use compose_state::{ComposeState, IgnoreReason, SubmitOutcome};
pub use event::SessionEvent;
pub use message::{ConversationMessage, MessageId, MessageRole};
pub use model::Session;
