//! Transcript export and import.
//!
//! JSON is the lossless form: order, ids, roles, content and timestamps all
//! survive a round trip. The text form is a preview for terminals.

use super::message::ConversationMessage;
use crate::error::Result;

/// Serializes a message log to pretty JSON.
pub fn to_json(messages: &[ConversationMessage]) -> Result<String> {
    Ok(serde_json::to_string_pretty(messages)?)
}

/// Parses a message log written by [`to_json`].
pub fn from_json(json: &str) -> Result<Vec<ConversationMessage>> {
    Ok(serde_json::from_str(json)?)
}

/// Renders one line per message: `[HH:MM] role: preview`.
pub fn render_text(messages: &[ConversationMessage], preview_chars: usize) -> String {
    messages
        .iter()
        .map(|m| format!("[{}] {}: {}", m.clock_label(), m.role, m.preview(preview_chars)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ModelType;
    use crate::responder::resolve;
    use crate::session::{MessageRole, Session};
    use chrono::Utc;

    fn long_session(turns: usize) -> Session {
        let mut session = Session::new(ModelType::Land);
        session.set_content_ready(true, Utc::now());
        for i in 0..turns {
            let query = format!("question {i} about water");
            session.submit(&query, Utc::now());
            session.complete_reply(resolve(ModelType::Land, &query).to_string(), Utc::now());
        }
        session
    }

    #[test]
    fn test_json_round_trip_is_lossless_for_large_logs() {
        let session = long_session(60);
        assert!(session.len() >= 100);

        let json = to_json(session.messages()).unwrap();
        let restored = from_json(&json).unwrap();
        assert_eq!(restored.as_slice(), session.messages());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = from_json("[{\"id\": 1}]").unwrap_err();
        assert!(err.is_serialization());
    }

    #[test]
    fn test_render_text_one_line_per_message() {
        let session = long_session(2);
        let text = render_text(session.messages(), 40);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), session.len());
        assert!(lines[3].contains("user: question 0 about water"));
        assert!(lines[0].ends_with("..."));
    }

    #[test]
    fn test_roles_serialize_lowercase_in_transcript() {
        let session = long_session(1);
        let json = to_json(session.messages()).unwrap();
        assert!(json.contains("\"role\": \"assistant\""));
        assert!(json.contains("\"role\": \"user\""));
        assert_eq!(session.messages()[3].role, MessageRole::User);
    }
}
