use anyhow::{Context, Result, bail};
use chrono::Utc;
use geox_core::analysis::ModelType;
use geox_core::config::EngineConfig;
use geox_core::responder::{CannedResponder, Responder};
use geox_core::session::{Session, transcript};

pub fn run(config: &EngineConfig, query: &str, model: Option<&str>, json: bool) -> Result<()> {
    let model_type = match model {
        Some(key) => ModelType::parse(key)?,
        None => config.default_model,
    };

    let exchange = exchange(model_type, query, &CannedResponder)?;
    if json {
        println!("{}", transcript::to_json(exchange.messages())?);
    } else if let Some(reply) = exchange.messages().last() {
        println!("{}", reply.content);
    }
    Ok(())
}

/// Runs one submit/reply turn on a fresh session, without the reply delay.
fn exchange(model_type: ModelType, query: &str, responder: &dyn Responder) -> Result<Session> {
    let mut session = Session::new(model_type);
    if !session.submit(query, Utc::now()).is_accepted() {
        bail!("Question is empty");
    }
    let prompt = session
        .pending_prompt()
        .map(|m| m.content.clone())
        .context("No pending question")?;
    let reply = responder.respond(session.model_type(), &prompt);
    session.complete_reply(reply, Utc::now());
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geox_core::responder::LandTopic;
    use geox_core::session::MessageRole;

    #[test]
    fn test_exchange_produces_one_turn() {
        let session = exchange(ModelType::Land, "Is there any forest?", &CannedResponder).unwrap();
        let messages = session.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, MessageRole::User);
        assert_eq!(messages[1].content, LandTopic::ForestCoverage.answer());
        assert!(!session.is_composing());
    }

    #[test]
    fn test_exchange_rejects_blank_question() {
        assert!(exchange(ModelType::Crop, "   ", &CannedResponder).is_err());
    }
}
