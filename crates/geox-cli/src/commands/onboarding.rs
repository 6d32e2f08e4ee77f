use anyhow::Result;
use chrono::Utc;
use geox_core::analysis::ModelType;
use geox_core::config::EngineConfig;
use geox_core::session::{Session, transcript};

pub fn run(config: &EngineConfig, model: Option<&str>, json: bool) -> Result<()> {
    let model_type = match model {
        Some(key) => ModelType::parse(key)?,
        None => config.default_model,
    };

    let mut session = Session::new(model_type);
    let messages = session.set_content_ready(true, Utc::now());

    if json {
        println!("{}", transcript::to_json(&messages)?);
    } else {
        for message in &messages {
            println!("[{}] {}", message.clock_label(), message.content);
            println!();
        }
    }
    Ok(())
}
