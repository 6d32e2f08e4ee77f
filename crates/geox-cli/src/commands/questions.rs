use anyhow::Result;
use geox_core::config::EngineConfig;
use geox_core::locale::{Language, LocaleCatalog};

pub fn run(config: &EngineConfig, lang: Option<&str>) -> Result<()> {
    let language = match lang {
        Some(code) => Language::parse(code)?,
        None => config.language,
    };

    let catalog = LocaleCatalog::builtin();
    println!("{}", catalog.strings(language).chat_with_ai);
    for (i, question) in catalog.suggested_questions(language).iter().enumerate() {
        println!("  {}. {}", i + 1, question);
    }
    Ok(())
}
