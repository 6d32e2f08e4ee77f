use anyhow::Result;
use geox_core::analysis::ModelType;
use geox_core::config::EngineConfig;
use geox_core::locale::{Language, LocaleCatalog};

pub fn run(config: &EngineConfig, lang: Option<&str>) -> Result<()> {
    let language = match lang {
        Some(code) => Language::parse(code)?,
        None => config.language,
    };

    let catalog = LocaleCatalog::builtin();
    for model in ModelType::all() {
        let marker = if model == config.default_model { "*" } else { " " };
        println!(
            "{} {:<5} {:<28} {}",
            marker,
            model,
            catalog.model_label(language, model),
            model.description()
        );
    }
    Ok(())
}
