use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing_subscriber::EnvFilter;

use geox_core::analysis::ModelType;
use geox_core::config::EngineConfig;
use geox_core::locale::{Language, LocaleCatalog};
use geox_core::repository::ConfigRepository;
use geox_core::responder::TYPING_INDICATOR;
use geox_core::session::{
    ConversationMessage, IgnoreReason, MessageRole, SessionEvent, SubmitOutcome, transcript,
};
use geox_infrastructure::TomlConfigRepository;
use geox_interaction::InteractionManager;

const COMMANDS: &[&str] = &[
    "/upload", "/clear", "/model", "/lang", "/suggest", "/ask", "/more", "/history", "/export",
    "/help",
];

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// A parsed REPL line.
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand {
    Quit,
    Help,
    Upload,
    Clear,
    Model(Option<String>),
    Lang(Option<String>),
    Suggest,
    Ask(Option<usize>),
    More,
    History,
    Export(Option<PathBuf>),
    Unknown(String),
    Say(String),
}

impl ReplCommand {
    fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed == "quit" || trimmed == "exit" {
            return Self::Quit;
        }
        if !trimmed.starts_with('/') {
            return Self::Say(trimmed.to_string());
        }

        let mut parts = trimmed.splitn(2, char::is_whitespace);
        let command = parts.next().unwrap_or_default();
        let arg = parts
            .next()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string);

        match command {
            "/help" => Self::Help,
            "/upload" => Self::Upload,
            "/clear" => Self::Clear,
            "/model" => Self::Model(arg),
            "/lang" => Self::Lang(arg),
            "/suggest" => Self::Suggest,
            // Suggestions are shown 1-based.
            "/ask" => Self::Ask(
                arg.and_then(|a| a.parse::<usize>().ok())
                    .and_then(|n| n.checked_sub(1)),
            ),
            "/more" => Self::More,
            "/history" => Self::History,
            "/export" => Self::Export(arg.map(PathBuf::from)),
            other => Self::Unknown(other.to_string()),
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn load_config() -> EngineConfig {
    let loaded = match TomlConfigRepository::new() {
        Ok(repo) => repo.load().await,
        Err(e) => Err(e),
    };
    loaded.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "falling back to default config");
        EngineConfig::default()
    })
}

fn print_message(message: &ConversationMessage, preview_chars: usize) {
    let header = format!("[{}]", message.clock_label()).bright_black();
    match message.role {
        MessageRole::User => println!("{} {}", header, format!("> {}", message.content).green()),
        MessageRole::Assistant => {
            println!("{}", header);
            for line in message.preview(preview_chars).lines() {
                println!("{}", line.bright_blue());
            }
            if message.is_long(preview_chars) {
                println!("{}", "(/more to read the full reply)".bright_black());
            }
        }
    }
}

/// Renders everything published since the last call.
fn drain_events(events: &mut broadcast::Receiver<SessionEvent>, preview_chars: usize) {
    loop {
        match events.try_recv() {
            Ok(SessionEvent::MessageAppended { message }) => {
                print_message(&message, preview_chars);
                println!();
            }
            Ok(SessionEvent::ComposingChanged { composing: true }) => {
                println!("{}", TYPING_INDICATOR.bright_black().italic());
            }
            Ok(SessionEvent::ComposingChanged { composing: false }) => {}
            Ok(SessionEvent::OnboardingCompleted { .. }) => {
                println!("{}", "Type '/suggest' to see suggested questions.".bright_black());
            }
            Err(TryRecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "event receiver lagged");
            }
            Err(_) => break,
        }
    }
}

fn print_help() {
    println!("{}", "Commands:".bright_yellow());
    println!("  /upload           mark analyzed content as available");
    println!("  /clear            remove the analyzed content");
    println!("  /model <name>     switch model (land, crop, soil)");
    println!("  /lang <code>      switch language (en, hi, gu)");
    println!("  /suggest          list suggested questions");
    println!("  /ask <n>          ask suggested question n");
    println!("  /more             show the last reply in full");
    println!("  /history          show the conversation");
    println!("  /export [path]    write the transcript as JSON");
    println!("  quit              exit");
}

async fn print_suggestions(manager: &InteractionManager) {
    let questions = manager.suggested_questions().await;
    if questions.is_empty() {
        println!("{}", "No suggestions until content is uploaded (/upload).".yellow());
        return;
    }
    for (i, question) in questions.iter().enumerate() {
        println!("  {} {}", format!("{}.", i + 1).bright_yellow(), question);
    }
}

async fn submit_and_wait(
    manager: &InteractionManager,
    events: &mut broadcast::Receiver<SessionEvent>,
    outcome: SubmitOutcome,
    preview_chars: usize,
) {
    match outcome {
        SubmitOutcome::Accepted(_) => {
            drain_events(events, preview_chars);
            manager.wait_for_reply().await;
            drain_events(events, preview_chars);
        }
        SubmitOutcome::Ignored(IgnoreReason::UnknownSuggestion) => {
            println!("{}", "No such suggestion. Try '/suggest'.".yellow());
        }
        SubmitOutcome::Ignored(reason) => {
            tracing::debug!(?reason, "input ignored");
        }
    }
}

async fn handle(
    command: ReplCommand,
    manager: &InteractionManager,
    events: &mut broadcast::Receiver<SessionEvent>,
) -> Result<()> {
    let preview_chars = manager.config().preview_chars;

    match command {
        ReplCommand::Quit => {}
        ReplCommand::Help => print_help(),
        ReplCommand::Upload => {
            if manager.set_content_ready(true).await == 0 {
                println!("{}", "Content available.".bright_green());
            }
            drain_events(events, preview_chars);
        }
        ReplCommand::Clear => {
            manager.set_content_ready(false).await;
            println!("{}", "Content removed.".bright_green());
        }
        ReplCommand::Model(None) => {
            let catalog = LocaleCatalog::builtin();
            let language = manager.language().await;
            let current = manager.model_type().await;
            for model in ModelType::all() {
                let marker = if model == current { "*" } else { " " };
                println!(
                    "{} {:<5} {} - {}",
                    marker,
                    model.to_string().bright_cyan(),
                    catalog.model_label(language, model),
                    model.description()
                );
            }
        }
        ReplCommand::Model(Some(name)) => match ModelType::parse(&name) {
            Ok(model) => {
                manager.set_model_type(model).await;
                println!("{}", format!("Model: {}", manager.model_label().await).bright_green());
            }
            Err(e) => println!("{}", e.to_string().red()),
        },
        ReplCommand::Lang(None) => {
            let current = manager.language().await;
            for language in Language::all() {
                let marker = if language == current { "*" } else { " " };
                println!("{} {} {}", marker, language.to_string().bright_cyan(), language.native_name());
            }
        }
        ReplCommand::Lang(Some(code)) => match Language::parse(&code) {
            Ok(language) => {
                manager.set_language(language).await;
                println!("{}", format!("Language: {}", language.native_name()).bright_green());
            }
            Err(e) => println!("{}", e.to_string().red()),
        },
        ReplCommand::Suggest => print_suggestions(manager).await,
        ReplCommand::Ask(Some(index)) => {
            let outcome = manager.submit_suggestion(index).await;
            submit_and_wait(manager, events, outcome, preview_chars).await;
        }
        ReplCommand::Ask(None) => println!("{}", "Usage: /ask <n>".yellow()),
        ReplCommand::More => {
            let messages = manager.messages().await;
            match messages.iter().rev().find(|m| !m.is_user()) {
                Some(message) => println!("{}", message.content.bright_blue()),
                None => println!("{}", "No replies yet.".bright_black()),
            }
        }
        ReplCommand::History => {
            let messages = manager.messages().await;
            println!("{}", transcript::render_text(&messages, preview_chars));
        }
        ReplCommand::Export(path) => {
            let json = manager.transcript_json().await?;
            match path {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("{}", format!("Transcript written to {}", path.display()).bright_green());
                }
                None => println!("{json}"),
            }
        }
        ReplCommand::Unknown(command) => {
            println!("{}", format!("Unknown command: {command}").bright_black());
        }
        ReplCommand::Say(text) => {
            if text.is_empty() {
                return Ok(());
            }
            if !manager.content_ready().await {
                println!("{}", "Upload content first (/upload).".yellow());
                return Ok(());
            }
            let outcome = manager.submit(&text).await;
            submit_and_wait(manager, events, outcome, preview_chars).await;
        }
    }
    Ok(())
}

/// The main entry point for the GeoX readline REPL.
///
/// Loads the engine config, creates one session for the lifetime of the
/// process, and renders session events as coloured output. Replies are
/// awaited in place so the typing indicator precedes each reply.
#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = load_config().await;
    let manager = InteractionManager::with_config(config);
    let mut events = manager.subscribe();

    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    println!("{}", "=== GeoX REPL ===".bright_magenta().bold());
    println!(
        "{}",
        format!("Model: {}. Type '/upload' to start, '/help' for commands, or 'quit' to exit.", manager.model_label().await)
            .bright_black()
    );
    println!();

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let command = ReplCommand::parse(&line);
                if command == ReplCommand::Quit {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                if let Err(e) = handle(command, &manager, &mut events).await {
                    eprintln!("{}", format!("Error: {e:#}").red());
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    manager.close();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_text_is_said() {
        assert_eq!(
            ReplCommand::parse("  How much water?  "),
            ReplCommand::Say("How much water?".to_string())
        );
    }

    #[test]
    fn test_parse_quit() {
        assert_eq!(ReplCommand::parse("quit"), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse(" exit "), ReplCommand::Quit);
    }

    #[test]
    fn test_parse_ask_is_one_based() {
        assert_eq!(ReplCommand::parse("/ask 1"), ReplCommand::Ask(Some(0)));
        assert_eq!(ReplCommand::parse("/ask 0"), ReplCommand::Ask(None));
        assert_eq!(ReplCommand::parse("/ask x"), ReplCommand::Ask(None));
    }

    #[test]
    fn test_parse_arguments() {
        assert_eq!(
            ReplCommand::parse("/model  crop "),
            ReplCommand::Model(Some("crop".to_string()))
        );
        assert_eq!(ReplCommand::parse("/lang"), ReplCommand::Lang(None));
        assert_eq!(
            ReplCommand::parse("/export out.json"),
            ReplCommand::Export(Some(PathBuf::from("out.json")))
        );
        assert_eq!(
            ReplCommand::parse("/nope"),
            ReplCommand::Unknown("/nope".to_string())
        );
    }

    #[test]
    fn test_completion_candidates() {
        let helper = CliHelper::new();
        let history = rustyline::history::DefaultHistory::new();
        let ctx = Context::new(&history);
        let (_, candidates) = helper.complete("/mo", 3, &ctx).unwrap();
        let names: Vec<_> = candidates.iter().map(|c| c.replacement.as_str()).collect();
        assert_eq!(names, vec!["/model", "/more"]);
    }
}
