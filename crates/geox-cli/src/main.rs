use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "geox")]
#[command(about = "GeoX CLI - canned geospatial analysis assistant", long_about = None)]
struct Cli {
    /// Config file to use instead of the platform default
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask one question and print the assistant's reply
    Ask {
        /// Question text
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
        /// Model type (land, crop, soil); defaults to the configured model
        #[arg(short, long)]
        model: Option<String>,
        /// Print the exchange as a JSON transcript
        #[arg(long)]
        json: bool,
    },
    /// List the suggested questions for a language
    Questions {
        /// Language code (en, hi, gu); defaults to the configured language
        #[arg(short, long)]
        lang: Option<String>,
    },
    /// Print the onboarding messages for a model type
    Onboarding {
        /// Model type (land, crop, soil); defaults to the configured model
        #[arg(short, long)]
        model: Option<String>,
        /// Print as a JSON transcript
        #[arg(long)]
        json: bool,
    },
    /// List the analysis models
    Models {
        /// Language code for the labels
        #[arg(short, long)]
        lang: Option<String>,
    },
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let repo = commands::config::repository(cli.config)?;

    match cli.command {
        Commands::Ask { query, model, json } => {
            let config = commands::config::load(&repo).await?;
            commands::ask::run(&config, &query.join(" "), model.as_deref(), json)?
        }
        Commands::Questions { lang } => {
            let config = commands::config::load(&repo).await?;
            commands::questions::run(&config, lang.as_deref())?
        }
        Commands::Onboarding { model, json } => {
            let config = commands::config::load(&repo).await?;
            commands::onboarding::run(&config, model.as_deref(), json)?
        }
        Commands::Models { lang } => {
            let config = commands::config::load(&repo).await?;
            commands::models::run(&config, lang.as_deref())?
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&repo).await?,
            ConfigAction::Init { force } => commands::config::init(&repo, force).await?,
        },
    }

    Ok(())
}
