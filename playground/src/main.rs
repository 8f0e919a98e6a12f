// Playground entry point: drives every kit utility from the command line
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kompkit_core::debounce::wait_from_millis;
use kompkit_core::is_email;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config;
mod search;

use config::AppConfig;
use search::{SearchIndex, SearchOutcome};

/// KompKit playground - try the kit utilities from a terminal
#[derive(Parser)]
#[command(name = "kompkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON config file (defaults to the embedded configuration)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether values look like email addresses
    Email {
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Format an amount as currency
    Currency {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// ISO 4217 code (default from config)
        #[arg(long)]
        currency: Option<String>,
        /// Locale tag such as es-ES or en-US (default from config)
        #[arg(long)]
        locale: Option<String>,
    },
    /// Debounced search over lines typed on stdin
    Search {
        /// Override the configured debounce wait
        #[arg(long, allow_negative_numbers = true)]
        wait_ms: Option<i64>,
    },
    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let app_config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load_default()?,
    };
    tracing::debug!(version = %app_config.version, "Configuration loaded");

    match cli.command {
        Commands::Email { values } => {
            for value in values {
                let verdict = if is_email(&value) { "valid" } else { "invalid" };
                println!("{}: {}", value, verdict);
            }
        }
        Commands::Currency { amount, currency, locale } => {
            let mut format = app_config.kit.format.currency_format();
            if let Some(currency) = currency {
                format = format.currency(&currency);
            }
            if let Some(locale) = locale {
                format = format.locale(&locale);
            }
            println!("{}", format.format(amount)?);
        }
        Commands::Search { wait_ms } => {
            let wait = wait_from_millis(wait_ms.unwrap_or(app_config.kit.debounce.wait_ms))?;
            tracing::info!(wait_ms = wait.as_millis() as u64, "Type to search, one line per keystroke (Ctrl-D to end)");
            let index = SearchIndex::new(&app_config.search);
            let input = tokio::io::BufReader::new(tokio::io::stdin());
            search::run_session(input, index, wait, print_outcome).await?;
        }
        Commands::Config => {
            let rendered = serde_json::to_string_pretty(&app_config).context("Failed to render configuration")?;
            println!("{}", rendered);
        }
    }

    Ok(())
}

fn print_outcome(outcome: &SearchOutcome) {
    if outcome.matches.is_empty() {
        println!("{:?}: no matches", outcome.query);
    } else {
        println!("{:?}: {}", outcome.query, outcome.matches.join(", "));
    }
}
