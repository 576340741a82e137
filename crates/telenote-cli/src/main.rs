//! tgsend — send a Telegram message to one or more chats.
//!
//! `tgsend [OPTIONS] TEXT ID...`
//!
//! The token comes from `-t`, the `TOKEN` env var, or the config file, in
//! that order. Every id is attempted even if an earlier one fails; the exit
//! status is 1 if any send failed.

mod helpers;
mod send;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::builder::FalseyValueParser;
use clap::Parser;
use tracing::info;

use telenote::config::load_config;
use telenote::Notifier;

// ─────────────────────────────────────────────
// CLI definition
// ─────────────────────────────────────────────

/// Send a telegram message
#[derive(Parser)]
#[command(
    name = "tgsend",
    version,
    about,
    override_usage = "tgsend [OPTIONS] TEXT ID...",
    after_help = "Send the given text to one or more chats identified by their id.\n\
                  To find the id, forward a message from the chat to @getidsbot."
)]
struct Cli {
    /// Telegram bot token
    #[arg(short, long, env = "TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Disable automatic link preview
    #[arg(short, long, env = "NO_PREVIEW", value_parser = FalseyValueParser::new())]
    no_preview: bool,

    /// Parse mode (Markdown, MarkdownV2, HTML)
    #[arg(short, long, env = "MODE")]
    mode: Option<String>,

    /// Config file [default: ~/.telenote/config.json]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    logs: bool,

    /// Message to send
    text: String,

    /// Numeric chat ids (negative for groups and channels)
    #[arg(required = true, allow_negative_numbers = true)]
    ids: Vec<i64>,
}

// ─────────────────────────────────────────────
// Entrypoint
// ─────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.logs);

    let config = load_config(cli.config.as_deref());

    let text = cli.text.trim();
    if text.is_empty() {
        helpers::fail("Please specify the message to send.");
    }

    let settings = helpers::resolve_settings(cli.token, cli.mode, cli.no_preview, &config);
    if settings.token.is_empty() {
        helpers::fail("Please specify the telegram bot token (-t, see -h for help)!");
    }

    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = settings.timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder.build().context("failed to build HTTP client")?;

    let notifier = Notifier::new(settings.token)
        .with_api_base(settings.api_base)
        .with_client(client);

    info!(destinations = cli.ids.len(), "sending message");

    let failures = send::send_all(&notifier, &cli.ids, text, &settings.options).await;
    if !failures.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}

/// Initialize tracing/logging on stderr.
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("telenote=debug,tgsend=debug,info")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
