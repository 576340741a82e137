//! Shared CLI helpers — settings resolution and stderr reporting.

use std::time::Duration;

use colored::Colorize;

use telenote::config::Config;
use telenote::{NotifyError, SendOption, MARKDOWN_V2};

/// Parse mode used when neither the command line nor the config names one.
pub const DEFAULT_CLI_PARSE_MODE: &str = MARKDOWN_V2;

/// Everything needed to build the notifier and its send options.
#[derive(Debug)]
pub struct SendSettings {
    pub token: String,
    pub api_base: String,
    pub timeout: Option<Duration>,
    pub options: Vec<SendOption>,
}

/// Merge command-line values over the loaded config.
///
/// Empty strings on the command line count as "not given".
pub fn resolve_settings(
    token: Option<String>,
    mode: Option<String>,
    no_preview: bool,
    config: &Config,
) -> SendSettings {
    let token = token
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| config.token.clone());

    let mode = mode
        .filter(|m| !m.is_empty())
        .or_else(|| config.parse_mode.clone())
        .unwrap_or_else(|| DEFAULT_CLI_PARSE_MODE.to_string());

    let mut options = Vec::new();
    if no_preview || config.disable_web_page_preview {
        options.push(SendOption::NoPreview);
    }
    options.push(SendOption::ParseMode(mode));

    let timeout = (config.timeout_secs > 0).then(|| Duration::from_secs(config.timeout_secs));

    SendSettings {
        token,
        api_base: config.api_base.clone(),
        timeout,
        options,
    }
}

/// Print a usage error and exit with status 1.
pub fn fail(message: &str) -> ! {
    eprintln!("{}", message.red());
    std::process::exit(1);
}

/// Report a failed destination on stderr.
pub fn print_failure(chat_id: i64, err: &NotifyError) {
    eprintln!(
        "{} {}",
        format!("Failed to send message to {chat_id}:").red().bold(),
        err
    );
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_values_win_over_config() {
        let config = Config {
            token: "file-token".into(),
            parse_mode: Some("HTML".into()),
            ..Config::default()
        };
        let s = resolve_settings(Some("cli-token".into()), Some("Markdown".into()), false, &config);
        assert_eq!(s.token, "cli-token");
        assert_eq!(s.options, vec![SendOption::ParseMode("Markdown".into())]);
    }

    #[test]
    fn config_fills_missing_values() {
        let config = Config {
            token: "file-token".into(),
            parse_mode: Some("HTML".into()),
            disable_web_page_preview: true,
            ..Config::default()
        };
        let s = resolve_settings(Some(String::new()), None, false, &config);
        assert_eq!(s.token, "file-token");
        assert_eq!(
            s.options,
            vec![SendOption::NoPreview, SendOption::ParseMode("HTML".into())]
        );
    }

    #[test]
    fn defaults_to_markdown_v2_with_preview() {
        let s = resolve_settings(None, None, false, &Config::default());
        assert!(s.token.is_empty());
        assert_eq!(s.options, vec![SendOption::ParseMode("MarkdownV2".into())]);
        assert_eq!(s.api_base, "https://api.telegram.org");
        assert_eq!(s.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn zero_timeout_means_none() {
        let config = Config {
            timeout_secs: 0,
            ..Config::default()
        };
        let s = resolve_settings(None, None, true, &config);
        assert!(s.timeout.is_none());
        assert_eq!(s.options[0], SendOption::NoPreview);
    }
}
