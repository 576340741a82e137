//! Configuration schema.
//!
//! JSON on disk uses **camelCase** keys; Rust uses snake_case.

use serde::{Deserialize, Serialize};

use crate::notifier::DEFAULT_API_BASE;

/// Root configuration — loaded from `~/.telenote/config.json` + env vars.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Bot token from @BotFather.
    pub token: String,
    /// Parse mode used when none is given on the command line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<String>,
    /// Disable link previews by default.
    pub disable_web_page_preview: bool,
    /// Bot API base URL (self-hosted Bot API servers).
    pub api_base: String,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: String::new(),
            parse_mode: None,
            disable_web_page_preview: false,
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_secs: 30,
        }
    }
}

impl Config {
    /// Whether a bot token is set.
    pub fn is_configured(&self) -> bool {
        !self.token.is_empty()
    }
}
