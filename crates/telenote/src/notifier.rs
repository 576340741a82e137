//! Notifier — sends one `sendMessage` request per call.

use std::sync::Arc;

use tracing::debug;

use crate::error::NotifyError;
use crate::options::{SendOption, SendOptions};
use crate::transport::Transport;

/// Public Bot API endpoint.
pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

// ─────────────────────────────────────────────
// SendRequest
// ─────────────────────────────────────────────

/// Form payload of a single `sendMessage` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SendRequest {
    pub chat_id: String,
    pub text: String,
    pub parse_mode: String,
    pub disable_web_page_preview: String,
}

impl SendRequest {
    pub fn new(chat_id: i64, text: &str, options: &SendOptions) -> Self {
        Self {
            chat_id: chat_id.to_string(),
            text: text.to_string(),
            parse_mode: options.parse_mode.clone(),
            disable_web_page_preview: options.disable_web_page_preview.to_string(),
        }
    }

    /// Form fields in wire order.
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("chat_id", self.chat_id.as_str()),
            ("text", self.text.as_str()),
            ("parse_mode", self.parse_mode.as_str()),
            ("disable_web_page_preview", self.disable_web_page_preview.as_str()),
        ]
    }
}

// ─────────────────────────────────────────────
// Notifier
// ─────────────────────────────────────────────

/// Holds the bot token and an optional shared transport.
///
/// ```no_run
/// # async fn demo() -> Result<(), telenote::NotifyError> {
/// use telenote::{Notifier, SendOption};
///
/// let notifier = Notifier::new("123456:ABC-DEF");
/// notifier
///     .send(-1001234567890, "*deploy finished*", &[SendOption::NoPreview])
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Notifier {
    token: String,
    api_base: String,
    transport: Option<Arc<dyn Transport>>,
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("token", &crate::utils::redact_token(&self.token))
            .field("api_base", &self.api_base)
            .field("transport", &self.transport.is_some())
            .finish()
    }
}

impl Notifier {
    /// Create a notifier for the given bot token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            transport: None,
        }
    }

    /// Replace the bot token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Use this transport for every send instead of a fresh default client.
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Use a preconfigured `reqwest` client (timeouts, proxy, TLS).
    pub fn with_client(self, client: reqwest::Client) -> Self {
        self.with_transport(Arc::new(client))
    }

    /// Point at a different Bot API server (self-hosted or a test double).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Full `sendMessage` URL for the held token.
    fn endpoint(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.api_base.trim_end_matches('/'),
            self.token
        )
    }

    /// Send `text` to one chat.
    ///
    /// Succeeds only on HTTP 200. Token and text are checked before the
    /// modifiers are applied, so an empty token always yields
    /// [`NotifyError::Configuration`].
    pub async fn send(
        &self,
        chat_id: i64,
        text: &str,
        options: &[SendOption],
    ) -> Result<(), NotifyError> {
        if self.token.is_empty() {
            return Err(NotifyError::Configuration("bot token not set".into()));
        }
        if text.is_empty() {
            return Err(NotifyError::InvalidArgument("empty text".into()));
        }

        let opts = SendOptions::from_modifiers(options)?;
        let request = SendRequest::new(chat_id, text, &opts);
        let url = self.endpoint();

        debug!(
            chat_id,
            parse_mode = %opts.parse_mode,
            disable_preview = opts.disable_web_page_preview,
            chars = text.chars().count(),
            "sending telegram message"
        );

        let result = match &self.transport {
            Some(transport) => transport.post_form(&url, &request.fields()).await,
            None => reqwest::Client::new().post_form(&url, &request.fields()).await,
        };
        let response = result.map_err(NotifyError::Transport)?;

        if response.status != 200 {
            return Err(NotifyError::Remote {
                status: response.status,
                body: response.body,
            });
        }

        debug!(chat_id, "telegram message delivered");
        Ok(())
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
