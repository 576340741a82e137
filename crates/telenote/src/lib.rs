//! Telenote — send text notifications through the Telegram Bot API.
//!
//! # Architecture
//!
//! - [`notifier::Notifier`] — holds the bot token and sends one `sendMessage` per call
//! - [`options`] — [`SendOption`] modifiers folded into [`SendOptions`]
//! - [`transport::Transport`] — form-POST seam, implemented for `reqwest::Client`
//! - [`error::NotifyError`] — configuration / argument / transport / remote failures
//! - [`config`] — optional `~/.telenote/config.json` with env overrides

pub mod config;
pub mod error;
pub mod notifier;
pub mod options;
pub mod transport;
pub mod utils;

// Re-export main types for convenience
pub use error::{BoxError, NotifyError};
pub use notifier::{Notifier, SendRequest, DEFAULT_API_BASE};
pub use options::{SendOption, SendOptions, HTML, MARKDOWN, MARKDOWN_V2};
pub use transport::{FormResponse, Transport};
