//! Per-message formatting options and the modifiers that build them.
//!
//! A send call starts from [`SendOptions::default`] and applies each
//! [`SendOption`] in the order given. Later modifiers overwrite earlier ones.

use crate::error::NotifyError;

/// Legacy Telegram Markdown.
pub const MARKDOWN: &str = "Markdown";
/// Telegram MarkdownV2 (stricter escaping rules).
pub const MARKDOWN_V2: &str = "MarkdownV2";
/// Telegram HTML subset.
pub const HTML: &str = "HTML";

/// Parse modes the Bot API documents. Other values are still sent as-is.
pub const KNOWN_PARSE_MODES: &[&str] = &[MARKDOWN, MARKDOWN_V2, HTML];

/// Formatting options for a single message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SendOptions {
    /// Suppress the automatic link preview.
    pub disable_web_page_preview: bool,
    /// How the Bot API should interpret the text.
    pub parse_mode: String,
}

impl Default for SendOptions {
    fn default() -> Self {
        Self {
            disable_web_page_preview: false,
            parse_mode: MARKDOWN.to_string(),
        }
    }
}

impl SendOptions {
    /// Apply modifiers in order to the defaults.
    pub fn from_modifiers(modifiers: &[SendOption]) -> Result<Self, NotifyError> {
        modifiers
            .iter()
            .try_fold(Self::default(), |opts, m| m.apply(opts))
    }
}

/// A single option modifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SendOption {
    /// Let Telegram expand links into previews.
    Preview,
    /// Disable link previews.
    NoPreview,
    /// Set the parse mode (e.g. [`MARKDOWN_V2`], [`HTML`]).
    ParseMode(String),
}

impl SendOption {
    /// Shorthand for `SendOption::ParseMode(mode.into())`.
    pub fn parse_mode(mode: impl Into<String>) -> Self {
        Self::ParseMode(mode.into())
    }

    /// Produce the modified options, or reject the modifier.
    pub fn apply(&self, mut opts: SendOptions) -> Result<SendOptions, NotifyError> {
        match self {
            Self::Preview => opts.disable_web_page_preview = false,
            Self::NoPreview => opts.disable_web_page_preview = true,
            Self::ParseMode(mode) => {
                if mode.trim().is_empty() {
                    return Err(NotifyError::InvalidArgument("empty parse mode".into()));
                }
                opts.parse_mode = mode.clone();
            }
        }
        Ok(opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = SendOptions::default();
        assert!(!opts.disable_web_page_preview);
        assert_eq!(opts.parse_mode, "Markdown");
        assert_eq!(SendOptions::from_modifiers(&[]).unwrap(), opts);
    }

    #[test]
    fn test_no_preview() {
        let opts = SendOptions::from_modifiers(&[SendOption::NoPreview]).unwrap();
        assert!(opts.disable_web_page_preview);
    }

    #[test]
    fn test_last_write_wins() {
        let opts =
            SendOptions::from_modifiers(&[SendOption::NoPreview, SendOption::Preview]).unwrap();
        assert!(!opts.disable_web_page_preview);

        let opts =
            SendOptions::from_modifiers(&[SendOption::Preview, SendOption::NoPreview]).unwrap();
        assert!(opts.disable_web_page_preview);

        let opts = SendOptions::from_modifiers(&[
            SendOption::parse_mode(HTML),
            SendOption::parse_mode(MARKDOWN_V2),
        ])
        .unwrap();
        assert_eq!(opts.parse_mode, "MarkdownV2");
    }

    #[test]
    fn test_unknown_parse_mode_passes_through() {
        let opts = SendOptions::from_modifiers(&[SendOption::parse_mode("Fancy")]).unwrap();
        assert_eq!(opts.parse_mode, "Fancy");
        assert!(!KNOWN_PARSE_MODES.contains(&"Fancy"));
    }

    #[test]
    fn test_blank_parse_mode_rejected() {
        let err = SendOptions::from_modifiers(&[SendOption::parse_mode("  ")]).unwrap_err();
        assert!(matches!(err, NotifyError::InvalidArgument(_)));
    }

    #[test]
    fn test_apply_is_pure() {
        let base = SendOptions::default();
        let changed = SendOption::NoPreview.apply(base.clone()).unwrap();
        assert_ne!(base, changed);
        assert!(!base.disable_web_page_preview);
    }
}
