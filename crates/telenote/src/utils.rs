//! Utility helpers — data directory resolution and secret redaction.

use std::path::PathBuf;

/// Get the Telenote data directory (e.g. `~/.telenote/`).
pub fn get_data_path() -> PathBuf {
    let home = dirs_next::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".telenote")
}

/// Mask a bot token for display, keeping the numeric bot id.
///
/// Tokens look like `123456789:AAH...`; everything after the colon is secret.
pub fn redact_token(token: &str) -> String {
    if token.is_empty() {
        return String::new();
    }
    match token.split_once(':') {
        Some((bot_id, _)) => format!("{bot_id}:***"),
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_path_ends_with_telenote() {
        let path = get_data_path();
        assert!(path.ends_with(".telenote"));
    }

    #[test]
    fn test_redact_token_keeps_bot_id() {
        assert_eq!(redact_token("123456:AAHsecret"), "123456:***");
    }

    #[test]
    fn test_redact_token_without_colon() {
        assert_eq!(redact_token("ABC123"), "***");
    }

    #[test]
    fn test_redact_empty() {
        assert_eq!(redact_token(""), "");
    }
}
