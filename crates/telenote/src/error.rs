//! Error taxonomy for the send operation.

/// Boxed error used as the cause of transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Everything that can go wrong while sending a notification.
///
/// All variants are returned to the immediate caller; nothing is retried
/// or logged on the way out.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// The notifier is missing its bot token.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Empty text, or an option modifier rejected its input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The request never produced an HTTP response (connect, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The Bot API answered with something other than 200.
    #[error("unexpected status: {status}: {body}")]
    Remote { status: u16, body: String },
}

impl NotifyError {
    /// HTTP status of a remote failure, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}
