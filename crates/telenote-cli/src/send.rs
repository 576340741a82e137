//! Sequential fan-out of one message to several chats.

use tracing::{debug, warn};

use telenote::{Notifier, NotifyError, SendOption};

use crate::helpers::print_failure;

/// Send `text` to every id in order, continuing past failures.
///
/// Each failure is reported on stderr as it happens. Returns the failed ids
/// with their errors.
pub async fn send_all(
    notifier: &Notifier,
    ids: &[i64],
    text: &str,
    options: &[SendOption],
) -> Vec<(i64, NotifyError)> {
    let mut failures = Vec::new();

    for &chat_id in ids {
        match notifier.send(chat_id, text, options).await {
            Ok(()) => debug!(chat_id, "sent"),
            Err(e) => {
                warn!(chat_id, error = %e, "send failed");
                print_failure(chat_id, &e);
                failures.push((chat_id, e));
            }
        }
    }

    failures
}
