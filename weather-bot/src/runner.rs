//! Long-poll loop feeding the dispatcher.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::dispatcher::Dispatcher;
use crate::telegram::UpdateSource;

/// Pause after a failed poll before asking again.
const POLL_ERROR_PAUSE: Duration = Duration::from_secs(1);

/// Poll `source` until `shutdown` resolves. Every message is handled on its
/// own task; poll failures are logged and never end the loop.
pub async fn run<S, F>(source: S, dispatcher: Arc<Dispatcher>, shutdown: F)
where
    S: UpdateSource,
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    let mut offset = None;

    info!("Polling for updates");

    loop {
        let polled = tokio::select! {
            () = &mut shutdown => break,
            polled = source.poll_updates(offset) => polled,
        };

        match polled {
            Ok(updates) => {
                for update in updates {
                    offset = Some(update.update_id + 1);

                    let Some(message) = update.message else {
                        debug!(update_id = update.update_id, "Skipping update without a message");
                        continue;
                    };

                    let dispatcher = Arc::clone(&dispatcher);
                    tokio::spawn(async move { dispatcher.handle(&message).await });
                }
            }
            Err(err) => {
                warn!(error = %err, "Polling Telegram failed, retrying in {:?}", POLL_ERROR_PAUSE);
                tokio::select! {
                    () = &mut shutdown => break,
                    () = tokio::time::sleep(POLL_ERROR_PAUSE) => {}
                }
            }
        }
    }

    info!("Polling stopped");
}
