//! CLI command implementations.

use hltv_lib::CancellationToken;
use tracing::warn;

pub(crate) mod list;
pub(crate) mod search;
pub(crate) mod single;

/// Cancels `cancel` on the first Ctrl-C.
pub(crate) fn cancel_on_ctrl_c(cancel: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupted, stopping at the next page");
            cancel.cancel();
        }
    });
}
