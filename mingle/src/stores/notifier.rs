//! Change notification for stores.
//!
//! Every store mutation bumps a revision held in a `tokio::sync::watch`
//! channel. Views subscribe and re-read store state whenever the revision
//! changes.

use tokio::sync::watch;

/// Revision counter published to subscribers.
#[derive(Debug)]
pub struct ChangeNotifier {
    revision: watch::Sender<u64>,
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        let (revision, _) = watch::channel(0);
        Self { revision }
    }
}

impl ChangeNotifier {
    /// Create a notifier at revision zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Announce a state change.
    pub fn notify(&self) {
        self.revision.send_modify(|revision| *revision += 1);
    }

    /// Current revision.
    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    /// Receiver that wakes on every subsequent change.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }
}
