//! Trailing-edge debounce for search input.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Default delay applied to search keystrokes.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Collapses bursts of calls into the last one.
///
/// Each call to [`Debouncer::settle`] waits for the delay and then reports
/// whether it is still the most recent call. Earlier calls in a burst resolve
/// to `false` and should be dropped by the caller.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    generation: AtomicU64,
}

impl Debouncer {
    /// Build a debouncer with a fixed delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: AtomicU64::new(0),
        }
    }

    /// Configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait out the delay; `true` if no newer call arrived meanwhile.
    pub async fn settle(&self) -> bool {
        let ticket = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        tokio::time::sleep(self.delay).await;
        self.generation.load(Ordering::Acquire) == ticket
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEBOUNCE)
    }
}
