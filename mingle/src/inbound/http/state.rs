//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data` so they depend only
//! on domain ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::FriendRequestLedger;
use crate::domain::ports::FriendRequestCommand;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub friend_requests: Arc<dyn FriendRequestCommand>,
}

impl HttpState {
    /// Construct state from a friend-request port implementation.
    pub fn new(friend_requests: Arc<dyn FriendRequestCommand>) -> Self {
        Self { friend_requests }
    }
}

impl Default for HttpState {
    /// State backed by a fresh in-memory ledger.
    fn default() -> Self {
        Self::new(Arc::new(FriendRequestLedger::new()))
    }
}
