//! Driving port behind the friend-request HTTP routes.
//!
//! Route handlers only parse paths and bodies; relationship rules live behind
//! this port so handler tests can substitute a mock.

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::friendship::FriendRequest;
use crate::domain::user::UserId;

/// Friend-request use-cases served over HTTP.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FriendRequestCommand: Send + Sync {
    /// Record a request from `requester` to `recipient`.
    async fn send_request(&self, requester: &UserId, recipient: &UserId) -> Result<(), Error>;

    /// Accept the pending request `requester` sent to `recipient`.
    async fn accept_request(&self, recipient: &UserId, requester: &UserId) -> Result<(), Error>;

    /// Pending requests addressed to `recipient`.
    async fn pending_requests(&self, recipient: &UserId) -> Result<Vec<FriendRequest>, Error>;
}
