//! Driven port for user search and friend-request endpoints.

use async_trait::async_trait;

use super::ServiceResult;
use crate::domain::friendship::{FriendRequest, UserSearchOverview};
use crate::domain::user::UserId;

/// Search and friend-request endpoints consumed by the users page.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FriendService: Send + Sync {
    /// Users whose name or email matches `name`, with their status relative
    /// to `viewer`.
    async fn find_users_by_name(
        &self,
        viewer: &UserId,
        name: &str,
    ) -> ServiceResult<Vec<UserSearchOverview>>;

    /// Send a friend request from `viewer` to `friend`.
    async fn send_friend_request(&self, viewer: &UserId, friend: &UserId) -> ServiceResult<()>;

    /// Accept the pending request `friend` sent to `viewer`.
    async fn accept_friend_request(&self, viewer: &UserId, friend: &UserId) -> ServiceResult<()>;

    /// Pending requests addressed to `viewer`.
    async fn list_friend_requests(&self, viewer: &UserId) -> ServiceResult<Vec<FriendRequest>>;
}
