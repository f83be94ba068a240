//! REST adapter for user search and friend requests.

use async_trait::async_trait;
use tracing::info;

use super::dto::FriendRequestBodyDto;
use super::{ApiClient, decode_json};
use crate::domain::friendship::{FriendRequest, UserSearchOverview};
use crate::domain::ports::{FriendService, ServiceResult};
use crate::domain::user::UserId;

const FRIEND_REQUESTS: &str = "friend-requests";

/// [`FriendService`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpFriendService {
    api: ApiClient,
}

impl HttpFriendService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl FriendService for HttpFriendService {
    async fn find_users_by_name(
        &self,
        viewer: &UserId,
        name: &str,
    ) -> ServiceResult<Vec<UserSearchOverview>> {
        let url = self.api.endpoint(&["api", "users", "search"])?;
        let request = self
            .api
            .client()
            .get(url)
            .query(&[("name", name), ("viewerId", viewer.as_str())]);
        let body = self.api.execute(request).await?;
        decode_json(&body, "user search")
    }

    async fn send_friend_request(&self, viewer: &UserId, friend: &UserId) -> ServiceResult<()> {
        let url = self
            .api
            .endpoint(&["api", "users", viewer.as_str(), FRIEND_REQUESTS])?;
        let request = self
            .api
            .client()
            .post(url)
            .json(&FriendRequestBodyDto { friend_id: friend });
        self.api.execute(request).await?;
        info!(%viewer, %friend, "friend request submitted");
        Ok(())
    }

    async fn accept_friend_request(&self, viewer: &UserId, friend: &UserId) -> ServiceResult<()> {
        let url = self.api.endpoint(&[
            "api",
            "users",
            viewer.as_str(),
            FRIEND_REQUESTS,
            friend.as_str(),
        ])?;
        self.api.execute(self.api.client().put(url)).await?;
        info!(%viewer, %friend, "friend request acceptance submitted");
        Ok(())
    }

    async fn list_friend_requests(&self, viewer: &UserId) -> ServiceResult<Vec<FriendRequest>> {
        let url = self
            .api
            .endpoint(&["api", "users", viewer.as_str(), FRIEND_REQUESTS])?;
        let body = self.api.execute(self.api.client().get(url)).await?;
        decode_json(&body, "friend request list")
    }
}
