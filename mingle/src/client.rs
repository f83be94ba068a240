//! Client composition root.
//!
//! Wires the REST adapters from [`AppSettings`] and hands out the stores
//! backing each page.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::config::{AppSettings, ConfigError};
use crate::domain::ports::{FriendService, ServiceResult, UserService};
use crate::domain::user::UserId;
use crate::outbound::http::{ApiClient, HttpFriendService, HttpUserService};
use crate::stores::{FriendStore, WelcomeStore};

/// Failures while building the client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to build http client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Service handles shared by every store.
#[derive(Clone)]
pub struct MingleClient {
    user_service: Arc<dyn UserService>,
    friend_service: Arc<dyn FriendService>,
    search_debounce: Duration,
}

impl MingleClient {
    pub fn new(
        user_service: Arc<dyn UserService>,
        friend_service: Arc<dyn FriendService>,
        search_debounce: Duration,
    ) -> Self {
        Self {
            user_service,
            friend_service,
            search_debounce,
        }
    }

    /// Build REST-backed services from settings.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL is unusable or the reqwest client
    /// cannot be constructed.
    pub fn from_settings(settings: &AppSettings) -> Result<Self, ClientError> {
        let api = ApiClient::new(settings.api_base_url()?)?;
        Ok(Self::new(
            Arc::new(HttpUserService::new(api.clone())),
            Arc::new(HttpFriendService::new(api)),
            settings.search_debounce(),
        ))
    }

    /// Whether `uid` still has to go through onboarding.
    pub async fn needs_onboarding(&self, uid: &UserId) -> ServiceResult<bool> {
        let exists = self.user_service.is_exist_user(uid).await?;
        Ok(!exists)
    }

    pub fn welcome_store(&self) -> WelcomeStore {
        WelcomeStore::new(self.user_service.clone())
    }

    pub fn friend_store(&self, viewer: UserId) -> FriendStore {
        FriendStore::with_debounce(viewer, self.friend_service.clone(), self.search_debounce)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockFriendService, MockUserService, ServiceError};
    use rstest::rstest;

    fn uid() -> UserId {
        UserId::new("u-1").expect("uid")
    }

    fn client(user_service: MockUserService) -> MingleClient {
        MingleClient::new(
            Arc::new(user_service),
            Arc::new(MockFriendService::new()),
            Duration::from_millis(20),
        )
    }

    #[rstest]
    #[case(true, false)]
    #[case(false, true)]
    #[tokio::test]
    async fn onboarding_is_needed_for_unknown_users(#[case] exists: bool, #[case] expected: bool) {
        let mut service = MockUserService::new();
        service
            .expect_is_exist_user()
            .times(1)
            .returning(move |_| Ok(exists));
        assert_eq!(
            client(service).needs_onboarding(&uid()).await,
            Ok(expected)
        );
    }

    #[rstest]
    #[tokio::test]
    async fn lookup_failures_propagate() {
        let mut service = MockUserService::new();
        service
            .expect_is_exist_user()
            .returning(|_| Err(ServiceError::transport("connection refused")));
        let error = client(service)
            .needs_onboarding(&uid())
            .await
            .expect_err("transport failure");
        assert_eq!(error.message(), "connection refused");
    }

    #[rstest]
    fn stores_share_the_viewer() {
        let store = client(MockUserService::new()).friend_store(uid());
        assert_eq!(store.viewer(), &uid());
    }

    #[rstest]
    fn settings_with_a_bad_url_fail() {
        let settings = AppSettings {
            api_base_url: Some("::".to_owned()),
            search_debounce_ms: None,
            bind_addr: None,
        };
        let error = MingleClient::from_settings(&settings)
            .err()
            .expect("invalid url");
        assert!(matches!(error, ClientError::Config(_)));
    }
}
