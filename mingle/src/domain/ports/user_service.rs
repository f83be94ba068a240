//! Driven port for the user endpoints used during onboarding.

use async_trait::async_trait;
use serde::Serialize;

use super::ServiceResult;
use crate::domain::user::{ProfileImage, UserId};

/// Body of `POST api/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub uid: UserId,
    pub name: String,
    pub introduce: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
}

/// User endpoints consumed by the onboarding flow.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Whether a profile already exists for `uid`.
    async fn is_exist_user(&self, uid: &UserId) -> ServiceResult<bool>;

    /// Create the profile. Succeeds iff the server answers 2xx.
    async fn create_user(&self, user: &NewUser) -> ServiceResult<()>;

    /// Upload a profile image and return its public URL.
    async fn upload_profile_image(
        &self,
        uid: &UserId,
        image: &ProfileImage,
    ) -> ServiceResult<String>;
}
