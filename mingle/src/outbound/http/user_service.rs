//! REST adapter for the onboarding user endpoints.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::info;

use super::dto::{InitInfoRequestDto, InitInfoResponseDto, ProfileImageResponseDto};
use super::{ApiClient, decode_json};
use crate::domain::ports::{NewUser, ServiceError, ServiceResult, UserService};
use crate::domain::user::{ProfileImage, UserId};

/// [`UserService`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpUserService {
    api: ApiClient,
}

impl HttpUserService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

fn profile_image_form(uid: &UserId, image: &ProfileImage) -> ServiceResult<Form> {
    let part = Part::bytes(image.bytes.clone())
        .file_name(image.file_name.clone())
        .mime_str(&image.content_type)
        .map_err(|error| {
            ServiceError::transport(format!(
                "invalid content type {}: {error}",
                image.content_type
            ))
        })?;
    Ok(Form::new()
        .text("fileName", uid.to_string())
        .part("profileImage", part))
}

#[async_trait]
impl UserService for HttpUserService {
    async fn is_exist_user(&self, uid: &UserId) -> ServiceResult<bool> {
        // The init-info endpoint reads its input from a JSON body even on GET.
        let url = self.api.endpoint(&["api", "users", "uid", "init-info"])?;
        let request = self
            .api
            .client()
            .get(url)
            .json(&InitInfoRequestDto { uid });
        let body = self.api.execute(request).await?;
        let decoded: InitInfoResponseDto = decode_json(&body, "init-info")?;
        Ok(decoded.exists)
    }

    async fn create_user(&self, user: &NewUser) -> ServiceResult<()> {
        let url = self.api.endpoint(&["api", "users"])?;
        let request = self.api.client().post(url).json(user);
        self.api.execute(request).await?;
        info!(uid = %user.uid, "user profile created");
        Ok(())
    }

    async fn upload_profile_image(
        &self,
        uid: &UserId,
        image: &ProfileImage,
    ) -> ServiceResult<String> {
        let url = self.api.endpoint(&["api", "users", "profile-image"])?;
        let form = profile_image_form(uid, image)?;
        let request = self.api.client().post(url).multipart(form);
        let body = self.api.execute(request).await?;
        let decoded: ProfileImageResponseDto = decode_json(&body, "profile image")?;
        Ok(decoded.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn form_rejects_malformed_content_types() {
        let uid = UserId::new("u-1").expect("uid");
        let image = ProfileImage::new("me.png", "not a mime", vec![1]);
        let error = profile_image_form(&uid, &image).expect_err("bad mime");
        assert!(error.message().starts_with("invalid content type not a mime"));
    }

    #[rstest]
    fn form_accepts_supported_images() {
        let uid = UserId::new("u-1").expect("uid");
        let image = ProfileImage::new("me.png", "image/png", vec![1, 2]);
        let form = profile_image_form(&uid, &image).expect("form");
        assert!(!form.boundary().is_empty());
    }
}
