//! Onboarding ("welcome") store.
//!
//! Holds the editable profile fields, derives per-field validation messages
//! once a field has been touched, and orchestrates image upload followed by
//! user creation.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, warn};

use super::notifier::ChangeNotifier;
use crate::domain::ports::{NewUser, UserService};
use crate::domain::user::{
    ProfileImage, UserId, UserValidationError, split_tags, validate_user_introduce,
    validate_user_name, validate_user_profile_image, validate_user_tags,
};

/// A field value plus whether the user has edited it yet.
#[derive(Debug, Clone, Default)]
struct Field<T> {
    value: T,
    touched: bool,
}

impl<T> Field<T> {
    fn set(&mut self, value: T) {
        self.value = value;
        self.touched = true;
    }

    /// Validation message, gated on the field having been touched.
    fn message(
        &self,
        validate: impl FnOnce(&T) -> Result<(), UserValidationError>,
    ) -> Option<String> {
        if !self.touched {
            return None;
        }
        validate(&self.value).err().map(|error| error.to_string())
    }
}

/// State and actions behind the onboarding page.
pub struct WelcomeStore {
    user_service: Arc<dyn UserService>,
    profile_image: Field<Option<ProfileImage>>,
    name: Field<String>,
    introduce: Field<String>,
    tags: Field<String>,
    error_message: Option<String>,
    success_to_create: bool,
    changes: ChangeNotifier,
}

impl WelcomeStore {
    /// Build a store backed by `user_service`.
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self {
            user_service,
            profile_image: Field::default(),
            name: Field::default(),
            introduce: Field::default(),
            tags: Field::default(),
            error_message: None,
            success_to_create: false,
            changes: ChangeNotifier::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name.value
    }

    pub fn introduce(&self) -> &str {
        &self.introduce.value
    }

    /// Raw, space-delimited tags input.
    pub fn tags(&self) -> &str {
        &self.tags.value
    }

    pub fn profile_image(&self) -> Option<&ProfileImage> {
        self.profile_image.value.as_ref()
    }

    /// Page-level error from the last `create_user` attempt.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Whether the profile was created; the page navigates away once set.
    pub fn success_to_create(&self) -> bool {
        self.success_to_create
    }

    pub fn profile_image_error_message(&self) -> Option<String> {
        self.profile_image.message(|image| match image {
            Some(image) => validate_user_profile_image(image),
            None => Ok(()),
        })
    }

    pub fn name_error_message(&self) -> Option<String> {
        self.name.message(|name| validate_user_name(name))
    }

    pub fn introduce_error_message(&self) -> Option<String> {
        self.introduce.message(|introduce| validate_user_introduce(introduce))
    }

    pub fn tags_error_message(&self) -> Option<String> {
        self.tags.message(|tags| validate_user_tags(&split_tags(tags)))
    }

    pub fn change_profile_image(&mut self, image: ProfileImage) {
        self.profile_image.set(Some(image));
        self.changes.notify();
    }

    pub fn change_name(&mut self, name: impl Into<String>) {
        self.name.set(name.into());
        self.changes.notify();
    }

    pub fn change_introduce(&mut self, introduce: impl Into<String>) {
        self.introduce.set(introduce.into());
        self.changes.notify();
    }

    pub fn change_tags(&mut self, tags: impl Into<String>) {
        self.tags.set(tags.into());
        self.changes.notify();
    }

    /// Receiver notified after every state change.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    /// Upload the selected image (if any), then create the user.
    ///
    /// An upload failure stops the flow before user creation. Failures land
    /// in [`WelcomeStore::error_message`]; success sets
    /// [`WelcomeStore::success_to_create`].
    pub async fn create_user(&mut self, uid: &UserId) {
        if self.error_message.take().is_some() {
            self.changes.notify();
        }

        let mut profile_image_url = None;
        if let Some(image) = self.profile_image.value.as_ref() {
            match self.user_service.upload_profile_image(uid, image).await {
                Ok(url) => profile_image_url = Some(url),
                Err(error) => {
                    warn!(%uid, error = %error, "profile image upload failed");
                    self.fail(error.to_string());
                    return;
                }
            }
        }

        let user = NewUser {
            uid: uid.clone(),
            name: self.name.value.clone(),
            introduce: self.introduce.value.clone(),
            tags: split_tags(&self.tags.value),
            profile_image_url,
        };
        match self.user_service.create_user(&user).await {
            Ok(()) => {
                info!(%uid, "user created");
                if !self.success_to_create {
                    self.success_to_create = true;
                    self.changes.notify();
                }
            }
            Err(error) => {
                warn!(%uid, error = %error, "user creation failed");
                self.fail(error.to_string());
            }
        }
    }

    fn fail(&mut self, message: String) {
        self.error_message = Some(message);
        self.changes.notify();
    }
}

#[cfg(test)]
mod tests;
