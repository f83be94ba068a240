//! User identity, profile field validators, and onboarding inputs.
//!
//! Validators are pure: they inspect a raw field value and either accept it
//! or return a [`UserValidationError`] whose `Display` text is the message
//! shown next to the field.

use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum allowed length for a user name.
pub const USER_NAME_MIN: usize = 2;
/// Maximum allowed length for a user name.
pub const USER_NAME_MAX: usize = 20;
/// Maximum allowed length for the introduction text.
pub const INTRODUCE_MAX: usize = 100;
/// Maximum number of tags on a profile.
pub const TAGS_MAX: usize = 5;
/// Maximum length of a single tag.
pub const TAG_MAX: usize = 10;
/// Largest accepted profile image, in bytes.
pub const PROFILE_IMAGE_MAX_BYTES: usize = 5 * 1024 * 1024;
/// MIME types accepted for profile images.
pub const PROFILE_IMAGE_TYPES: [&str; 4] = ["image/png", "image/jpeg", "image/gif", "image/webp"];

/// Validation errors returned by the profile field validators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserValidationError {
    #[error("user id must not be empty")]
    EmptyId,
    #[error("user id must not contain whitespace or slashes")]
    InvalidId,
    #[error("name must not be empty")]
    EmptyName,
    #[error("name must be at least {min} characters")]
    NameTooShort { min: usize },
    #[error("name must be at most {max} characters")]
    NameTooLong { max: usize },
    #[error("introduction must be at most {max} characters")]
    IntroduceTooLong { max: usize },
    #[error("at most {max} tags are allowed")]
    TooManyTags { max: usize },
    #[error("tags must not be blank")]
    EmptyTag,
    #[error("each tag must be at most {max} characters")]
    TagTooLong { max: usize },
    #[error("tags may only contain letters, numbers, hyphens, or underscores")]
    TagInvalidCharacters,
    #[error("tag '{tag}' is repeated")]
    DuplicateTag { tag: String },
    #[error("profile image must be a PNG, JPEG, GIF, or WebP file")]
    UnsupportedImageType { content_type: String },
    #[error("profile image must not be empty")]
    EmptyImage,
    #[error("profile image must be at most {max_bytes} bytes")]
    ImageTooLarge { max_bytes: usize },
}

/// Stable user identifier issued by the authentication provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`].
    pub fn new(id: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::from_owned(id.into())
    }

    fn from_owned(id: String) -> Result<Self, UserValidationError> {
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.chars().any(|c| c.is_whitespace() || c == '/') {
            return Err(UserValidationError::InvalidId);
        }
        Ok(Self(id))
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Presence status reported for a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Online,
    Offline,
    #[serde(other)]
    Unknown,
}

/// Image file chosen during onboarding, prior to upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileImage {
    /// Original file name as picked by the user.
    pub file_name: String,
    /// MIME type, e.g. `image/png`.
    pub content_type: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl ProfileImage {
    /// Bundle a picked file.
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

static TAG_RE: OnceLock<Regex> = OnceLock::new();

fn tag_regex() -> &'static Regex {
    TAG_RE.get_or_init(|| {
        // Length is enforced separately; this regex constrains allowed characters.
        Regex::new(r"^[\p{L}\p{N}_-]+$")
            .unwrap_or_else(|error| panic!("tag regex failed to compile: {error}"))
    })
}

/// Check a display name.
///
/// # Examples
/// ```
/// use mingle::domain::user::{validate_user_name, UserValidationError};
///
/// assert!(validate_user_name("Ada").is_ok());
/// assert_eq!(validate_user_name("  "), Err(UserValidationError::EmptyName));
/// ```
pub fn validate_user_name(name: &str) -> Result<(), UserValidationError> {
    if name.trim().is_empty() {
        return Err(UserValidationError::EmptyName);
    }
    let length = name.chars().count();
    if length < USER_NAME_MIN {
        return Err(UserValidationError::NameTooShort { min: USER_NAME_MIN });
    }
    if length > USER_NAME_MAX {
        return Err(UserValidationError::NameTooLong { max: USER_NAME_MAX });
    }
    Ok(())
}

/// Check the free-text introduction. Empty text is allowed.
pub fn validate_user_introduce(introduce: &str) -> Result<(), UserValidationError> {
    if introduce.chars().count() > INTRODUCE_MAX {
        return Err(UserValidationError::IntroduceTooLong { max: INTRODUCE_MAX });
    }
    Ok(())
}

/// Check a list of tags as produced by [`split_tags`].
pub fn validate_user_tags<S: AsRef<str>>(tags: &[S]) -> Result<(), UserValidationError> {
    if tags.len() > TAGS_MAX {
        return Err(UserValidationError::TooManyTags { max: TAGS_MAX });
    }
    let mut seen = HashSet::with_capacity(tags.len());
    for tag in tags.iter().map(AsRef::as_ref) {
        if tag.is_empty() {
            return Err(UserValidationError::EmptyTag);
        }
        if tag.chars().count() > TAG_MAX {
            return Err(UserValidationError::TagTooLong { max: TAG_MAX });
        }
        if !tag_regex().is_match(tag) {
            return Err(UserValidationError::TagInvalidCharacters);
        }
        if !seen.insert(tag) {
            return Err(UserValidationError::DuplicateTag {
                tag: tag.to_owned(),
            });
        }
    }
    Ok(())
}

/// Check the type and size of a picked profile image.
pub fn validate_user_profile_image(image: &ProfileImage) -> Result<(), UserValidationError> {
    if !PROFILE_IMAGE_TYPES.contains(&image.content_type.as_str()) {
        return Err(UserValidationError::UnsupportedImageType {
            content_type: image.content_type.clone(),
        });
    }
    if image.bytes.is_empty() {
        return Err(UserValidationError::EmptyImage);
    }
    if image.bytes.len() > PROFILE_IMAGE_MAX_BYTES {
        return Err(UserValidationError::ImageTooLarge {
            max_bytes: PROFILE_IMAGE_MAX_BYTES,
        });
    }
    Ok(())
}

/// Split the raw tags input on single spaces.
///
/// No trimming and no empty-token filtering: `""` yields `[""]` and
/// `"a  b"` yields `["a", "", "b"]`.
///
/// # Examples
/// ```
/// use mingle::domain::user::split_tags;
///
/// assert_eq!(split_tags("a b c"), vec!["a", "b", "c"]);
/// assert_eq!(split_tags(""), vec![""]);
/// ```
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(' ').map(str::to_owned).collect()
}

#[cfg(test)]
mod tests;
