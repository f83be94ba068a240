//! Wire bodies exchanged with the REST API.

use serde::{Deserialize, Serialize};

use crate::domain::user::UserId;

#[derive(Debug, Serialize)]
pub(super) struct InitInfoRequestDto<'a> {
    pub(super) uid: &'a UserId,
}

#[derive(Debug, Deserialize)]
pub(super) struct InitInfoResponseDto {
    pub(super) exists: bool,
}

#[derive(Debug, Deserialize)]
pub(super) struct ProfileImageResponseDto {
    pub(super) url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct FriendRequestBodyDto<'a> {
    pub(super) friend_id: &'a UserId,
}

/// Error body returned by the API on non-2xx responses.
#[derive(Debug, Deserialize)]
pub(super) struct ErrorBodyDto {
    #[serde(default)]
    pub(super) message: String,
}
