//! Friend-request lifecycle between a viewer and another user.
//!
//! ## Invariants
//! - A relationship holds exactly one [`FriendRequestStatus`].
//! - Only two transitions exist: sending a request (`NONE → REQUESTED`) and
//!   accepting it (`REQUESTED → ACCEPTED`).

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use super::user::{UserId, UserStatus};

/// Relationship status of a user relative to the current viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FriendRequestStatus {
    /// No request has been sent in either direction.
    #[default]
    None,
    /// A request is pending.
    Requested,
    /// The users are friends.
    Accepted,
}

/// Rejected status transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FriendTransitionError {
    #[error("a friend request is already pending")]
    AlreadyRequested,
    #[error("already friends")]
    AlreadyFriends,
    #[error("no pending friend request")]
    NotRequested,
}

impl FriendRequestStatus {
    /// Status after the viewer sends a request.
    ///
    /// # Examples
    /// ```
    /// use mingle::domain::FriendRequestStatus;
    ///
    /// let next = FriendRequestStatus::None.send_request().expect("allowed");
    /// assert_eq!(next, FriendRequestStatus::Requested);
    /// assert!(FriendRequestStatus::Accepted.send_request().is_err());
    /// ```
    pub fn send_request(self) -> Result<Self, FriendTransitionError> {
        match self {
            Self::None => Ok(Self::Requested),
            Self::Requested => Err(FriendTransitionError::AlreadyRequested),
            Self::Accepted => Err(FriendTransitionError::AlreadyFriends),
        }
    }

    /// Status after a pending request is accepted.
    pub fn accept(self) -> Result<Self, FriendTransitionError> {
        match self {
            Self::Requested => Ok(Self::Accepted),
            Self::None => Err(FriendTransitionError::NotRequested),
            Self::Accepted => Err(FriendTransitionError::AlreadyFriends),
        }
    }
}

/// Control rendered next to a searched user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FriendButton {
    /// Actionable "send request" control.
    SendRequest,
    /// Disabled control while a request is pending.
    Pending,
    /// "Already friends" control.
    AlreadyFriends,
}

impl FriendButton {
    /// Pick the control for a relationship status.
    pub fn for_status(status: FriendRequestStatus) -> Self {
        match status {
            FriendRequestStatus::None => Self::SendRequest,
            FriendRequestStatus::Requested => Self::Pending,
            FriendRequestStatus::Accepted => Self::AlreadyFriends,
        }
    }

    /// Whether clicking the control issues a request.
    pub fn is_actionable(self) -> bool {
        matches!(self, Self::SendRequest)
    }

    /// Short label for the control.
    pub fn label(self) -> &'static str {
        match self {
            Self::SendRequest => "Add friend",
            Self::Pending => "Requested",
            Self::AlreadyFriends => "Friends",
        }
    }
}

/// Search-result projection of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSearchOverview {
    pub id: UserId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub introduce: String,
    #[serde(default)]
    pub request_history: FriendRequestStatus,
    pub status: UserStatus,
}

impl UserSearchOverview {
    /// Control to render for this user.
    pub fn friend_button(&self) -> FriendButton {
        FriendButton::for_status(self.request_history)
    }
}

/// Pending request addressed to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FriendRequest {
    /// User who sent the request.
    #[schema(value_type = String, example = "Xk2fA9bQ0mZ")]
    pub requester_id: UserId,
    /// Current status of the request.
    pub status: FriendRequestStatus,
}
