//! Domain primitives, validators, and ports.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic failure payload.
//! - `user`: user identity, profile validators, tag splitting.
//! - `friendship`: friend-request status machine and search projection.
//! - `friend_requests`: in-memory ledger behind the friend-request API.
//! - `ports`: service ports used by stores and HTTP handlers.

pub mod error;
pub mod friend_requests;
pub mod friendship;
pub mod ports;
pub mod user;

pub use self::error::{Error, ErrorCode};
pub use self::friend_requests::FriendRequestLedger;
pub use self::friendship::{
    FriendButton, FriendRequest, FriendRequestStatus, FriendTransitionError, UserSearchOverview,
};
pub use self::user::{ProfileImage, UserId, UserStatus, UserValidationError};
