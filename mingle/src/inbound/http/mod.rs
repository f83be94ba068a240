//! HTTP inbound adapter exposing the friend-request API.

pub mod error;
pub mod friend_requests;
pub mod health;
pub mod state;

pub use error::ApiResult;
