//! Domain ports defining the edges of the hexagon.
//!
//! Client-side stores talk to the network through the driven ports
//! [`UserService`] and [`FriendService`]; the HTTP server reaches the
//! relationship rules through the driving port [`FriendRequestCommand`].

mod friend_request_command;
mod friend_service;
mod service_error;
mod user_service;

#[cfg(test)]
pub use friend_request_command::MockFriendRequestCommand;
pub use friend_request_command::FriendRequestCommand;
#[cfg(test)]
pub use friend_service::MockFriendService;
pub use friend_service::FriendService;
pub use service_error::{ServiceError, ServiceResult};
#[cfg(test)]
pub use user_service::MockUserService;
pub use user_service::{NewUser, UserService};
