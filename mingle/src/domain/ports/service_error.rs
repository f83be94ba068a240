//! Failure type shared by the client service ports.
//!
//! Service calls return [`ServiceResult`] so transport and server failures
//! reach the stores as values. The `Display` text of a [`ServiceError`] is
//! the message shown to the user.

use thiserror::Error;

/// Outcome of a client service call.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by client service adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The request never produced a response (connection refused, DNS, I/O).
    #[error("{message}")]
    Transport { message: String },
    /// The server answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// A success response carried a body that could not be decoded.
    #[error("{message}")]
    Decode { message: String },
}

impl ServiceError {
    /// Helper for transport failures.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Helper for server rejections.
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    /// Helper for undecodable bodies.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Message suitable for display.
    pub fn message(&self) -> &str {
        match self {
            Self::Transport { message } | Self::Rejected { message, .. } | Self::Decode { message } => {
                message.as_str()
            }
        }
    }
}
