//! Failure payload shared by the ledger and the HTTP adapter.
//!
//! Nothing here knows about status codes; `inbound::http::error` owns that
//! mapping.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Failure category, serialised in snake case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Malformed ids, bodies, or self-addressed requests.
    InvalidRequest,
    /// No pending request between the two users.
    NotFound,
    /// A request or friendship already exists.
    Conflict,
    InternalError,
}

impl ErrorCode {
    /// Text used when an error is built with a blank message.
    pub fn fallback_message(self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid request",
            Self::NotFound => "not found",
            Self::Conflict => "conflict",
            Self::InternalError => "Internal server error",
        }
    }
}

/// Error body returned by the friend-request API.
///
/// The message is never blank: constructors and deserialisation substitute
/// [`ErrorCode::fallback_message`].
///
/// # Examples
/// ```
/// use mingle::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("no pending friend request");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(Error::conflict(" ").message(), "conflict");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(from = "RawError")]
pub struct Error {
    #[schema(example = "conflict")]
    code: ErrorCode,
    #[schema(example = "already friends")]
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

#[derive(Deserialize)]
struct RawError {
    code: ErrorCode,
    #[serde(default)]
    message: String,
    #[serde(default)]
    details: Option<Value>,
}

impl From<RawError> for Error {
    fn from(raw: RawError) -> Self {
        let mut error = Self::new(raw.code, raw.message);
        error.details = raw.details;
        error
    }
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.trim().is_empty() {
            message = code.fallback_message().to_owned();
        }
        Self {
            code,
            message,
            details: None,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Attach structured context, such as the offending field.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}
