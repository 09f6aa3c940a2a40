use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a list fetch failed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// The request never produced a response (DNS, refused, reset...).
    Network,
    /// The server answered with a non-2xx status.
    Status,
    /// The body was not JSON of the expected shape.
    Parse,
}

impl fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchErrorKind::Network => write!(f, "NetworkFailure"),
            FetchErrorKind::Status => write!(f, "NonSuccessStatus"),
            FetchErrorKind::Parse => write!(f, "ParseFailure"),
        }
    }
}

/// Structured fetch error. The detail is meant for the diagnostic log;
/// users only ever see the per-screen generic message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FetchError {
    pub kind: FetchErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl FetchError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Network,
            message: message.into(),
            status: None,
        }
    }

    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Status,
            message: message.into(),
            status: Some(status),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Parse,
            message: message.into(),
            status: None,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(code) => write!(f, "{} ({}): {}", self.kind, code, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::parse(e.to_string())
    }
}
