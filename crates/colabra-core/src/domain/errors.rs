//! Errors - failure taxonomy for one comment submission.
//!
//! Every failure ends up as a single human-readable line handed to
//! `PipelineHost::set_failed`, so `Display` is the user-facing format.

use std::fmt;

use thiserror::Error;

pub(crate) const UNEXPECTED_FALLBACK: &str = "An unexpected error occurred";

/// ErrorKind classifies a failure for match-based handling.
///
/// - Validation: bad input, detected before any network call
/// - Api: the service answered with a non-success status
/// - Unexpected: transport failures, malformed responses, host I/O
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Api,
    Unexpected,
}

/// A non-success answer from the Colabra API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    pub status: u16,
    pub message: Option<String>,
    pub code: Option<String>,
}

impl ApiFailure {
    pub fn new(status: u16, message: Option<String>, code: Option<String>) -> Self {
        Self {
            status,
            message: message.filter(|m| !m.is_empty()),
            code: code.filter(|c| !c.is_empty()),
        }
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API Error ({})", self.status)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(code) = &self.code {
            write!(f, " ({code})")?;
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum CommentError {
    #[error("{0}")]
    Validation(String),

    #[error("Input required and not supplied: {0}")]
    MissingInput(String),

    #[error("{0}")]
    Api(ApiFailure),

    #[error("{}", unexpected_message(.0))]
    Unexpected(String),
}

fn unexpected_message(message: &str) -> &str {
    if message.trim().is_empty() {
        UNEXPECTED_FALLBACK
    } else {
        message
    }
}

impl CommentError {
    pub fn unexpected(err: impl fmt::Display) -> Self {
        Self::Unexpected(err.to_string())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) | Self::MissingInput(_) => ErrorKind::Validation,
            Self::Api(_) => ErrorKind::Api,
            Self::Unexpected(_) => ErrorKind::Unexpected,
        }
    }
}

impl From<ApiFailure> for CommentError {
    fn from(failure: ApiFailure) -> Self {
        Self::Api(failure)
    }
}

impl From<serde_json::Error> for CommentError {
    fn from(err: serde_json::Error) -> Self {
        Self::unexpected(err)
    }
}

impl From<std::io::Error> for CommentError {
    fn from(err: std::io::Error) -> Self {
        Self::unexpected(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_failure_with_code() {
        let failure = ApiFailure::new(
            400,
            Some("Invalid task ID".to_string()),
            Some("INVALID_TASK_ID".to_string()),
        );
        assert_eq!(
            failure.to_string(),
            "API Error (400): Invalid task ID (INVALID_TASK_ID)"
        );
    }

    #[test]
    fn api_failure_drops_empty_code() {
        let failure = ApiFailure::new(404, Some("Not found".to_string()), Some(String::new()));
        assert_eq!(failure.to_string(), "API Error (404): Not found");
    }

    #[test]
    fn api_failure_without_envelope_shows_status_only() {
        let failure = ApiFailure::new(502, None, None);
        assert_eq!(failure.to_string(), "API Error (502)");
    }

    #[test]
    fn unexpected_without_message_falls_back() {
        assert_eq!(
            CommentError::Unexpected(String::new()).to_string(),
            "An unexpected error occurred"
        );
        assert_eq!(
            CommentError::unexpected("connection refused").to_string(),
            "connection refused"
        );
    }

    #[test]
    fn kinds_are_tagged() {
        assert_eq!(
            CommentError::Validation("x".into()).kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            CommentError::MissingInput("api_key".into()).kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            CommentError::from(ApiFailure::new(500, None, None)).kind(),
            ErrorKind::Api
        );
        let io = std::io::Error::other("disk full");
        assert_eq!(CommentError::from(io).kind(), ErrorKind::Unexpected);
    }
}
