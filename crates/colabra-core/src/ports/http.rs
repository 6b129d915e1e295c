//! HttpTransport port - one JSON POST, status and raw body back.

use async_trait::async_trait;

use crate::domain::errors::CommentError;

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: serde_json::Value,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// HttpTransport sends a JSON request and hands back whatever the server said.
///
/// Any HTTP status is an `Ok` response; interpreting it is the caller's job.
/// `Err` is reserved for failures where no response arrived at all
/// (DNS, TLS, connection reset, ...), reported as `CommentError::Unexpected`.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post_json(&self, request: HttpRequest) -> Result<HttpResponse, CommentError>;
}
