//! ReqwestTransport - `HttpTransport` over an async `reqwest::Client`.

use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, warn};

use crate::domain::errors::CommentError;
use crate::ports::{HttpRequest, HttpResponse, HttpTransport};

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn new(user_agent: &str) -> Result<Self, CommentError> {
        let http = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(CommentError::unexpected)?;
        Ok(Self { http })
    }

    fn headers(request: &HttpRequest) -> Result<HeaderMap, CommentError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &request.headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(CommentError::unexpected)?;
            let value = HeaderValue::from_str(value).map_err(CommentError::unexpected)?;
            headers.insert(name, value);
        }
        Ok(headers)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(&self, request: HttpRequest) -> Result<HttpResponse, CommentError> {
        let headers = Self::headers(&request)?;
        let response = self
            .http
            .post(&request.url)
            .headers(headers)
            .json(&request.body)
            .send()
            .await
            .map_err(CommentError::unexpected)?;

        let status = response.status().as_u16();
        let body = readable_body(status, response.text().await)?;
        debug!(status, bytes = body.len(), "response body read");

        Ok(HttpResponse { status, body })
    }
}

/// A body that fails to arrive only matters for success statuses; an error
/// status is still reported, with an empty body.
fn readable_body<E: fmt::Display>(
    status: u16,
    body: Result<String, E>,
) -> Result<String, CommentError> {
    match body {
        Ok(body) => Ok(body),
        Err(err) if matches!(status, 200 | 201) => Err(CommentError::unexpected(err)),
        Err(err) => {
            warn!(status, error = %err, "failed to read error response body");
            Ok(String::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreadable_error_body_keeps_status() {
        let body = readable_body(503, Err::<String, _>("connection reset")).unwrap();
        assert!(body.is_empty());
    }

    #[test]
    fn unreadable_success_body_is_unexpected() {
        let err = readable_body(201, Err::<String, _>("connection reset")).unwrap_err();
        assert_eq!(err.to_string(), "connection reset");
    }

    #[test]
    fn readable_body_passes_through() {
        assert_eq!(readable_body::<String>(400, Ok("{}".to_string())).unwrap(), "{}");
    }
}
