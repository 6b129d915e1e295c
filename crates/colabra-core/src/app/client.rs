//! CommentClient - request building and response interpretation.

use tracing::debug;

use crate::app::config::ApiConfig;
use crate::domain::comment::{CommentPayload, CommentResult, ErrorEnvelope};
use crate::domain::errors::{ApiFailure, CommentError};
use crate::domain::resource::ResourceReference;
use crate::ports::{HttpRequest, HttpResponse, HttpTransport};

pub const API_KEY_SCHEME: &str = "X-Colabra-Api-Key";

pub struct CommentClient<'a, T: ?Sized> {
    transport: &'a T,
    config: &'a ApiConfig,
    api_key: &'a str,
}

impl<'a, T: HttpTransport + ?Sized> CommentClient<'a, T> {
    pub fn new(transport: &'a T, config: &'a ApiConfig, api_key: &'a str) -> Self {
        Self {
            transport,
            config,
            api_key,
        }
    }

    pub fn build_request(&self, payload: &CommentPayload) -> Result<HttpRequest, CommentError> {
        Ok(HttpRequest {
            url: self.config.comments_url(),
            headers: vec![
                (
                    "Authorization".to_string(),
                    format!("{API_KEY_SCHEME} {}", self.api_key),
                ),
                ("Content-Type".to_string(), "application/json".to_string()),
            ],
            body: serde_json::to_value(payload)?,
        })
    }

    #[tracing::instrument(skip_all, fields(kind = %resource.kind(), id = resource.identifier()))]
    pub async fn create_comment(
        &self,
        resource: &ResourceReference,
        body_text: &str,
    ) -> Result<CommentResult, CommentError> {
        let payload = CommentPayload::new(resource, body_text);
        let request = self.build_request(&payload)?;
        debug!(url = %request.url, "posting comment");

        let response = self.transport.post_json(request).await?;
        debug!(status = response.status, "received response");

        interpret_response(response)
    }
}

/// 200 and 201 carry the created comment; every other status is an API failure.
pub fn interpret_response(response: HttpResponse) -> Result<CommentResult, CommentError> {
    match response.status {
        200 | 201 => Ok(serde_json::from_str(&response.body)?),
        status => {
            let (message, code) = ErrorEnvelope::parse_lenient(&response.body).into_parts();
            Err(ApiFailure::new(status, message, code).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorKind;
    use crate::impls::StubTransport;
    use serde_json::json;

    fn created_body(id: &str) -> String {
        json!({
            "id": id,
            "task_id": "TSK-123",
            "body_text": "Test comment",
            "created_at": "2024-02-20T12:00:00Z",
            "updated_at": "2024-02-20T12:00:00Z"
        })
        .to_string()
    }

    #[test]
    fn request_carries_auth_scheme_and_content_type() {
        let transport = StubTransport::new();
        let config = ApiConfig::default();
        let client = CommentClient::new(&transport, &config, "test-api-key");
        let resource = ResourceReference::parse("TSK-123").unwrap();

        let request = client
            .build_request(&CommentPayload::new(&resource, "Test comment"))
            .unwrap();

        assert_eq!(request.url, "https://api.colabra.ai/2024-01/comments");
        assert_eq!(
            request.header("authorization"),
            Some("X-Colabra-Api-Key test-api-key")
        );
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(
            request.body,
            json!({ "task_id": "TSK-123", "body_text": "Test comment" })
        );
    }

    #[test]
    fn ok_and_created_are_success() {
        for status in [200, 201] {
            let result = interpret_response(HttpResponse::new(status, created_body("c-1"))).unwrap();
            assert_eq!(result.id, "c-1");
        }
    }

    #[test]
    fn other_2xx_is_not_success() {
        let err = interpret_response(HttpResponse::new(204, "")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Api);
        assert_eq!(err.to_string(), "API Error (204)");
    }

    #[test]
    fn error_envelope_becomes_api_failure() {
        let body = json!({ "error": { "message": "Invalid task ID", "code": "INVALID_TASK_ID" } });
        let err = interpret_response(HttpResponse::new(400, body.to_string())).unwrap_err();
        assert_eq!(
            err.to_string(),
            "API Error (400): Invalid task ID (INVALID_TASK_ID)"
        );
    }

    #[test]
    fn malformed_success_body_is_unexpected() {
        let err = interpret_response(HttpResponse::new(201, "not json")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unexpected);
        assert!(!err.to_string().is_empty());
    }

    #[tokio::test]
    async fn create_comment_posts_once() {
        let transport = StubTransport::new().respond(201, created_body("comment-123"));
        let config = ApiConfig::default();
        let client = CommentClient::new(&transport, &config, "k");
        let resource = ResourceReference::parse("TSK-123").unwrap();

        let result = client.create_comment(&resource, "Test comment").await.unwrap();

        assert_eq!(result.id, "comment-123");
        assert_eq!(transport.requests().len(), 1);
    }
}
