//! Configuration: API endpoint settings and the step's inputs.

use crate::domain::errors::CommentError;
use crate::ports::{InputOptions, PipelineHost};

pub const DEFAULT_BASE_URL: &str = "https://api.colabra.ai";
pub const DEFAULT_API_VERSION: &str = "2024-01";
pub const DEFAULT_USER_AGENT: &str = "colabra-comment-action";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_version: String,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ApiConfig {
    /// Point the client somewhere else (a mock server in tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn comments_url(&self) -> String {
        format!(
            "{}/{}/comments",
            self.base_url.trim_end_matches('/'),
            self.api_version.trim_matches('/')
        )
    }
}

/// The four required inputs of the step.
#[derive(Clone, PartialEq, Eq)]
pub struct ActionInputs {
    pub api_key: String,
    /// Accepted for interface compatibility; nothing reads it yet.
    pub workspace_slug: String,
    pub resource_id: String,
    pub body_text: String,
}

impl ActionInputs {
    pub fn from_host<H: PipelineHost + ?Sized>(host: &H) -> Result<Self, CommentError> {
        Ok(Self {
            api_key: host.get_input("api_key", InputOptions::required())?,
            workspace_slug: host.get_input("workspace_slug", InputOptions::required())?,
            resource_id: host.get_input("resource_id", InputOptions::required())?,
            body_text: host.get_input("body_text", InputOptions::required())?,
        })
    }
}

// Keeps the API key out of `{:?}` output.
impl std::fmt::Debug for ActionInputs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionInputs")
            .field("api_key", &"***")
            .field("workspace_slug", &self.workspace_slug)
            .field("resource_id", &self.resource_id)
            .field("body_text", &self.body_text)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::RecordingHost;

    #[test]
    fn default_comments_url() {
        assert_eq!(
            ApiConfig::default().comments_url(),
            "https://api.colabra.ai/2024-01/comments"
        );
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let config = ApiConfig::default().with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.comments_url(), "http://127.0.0.1:8080/2024-01/comments");
    }

    #[test]
    fn reads_all_four_inputs() {
        let host = RecordingHost::with_inputs([
            ("api_key", "key"),
            ("workspace_slug", "acme"),
            ("resource_id", "TSK-1"),
            ("body_text", "hello"),
        ]);
        let inputs = ActionInputs::from_host(&host).unwrap();
        assert_eq!(inputs.api_key, "key");
        assert_eq!(inputs.workspace_slug, "acme");
        assert_eq!(inputs.resource_id, "TSK-1");
        assert_eq!(inputs.body_text, "hello");
    }

    #[test]
    fn missing_input_is_reported_by_name() {
        let host = RecordingHost::with_inputs([("api_key", "key"), ("workspace_slug", "acme")]);
        let err = ActionInputs::from_host(&host).unwrap_err();
        assert_eq!(err.to_string(), "Input required and not supplied: resource_id");
    }

    #[test]
    fn debug_hides_api_key() {
        let inputs = ActionInputs {
            api_key: "sk_secret".to_string(),
            workspace_slug: "acme".to_string(),
            resource_id: "PRO-1".to_string(),
            body_text: "hi".to_string(),
        };
        let shown = format!("{inputs:?}");
        assert!(!shown.contains("sk_secret"));
        assert!(shown.contains("PRO-1"));
    }
}
