//! Comment wire model: request payload, success body, error envelope.

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::resource::{ResourceKind, ResourceReference};

/// Request body for `POST /comments`.
///
/// Serializes as `{"task_id": "...", "body_text": "..."}` (or `project_id`),
/// with the resource field first and the body text untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentPayload {
    kind: ResourceKind,
    resource_id: String,
    body_text: String,
}

impl CommentPayload {
    pub fn new(resource: &ResourceReference, body_text: impl Into<String>) -> Self {
        Self {
            kind: resource.kind(),
            resource_id: resource.identifier().to_string(),
            body_text: body_text.into(),
        }
    }

    pub fn resource_field_name(&self) -> &'static str {
        self.kind.field_name()
    }

    pub fn resource_id(&self) -> &str {
        &self.resource_id
    }

    pub fn body_text(&self) -> &str {
        &self.body_text
    }
}

impl Serialize for CommentPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(self.resource_field_name(), &self.resource_id)?;
        map.serialize_entry("body_text", &self.body_text)?;
        map.end()
    }
}

/// A created comment as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentResult {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    pub body_text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// `{"error": {"message": "...", "code": "..."}}`
///
/// Every field is optional: a partial or odd envelope must still produce a
/// readable failure instead of a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub error: Option<ErrorDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub code: Option<String>,
}

impl ErrorEnvelope {
    /// Best-effort parse; anything that is not a JSON object yields an empty envelope.
    pub fn parse_lenient(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    pub fn into_parts(self) -> (Option<String>, Option<String>) {
        match self.error {
            Some(detail) => (detail.message, detail.code),
            None => (None, None),
        }
    }
}
