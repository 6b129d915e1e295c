//! Resource identifiers (`TSK-123`, `PRO-123`).

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use super::errors::CommentError;

pub const INVALID_RESOURCE_ID: &str = "resource_id must be in the format TSK-123 or PRO-123";

// ASCII digits only; `\d` would also accept other Unicode decimal digits.
static RESOURCE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(TSK|PRO)-[0-9]+$").expect("valid resource id pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Task,
    Project,
}

impl ResourceKind {
    /// Name of the request field that carries the identifier.
    pub fn field_name(self) -> &'static str {
        match self {
            ResourceKind::Task => "task_id",
            ResourceKind::Project => "project_id",
        }
    }

    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "TSK" => Some(ResourceKind::Task),
            "PRO" => Some(ResourceKind::Project),
            _ => None,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Task => f.write_str("task"),
            ResourceKind::Project => f.write_str("project"),
        }
    }
}

/// A validated reference to a task or project.
///
/// Only `parse` builds one, so `kind` always agrees with the prefix of
/// `identifier`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceReference {
    kind: ResourceKind,
    identifier: String,
}

impl ResourceReference {
    pub fn parse(raw: &str) -> Result<Self, CommentError> {
        let kind = RESOURCE_ID_RE
            .captures(raw)
            .and_then(|caps| caps.get(1))
            .and_then(|prefix| ResourceKind::from_prefix(prefix.as_str()))
            .ok_or_else(|| CommentError::Validation(INVALID_RESOURCE_ID.to_string()))?;

        Ok(Self {
            kind,
            identifier: raw.to_string(),
        })
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl FromStr for ResourceReference {
    type Err = CommentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ResourceReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.identifier)
    }
}
