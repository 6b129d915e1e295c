//! run_action - one comment submission, start to finish.
//!
//! read inputs → classify resource → POST → report output or failure.
//! Nothing escapes: every error becomes exactly one `set_failed` call.

use tracing::warn;

use crate::app::client::CommentClient;
use crate::app::config::{ActionInputs, ApiConfig};
use crate::domain::errors::{CommentError, ErrorKind};
use crate::domain::resource::ResourceReference;
use crate::ports::{HttpTransport, PipelineHost};

pub const COMMENT_ID_OUTPUT: &str = "comment_id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Posted { comment_id: String },
    Failed { kind: ErrorKind, message: String },
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Posted { .. })
    }
}

pub async fn run_action<H, T>(host: &mut H, transport: &T, config: &ApiConfig) -> RunOutcome
where
    H: PipelineHost + ?Sized,
    T: HttpTransport + ?Sized,
{
    match submit(host, transport, config).await {
        Ok(comment_id) => RunOutcome::Posted { comment_id },
        Err(err) => {
            let kind = err.kind();
            let message = err.to_string();
            if kind == ErrorKind::Unexpected {
                warn!(error = %message, "comment submission failed unexpectedly");
            }
            host.set_failed(&message);
            RunOutcome::Failed { kind, message }
        }
    }
}

async fn submit<H, T>(host: &mut H, transport: &T, config: &ApiConfig) -> Result<String, CommentError>
where
    H: PipelineHost + ?Sized,
    T: HttpTransport + ?Sized,
{
    let inputs = ActionInputs::from_host(&*host)?;
    let resource = ResourceReference::parse(&inputs.resource_id)?;

    let client = CommentClient::new(transport, config, &inputs.api_key);

    host.debug(&format!("Creating comment on {resource}"));
    let comment = client.create_comment(&resource, &inputs.body_text).await?;
    host.debug("Comment created successfully");

    host.set_output(COMMENT_ID_OUTPUT, &comment.id)?;
    host.info(&format!(
        "Successfully posted comment {} to {resource}",
        comment.id
    ));

    Ok(comment.id)
}
