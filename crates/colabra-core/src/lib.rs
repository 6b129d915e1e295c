//! colabra-core
//!
//! Posts a single comment to a Colabra task or project from a CI step.
//!
//! # Modules
//! - **domain**: resource identifiers, wire payloads, error taxonomy
//! - **ports**: seams to the outside world (`HttpTransport`, `PipelineHost`)
//! - **app**: configuration, the comment client and the `run_action` orchestrator
//! - **impls**: `reqwest` transport, GitHub Actions host, in-memory doubles

pub mod domain;
pub mod ports;
pub mod app;
pub mod impls;

pub use app::{ActionInputs, ApiConfig, RunOutcome, run_action};
pub use domain::{CommentError, ErrorKind, ResourceKind, ResourceReference};
