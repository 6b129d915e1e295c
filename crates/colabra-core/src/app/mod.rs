//! App - application layer
//!
//! Wires the ports together into a single comment submission.
//!
//! # Components
//! - **ApiConfig / ActionInputs**: endpoint settings and step inputs
//! - **CommentClient**: builds the request and interprets the response
//! - **run_action**: the orchestrator with the single failure boundary

pub mod config;
pub mod client;
pub mod runner;

pub use self::config::{ActionInputs, ApiConfig};
pub use self::client::CommentClient;
pub use self::runner::{RunOutcome, run_action};
