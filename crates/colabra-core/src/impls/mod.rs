//! Impls - adapters for the ports
//!
//! # Included
//! - **ReqwestTransport**: production `HttpTransport`
//! - **ActionsHost**: GitHub Actions `PipelineHost` (env inputs, workflow commands)
//! - **RecordingHost / StubTransport**: in-memory doubles for tests

pub mod reqwest_http;
pub mod actions_host;
pub mod recording;

pub use self::reqwest_http::ReqwestTransport;
pub use self::actions_host::ActionsHost;
pub use self::recording::{RecordingHost, StubTransport};
