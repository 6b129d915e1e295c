//! Ports - seams to the outside world
//!
//! The orchestrator only talks to the network and to the CI host through
//! these traits. Production adapters and in-memory doubles live in `impls`.

pub mod http;
pub mod pipeline;

pub use self::http::{HttpRequest, HttpResponse, HttpTransport};
pub use self::pipeline::{InputOptions, PipelineHost};
