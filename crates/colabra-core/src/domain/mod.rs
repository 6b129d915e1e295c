//! Domain model (resource identifiers, comment payloads, errors).

pub mod resource;
pub mod comment;
pub mod errors;

pub use self::resource::{ResourceKind, ResourceReference};
pub use self::comment::{CommentPayload, CommentResult, ErrorDetail, ErrorEnvelope};
pub use self::errors::{ApiFailure, CommentError, ErrorKind};
