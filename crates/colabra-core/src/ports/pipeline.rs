//! PipelineHost port - the CI step's input/output/logging surface.

use crate::domain::errors::CommentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputOptions {
    /// Missing or empty values fail with `CommentError::MissingInput`.
    pub required: bool,
    pub trim_whitespace: bool,
}

impl InputOptions {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            required: false,
            trim_whitespace: true,
        }
    }
}

/// PipelineHost is the CI runner as seen from one step.
///
/// Logging and failure reporting cannot fail from the caller's point of view;
/// implementations deal with their own write errors.
pub trait PipelineHost {
    fn get_input(&self, name: &str, options: InputOptions) -> Result<String, CommentError>;

    fn set_output(&mut self, name: &str, value: &str) -> Result<(), CommentError>;

    fn set_failed(&mut self, message: &str);

    fn info(&mut self, message: &str);

    fn debug(&mut self, message: &str);
}
