//! In-memory doubles for `PipelineHost` and `HttpTransport`.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::errors::CommentError;
use crate::ports::{HttpRequest, HttpResponse, HttpTransport, InputOptions, PipelineHost};

/// RecordingHost keeps inputs in a map and records everything the step emits.
#[derive(Debug, Default)]
pub struct RecordingHost {
    inputs: HashMap<String, String>,
    outputs: Vec<(String, String)>,
    failures: Vec<String>,
    infos: Vec<String>,
    debugs: Vec<String>,
    output_error: Option<String>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inputs<K, V>(inputs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            inputs: inputs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            ..Self::default()
        }
    }

    /// Make every `set_output` fail with `message`.
    pub fn failing_outputs(mut self, message: impl Into<String>) -> Self {
        self.output_error = Some(message.into());
        self
    }

    pub fn output(&self, name: &str) -> Option<&str> {
        self.outputs
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn outputs(&self) -> &[(String, String)] {
        &self.outputs
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    pub fn infos(&self) -> &[String] {
        &self.infos
    }

    pub fn debugs(&self) -> &[String] {
        &self.debugs
    }
}

impl PipelineHost for RecordingHost {
    fn get_input(&self, name: &str, options: InputOptions) -> Result<String, CommentError> {
        let raw = self.inputs.get(name).map(String::as_str).unwrap_or_default();
        if options.required && raw.is_empty() {
            return Err(CommentError::MissingInput(name.to_string()));
        }
        if options.trim_whitespace {
            Ok(raw.trim().to_string())
        } else {
            Ok(raw.to_string())
        }
    }

    fn set_output(&mut self, name: &str, value: &str) -> Result<(), CommentError> {
        if let Some(message) = &self.output_error {
            return Err(CommentError::Unexpected(message.clone()));
        }
        self.outputs.push((name.to_string(), value.to_string()));
        Ok(())
    }

    fn set_failed(&mut self, message: &str) {
        self.failures.push(message.to_string());
    }

    fn info(&mut self, message: &str) {
        self.infos.push(message.to_string());
    }

    fn debug(&mut self, message: &str) {
        self.debugs.push(message.to_string());
    }
}

/// StubTransport replays canned responses in order and records every request.
///
/// Running out of canned responses is itself a transport failure, so a test
/// that expects no network call can construct it empty.
#[derive(Debug, Default)]
pub struct StubTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, String>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: impl Into<String>) -> Self {
        self.push(Ok(HttpResponse::new(status, body)))
    }

    /// Queue a failure where no response arrives.
    pub fn fail(self, message: impl Into<String>) -> Self {
        self.push(Err(message.into()))
    }

    fn push(self, response: Result<HttpResponse, String>) -> Self {
        lock(&self.responses).push_back(response);
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        lock(&self.requests).clone()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn post_json(&self, request: HttpRequest) -> Result<HttpResponse, CommentError> {
        lock(&self.requests).push(request);
        match lock(&self.responses).pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(CommentError::Unexpected(message)),
            None => Err(CommentError::unexpected("no stub response queued")),
        }
    }
}
