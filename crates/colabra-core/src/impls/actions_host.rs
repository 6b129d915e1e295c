//! ActionsHost - `PipelineHost` for GitHub Actions runners.
//!
//! Inputs arrive as `INPUT_<NAME>` environment variables. Outputs go to the
//! file named by `GITHUB_OUTPUT`; everything else is a workflow command
//! (`::error::`, `::debug::`) or a plain line on stdout.

use std::collections::HashMap;
use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::{self, Write};

use tracing::warn;
use ulid::Ulid;

use crate::domain::errors::CommentError;
use crate::ports::{InputOptions, PipelineHost};

pub const GITHUB_OUTPUT: &str = "GITHUB_OUTPUT";

pub struct ActionsHost<W> {
    env: HashMap<String, String>,
    out: W,
    failed: bool,
}

impl ActionsHost<io::Stdout> {
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn from_env() -> Self {
        Self::new(utf8_vars(std::env::vars_os()), io::stdout())
    }
}

fn utf8_vars(
    vars: impl IntoIterator<Item = (OsString, OsString)>,
) -> impl Iterator<Item = (String, String)> {
    vars.into_iter()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
}

impl<W: Write> ActionsHost<W> {
    pub fn new(env: impl IntoIterator<Item = (String, String)>, out: W) -> Self {
        Self {
            env: env.into_iter().collect(),
            out,
            failed: false,
        }
    }

    /// Whether `set_failed` was called; the process should exit non-zero.
    pub fn failed(&self) -> bool {
        self.failed
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) {
        if let Err(err) = writeln!(self.out, "{line}").and_then(|()| self.out.flush()) {
            warn!(error = %err, "failed to write to runner stdout");
        }
    }

    fn issue_command(&mut self, command: &str, properties: &[(&str, &str)], message: &str) {
        let mut line = format!("::{command}");
        if !properties.is_empty() {
            let props: Vec<String> = properties
                .iter()
                .map(|(key, value)| format!("{key}={}", escape_property(value)))
                .collect();
            line.push(' ');
            line.push_str(&props.join(","));
        }
        line.push_str("::");
        line.push_str(&escape_data(message));
        self.write_line(&line);
    }

    fn append_file_command(&self, path: &str, name: &str, value: &str) -> Result<(), CommentError> {
        let delimiter = format!("ghadelimiter_{}", Ulid::new());
        if name.contains(&delimiter) || value.contains(&delimiter) {
            return Err(CommentError::unexpected(format!(
                "Unexpected input: output {name} contains the delimiter {delimiter}"
            )));
        }

        let mut file = OpenOptions::new().append(true).create(true).open(path)?;
        write!(file, "{name}<<{delimiter}\n{value}\n{delimiter}\n")?;
        Ok(())
    }
}

impl<W: Write> PipelineHost for ActionsHost<W> {
    fn get_input(&self, name: &str, options: InputOptions) -> Result<String, CommentError> {
        let key = format!("INPUT_{}", name.replace(' ', "_").to_uppercase());
        let raw = self.env.get(&key).map(String::as_str).unwrap_or_default();

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
        match self.env.get(GITHUB_OUTPUT).filter(|path| !path.is_empty()) {
            Some(path) => self.append_file_command(path, name, value),
            None => {
                self.write_line("");
                self.issue_command("set-output", &[("name", name)], value);
                Ok(())
            }
        }
    }

    fn set_failed(&mut self, message: &str) {
        self.failed = true;
        self.issue_command("error", &[], message);
    }

    fn info(&mut self, message: &str) {
        self.write_line(message);
    }

    fn debug(&mut self, message: &str) {
        self.issue_command("debug", &[], message);
    }
}

fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
