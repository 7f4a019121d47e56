use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// A single snippet submitted for execution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionRequest {
    /// Canonical language id, e.g. `python` or `cpp`
    pub language: String,
    /// Source code as typed by the user
    pub code: String,
    /// Standard input for the program
    #[serde(default)]
    pub input: String,
}

impl ExecutionRequest {
    pub fn new(language: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            code: code.into(),
            input: String::new(),
        }
    }

    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = input.into();
        self
    }
}

/// Normalized outcome of a dispatch.
///
/// Exactly one of `output` and `error` is non-empty, and `success` tells which.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    pub success: bool,
    pub output: String,
    pub error: String,
    /// Wall-clock time of the remote call, formatted as `<ms>ms`
    pub elapsed_time: String,
    /// Best-effort memory figure; the remote service does not report one
    pub memory: String,
}

impl ExecutionResult {
    pub(crate) fn success(output: String, elapsed: Duration) -> Self {
        Self {
            success: true,
            output,
            error: String::new(),
            elapsed_time: format_elapsed(elapsed),
            memory: "N/A".to_string(),
        }
    }

    pub(crate) fn failure(error: String, elapsed: Duration, memory: &str) -> Self {
        Self {
            success: false,
            output: String::new(),
            error,
            elapsed_time: format_elapsed(elapsed),
            memory: memory.to_string(),
        }
    }
}

impl fmt::Display for ExecutionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.success {
            write!(
                f,
                "Execution Successful\nTime: {}\nMemory: {}\n\n{}",
                self.elapsed_time, self.memory, self.output
            )
        } else {
            write!(f, "Execution Failed\n\n{}", self.error)
        }
    }
}

pub(crate) fn format_elapsed(elapsed: Duration) -> String {
    format!("{}ms", elapsed.as_millis())
}

/// Request body accepted by the remote execution service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteRequest {
    pub language: String,
    pub version: String,
    pub files: Vec<RemoteFile>,
    pub stdin: String,
    /// Compile-phase limit in milliseconds
    pub compile_timeout: u64,
    /// Run-phase limit in milliseconds
    pub run_timeout: u64,
    /// `-1` leaves memory enforcement to the remote service
    pub compile_memory_limit: i64,
    pub run_memory_limit: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteFile {
    pub name: String,
    pub content: String,
}

/// Response body returned by the remote execution service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteResponse {
    /// Only present for compiled languages
    #[serde(default)]
    pub compile: Option<PhaseReport>,
    pub run: PhaseReport,
}

/// Exit status and streams of one remote phase
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseReport {
    /// `None` when the process was killed before exiting
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub signal: Option<String>,
    #[serde(default)]
    pub stdout: String,
    #[serde(default)]
    pub stderr: String,
    /// stdout and stderr interleaved
    #[serde(default)]
    pub output: String,
}

impl PhaseReport {
    pub fn succeeded(&self) -> bool {
        self.code == Some(0)
    }

    /// stderr, falling back to the combined output
    pub(crate) fn diagnostic(&self) -> Option<&str> {
        first_non_empty(&[&self.stderr, &self.output])
    }

    /// stdout, falling back to the combined output
    pub(crate) fn printed(&self) -> Option<&str> {
        first_non_empty(&[&self.stdout, &self.output])
    }
}

fn first_non_empty<'a>(candidates: &[&'a String]) -> Option<&'a str> {
    candidates
        .iter()
        .copied()
        .find(|s| !s.is_empty())
        .map(String::as_str)
}
