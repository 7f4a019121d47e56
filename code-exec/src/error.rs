use thiserror::Error;

/// Failure modes of a dispatch.
///
/// The `Display` text of each per-call variant is exactly what callers see in
/// [`ExecutionResult::error`](crate::ExecutionResult::error).
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Remote service error {status}: {reason}")]
    RemoteStatus { status: u16, reason: String },

    #[error("Network error: Failed to connect to execution service")]
    Network(#[source] reqwest::Error),

    #[error("Network error: Failed to parse response from execution service")]
    Decode(#[source] reqwest::Error),

    #[error("Compilation Error:\n{0}")]
    Compilation(String),

    #[error("{0}")]
    Runtime(String),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl Error {
    /// Placeholder reported in `ExecutionResult::memory` for this failure.
    pub(crate) fn memory_placeholder(&self) -> &'static str {
        match self {
            Error::Runtime(_) => "N/A",
            _ => "0KB",
        }
    }
}
