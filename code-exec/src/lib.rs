//! # Code Execution Dispatcher
//!
//! Submits code snippets to a remote sandboxed execution service and turns
//! whatever comes back into a uniform [`ExecutionResult`]. Nothing is ever
//! executed locally.
//!
//! ```rust,no_run
//! use code_exec::{CodeExecutor, ExecutorConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), code_exec::Error> {
//!     let executor = CodeExecutor::new(ExecutorConfig::default())?;
//!     let result = executor.dispatch("python", r#"print("Hello, World!")"#, "").await;
//!     println!("{}", result);
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod diagnostics;
mod error;
mod executor;
mod languages;
mod types;

#[cfg(test)]
mod tests;

pub use client::RemoteClient;
pub use config::{ExecutorConfig, DEFAULT_ENDPOINT, DEFAULT_USER_AGENT};
pub use diagnostics::{classify, enrich, RuntimeDiagnostic};
pub use error::Error;
pub use executor::CodeExecutor;
pub use languages::{
    is_supported, lookup, starter_template, supported_languages, LanguageDescriptor,
    Normalization, LANGUAGES,
};
pub use types::{
    ExecutionRequest, ExecutionResult, PhaseReport, RemoteFile, RemoteRequest, RemoteResponse,
};

/// Result type for dispatcher construction
pub type Result<T> = std::result::Result<T, Error>;
