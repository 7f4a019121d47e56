use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::{
    client::RemoteClient,
    config::ExecutorConfig,
    diagnostics,
    error::Error,
    languages::{self, LanguageDescriptor},
    types::{ExecutionRequest, ExecutionResult, RemoteFile, RemoteRequest, RemoteResponse},
};

const NO_OUTPUT: &str = "Program executed successfully (no output)";
const UNKNOWN_COMPILATION_ERROR: &str = "Unknown compilation error";

/// Stateless front for the remote execution service.
///
/// Cloning is cheap and clones share one connection pool, so a single
/// executor can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct CodeExecutor {
    client: RemoteClient,
    config: ExecutorConfig,
}

impl CodeExecutor {
    pub fn new(config: ExecutorConfig) -> Result<Self, Error> {
        let client = RemoteClient::new(&config)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Runs `request` remotely. Every failure is reported in the returned
    /// result rather than as an error.
    pub async fn execute(&self, request: &ExecutionRequest) -> ExecutionResult {
        self.dispatch(&request.language, &request.code, &request.input)
            .await
    }

    pub async fn dispatch(&self, language: &str, code: &str, input: &str) -> ExecutionResult {
        let Some(descriptor) = languages::lookup(language) else {
            debug!("Rejecting unsupported language {:?}", language);
            let err = Error::UnsupportedLanguage(language.to_string());
            return ExecutionResult::failure(
                err.to_string(),
                Duration::ZERO,
                err.memory_placeholder(),
            );
        };

        let payload = self.build_request(descriptor, code, input);
        debug!(
            language = descriptor.canonical_id,
            code_bytes = payload.files[0].content.len(),
            stdin_bytes = payload.stdin.len(),
            "Dispatching execution"
        );

        let (outcome, elapsed) = self.run_remote(&payload).await;
        match outcome {
            Ok(output) => {
                info!(
                    language = descriptor.canonical_id,
                    ?elapsed,
                    "Execution succeeded"
                );
                ExecutionResult::success(output, elapsed)
            }
            Err(err) => {
                match &err {
                    Error::Compilation(_) | Error::Runtime(_) => {
                        info!(language = descriptor.canonical_id, ?elapsed, "Execution failed");
                    }
                    other => {
                        warn!(
                            language = descriptor.canonical_id,
                            "Execution service unavailable: {:?}", other
                        );
                    }
                }
                ExecutionResult::failure(err.to_string(), elapsed, err.memory_placeholder())
            }
        }
    }

    fn build_request(
        &self,
        descriptor: &LanguageDescriptor,
        code: &str,
        input: &str,
    ) -> RemoteRequest {
        let (content, stdin) = descriptor.normalize(code, input);

        RemoteRequest {
            language: descriptor.remote_id.to_string(),
            version: descriptor.version_or_latest().to_string(),
            files: vec![RemoteFile {
                name: descriptor.file_name(),
                content,
            }],
            stdin,
            compile_timeout: self.config.compile_timeout_ms,
            run_timeout: self.config.run_timeout_ms,
            compile_memory_limit: -1,
            run_memory_limit: -1,
        }
    }

    /// Returns the program output, or the failure, together with the time
    /// spent waiting for the response headers.
    async fn run_remote(&self, payload: &RemoteRequest) -> (Result<String, Error>, Duration) {
        let start = Instant::now();
        let response = match self.client.submit(payload).await {
            Ok(response) => response,
            Err(err) => return (Err(err), Duration::ZERO),
        };
        let elapsed = start.elapsed();

        let status = response.status();
        if !status.is_success() {
            let err = Error::RemoteStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            };
            return (Err(err), elapsed);
        }

        let outcome = match response.json::<RemoteResponse>().await {
            Ok(body) => interpret(body),
            Err(err) => Err(Error::Decode(err)),
        };
        (outcome, elapsed)
    }
}

/// Maps a decoded remote response onto program output or a failure.
fn interpret(response: RemoteResponse) -> Result<String, Error> {
    if let Some(compile) = response.compile.filter(|c| !c.succeeded()) {
        let diagnostic = compile.diagnostic().unwrap_or(UNKNOWN_COMPILATION_ERROR);
        return Err(Error::Compilation(diagnostic.to_string()));
    }

    let run = response.run;
    if run.succeeded() {
        return Ok(run.printed().unwrap_or(NO_OUTPUT).to_string());
    }

    let message = match (run.diagnostic(), run.code, &run.signal) {
        (Some(text), _, _) => text.to_string(),
        (None, Some(code), _) => format!("Process exited with code {}", code),
        (None, None, Some(signal)) => format!("Process terminated by signal {}", signal),
        (None, None, None) => "Process exited without a status code".to_string(),
    };
    Err(Error::Runtime(diagnostics::enrich(&message)))
}
