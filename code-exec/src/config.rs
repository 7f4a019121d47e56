use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://emkc.org/api/v2/piston/execute";
pub const DEFAULT_USER_AGENT: &str = "SnipShare/1.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutorConfig {
    /// Full URL of the remote execute endpoint
    pub endpoint: String,

    /// Sent as `User-Agent` on every request
    pub user_agent: String,

    /// Local bound on the whole HTTP exchange
    pub request_timeout: Duration,

    /// Compile-phase limit enforced by the remote service, in milliseconds
    pub compile_timeout_ms: u64,

    /// Run-phase limit enforced by the remote service, in milliseconds
    pub run_timeout_ms: u64,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: Duration::from_secs(20),
            compile_timeout_ms: 10_000,
            run_timeout_ms: 5_000,
        }
    }
}

impl ExecutorConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_phase_timeouts(mut self, compile_timeout_ms: u64, run_timeout_ms: u64) -> Self {
        self.compile_timeout_ms = compile_timeout_ms;
        self.run_timeout_ms = run_timeout_ms;
        self
    }
}
