use crate::{CodeExecutor, ExecutorConfig};
use serde_json::Value;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const EXECUTE_PATH: &str = "/api/v2/piston/execute";

pub fn executor_for(mock_server: &MockServer) -> CodeExecutor {
    let config = ExecutorConfig::default()
        .with_endpoint(format!("{}{}", mock_server.uri(), EXECUTE_PATH))
        .with_request_timeout(Duration::from_secs(5));
    CodeExecutor::new(config).expect("executor for mock server")
}

/// Mounts a stub answering every execute call with `body`
pub async fn respond_with_json(mock_server: &MockServer, body: Value) {
    Mock::given(method("POST"))
        .and(path(EXECUTE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(mock_server)
        .await;
}

/// Body of the only request the stub received
pub async fn submitted_body(mock_server: &MockServer) -> Value {
    let requests = mock_server
        .received_requests()
        .await
        .expect("request recording enabled");
    assert_eq!(requests.len(), 1, "expected exactly one remote call");
    serde_json::from_slice(&requests[0].body).expect("json request body")
}

/// Exactly one of `output` and `error` is populated, consistent with `success`
pub fn assert_consistent(result: &crate::ExecutionResult) {
    assert_ne!(result.output.is_empty(), result.error.is_empty());
    assert_eq!(result.success, !result.output.is_empty());
    assert!(result.elapsed_time.ends_with("ms"));
    assert!(result.elapsed_time[..result.elapsed_time.len() - 2]
        .parse::<u128>()
        .is_ok());
}
