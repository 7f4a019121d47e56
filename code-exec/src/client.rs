use reqwest::{Client, Response, Url};
use tracing::debug;

use crate::{config::ExecutorConfig, error::Error, types::RemoteRequest};

/// HTTP client for the remote execution service
#[derive(Debug, Clone)]
pub struct RemoteClient {
    client: Client,
    endpoint: Url,
}

impl RemoteClient {
    pub fn new(config: &ExecutorConfig) -> Result<Self, Error> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|e| Error::Configuration(format!("endpoint {}: {}", config.endpoint, e)))?;

        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(Error::HttpClient)?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Posts the job and returns as soon as response headers arrive; the body
    /// is left unread.
    pub async fn submit(&self, request: &RemoteRequest) -> Result<Response, Error> {
        debug!(
            language = %request.language,
            version = %request.version,
            "Submitting job to {}",
            self.endpoint
        );

        self.client
            .post(self.endpoint.clone())
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(Error::Network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RemoteFile;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> RemoteRequest {
        RemoteRequest {
            language: "python".to_string(),
            version: "3.10.0".to_string(),
            files: vec![RemoteFile {
                name: "main.py".to_string(),
                content: "print(1)".to_string(),
            }],
            stdin: String::new(),
            compile_timeout: 10_000,
            run_timeout: 5_000,
            compile_memory_limit: -1,
            run_memory_limit: -1,
        }
    }

    #[tokio::test]
    async fn test_submit_sends_json_with_user_agent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v2/execute"))
            .and(header("Content-Type", "application/json"))
            .and(header("User-Agent", "SnipShare/1.0"))
            .and(body_json(json!({
                "language": "python",
                "version": "3.10.0",
                "files": [{ "name": "main.py", "content": "print(1)" }],
                "stdin": "",
                "compile_timeout": 10000,
                "run_timeout": 5000,
                "compile_memory_limit": -1,
                "run_memory_limit": -1
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = ExecutorConfig::default()
            .with_endpoint(format!("{}/api/v2/execute", mock_server.uri()));
        let client = RemoteClient::new(&config).unwrap();
        let response = client.submit(&request()).await.unwrap();

        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn test_request_timeout_is_a_network_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&mock_server)
            .await;

        let config = ExecutorConfig::default()
            .with_endpoint(mock_server.uri())
            .with_request_timeout(Duration::from_millis(200));
        let client = RemoteClient::new(&config).unwrap();
        let result = client.submit(&request()).await;

        assert!(matches!(result, Err(Error::Network(_))));
    }

    #[test]
    fn test_invalid_endpoint() {
        let config = ExecutorConfig::default().with_endpoint("not a url");
        assert!(matches!(
            RemoteClient::new(&config),
            Err(Error::Configuration(_))
        ));
    }
}
