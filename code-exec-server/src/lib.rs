use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use code_exec::{CodeExecutor, ExecutionRequest, ExecutionResult, LanguageDescriptor};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::{net::SocketAddr, sync::Arc};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("Server error: {0}")]
    ServerError(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ServerError::UnsupportedLanguage(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ServerError::ServerError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ExecuteRequest {
    pub language: String,
    pub code: String,
    pub input: Option<String>,
}

impl From<ExecuteRequest> for ExecutionRequest {
    fn from(payload: ExecuteRequest) -> Self {
        ExecutionRequest::new(payload.language, payload.code)
            .with_input(payload.input.unwrap_or_default())
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguageInfo {
    pub id: String,
    pub version: String,
    pub extension: String,
}

impl From<&LanguageDescriptor> for LanguageInfo {
    fn from(descriptor: &LanguageDescriptor) -> Self {
        Self {
            id: descriptor.canonical_id.to_string(),
            version: descriptor.version_or_latest().to_string(),
            extension: descriptor.file_extension.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemplateResponse {
    pub language: String,
    pub code: String,
}

#[derive(Clone)]
pub struct AppState {
    executor: Arc<CodeExecutor>,
}

pub fn create_app(executor: CodeExecutor) -> Router {
    let state = AppState {
        executor: Arc::new(executor),
    };

    let cors = CorsLayer::permissive();

    Router::new()
        .route("/health", get(health_check))
        .route("/languages", get(list_languages))
        .route("/languages/:id", get(get_language))
        .route("/languages/:id/template", get(get_template))
        .route("/execute", post(execute))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), ServerError> {
    info!("Starting code execution server on {}", addr);
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::ServerError(e.to_string()))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::ServerError(e.to_string()))?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}

async fn list_languages() -> Json<Vec<LanguageInfo>> {
    Json(code_exec::LANGUAGES.iter().map(LanguageInfo::from).collect())
}

async fn get_language(Path(id): Path<String>) -> Result<Json<LanguageInfo>, ServerError> {
    code_exec::lookup(&id)
        .map(|descriptor| Json(LanguageInfo::from(descriptor)))
        .ok_or(ServerError::UnsupportedLanguage(id))
}

async fn get_template(Path(id): Path<String>) -> Result<Json<TemplateResponse>, ServerError> {
    let code = code_exec::starter_template(&id)
        .ok_or_else(|| ServerError::UnsupportedLanguage(id.clone()))?;

    Ok(Json(TemplateResponse {
        language: id,
        code: code.to_string(),
    }))
}

/// Always answers 200: failed runs are reported inside the result body
async fn execute(
    State(state): State<AppState>,
    Json(payload): Json<ExecuteRequest>,
) -> Json<ExecutionResult> {
    let request = ExecutionRequest::from(payload);
    Json(state.executor.execute(&request).await)
}
