use axum::{Router, body::Body, http::Request, response::Response};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use testgen_proxy::{
    Result,
    config::{Config, InferenceConfig},
    generator::TestGenerator,
    inference::InferenceClient,
    server::{self, handlers::AppState},
};
use tokio::fs;

pub const ADD_FN: &str = "def add(a,b): return a+b";

pub const TEST_TOKEN: &str = "hf_test_token";

/// Create a test configuration pointing at the given upstream URL
pub fn create_test_config(url: &str) -> Config {
    let mut config = Config::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.logs.level = "debug".to_string();
    config.inference = InferenceConfig {
        url: url.to_string(),
        api_token: TEST_TOKEN.to_string(),
    };
    config
}

/// Build the full router around an arbitrary inference client
pub fn create_test_app(client: Arc<dyn InferenceClient>) -> Router {
    let state = AppState {
        generator: TestGenerator::with_client(client),
    };
    server::router(state, true)
}

/// Build the router around a real HTTP client for `config`
pub fn create_http_app(config: &Config) -> Router {
    let generator = TestGenerator::new(config.inference.clone()).unwrap();
    server::router(AppState { generator }, config.server.cors)
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn read_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// An address nothing is listening on
pub fn unused_local_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/models/unreachable", addr)
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8080
  cors: false
  logs:
    level: "debug"

inference:
  url: "http://localhost:9999/models/test"
  api_token: "hf_from_file"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: "not-a-number"
"#;
