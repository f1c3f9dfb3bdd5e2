use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct GenerateTestsRequest {
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateTestsResponse {
    pub tests: String,
}

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub message: &'static str,
}
