use super::types::{GenerateTestsRequest, GenerateTestsResponse, PingResponse};
use crate::{Error, generator::TestGenerator};
use axum::{
    extract::{State, rejection::JsonRejection},
    response::Json,
};
use serde_json::Value;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub generator: TestGenerator,
}

pub async fn ping() -> Json<PingResponse> {
    info!("Received ping");
    Json(PingResponse { message: "pong" })
}

pub async fn generate_tests(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GenerateTestsResponse>, Error> {
    // Unreadable bodies fall into the generic internal bucket alongside
    // upstream failures.
    let Json(body) = payload.map_err(|rejection| {
        warn!("Rejected generate-tests body: {}", rejection.body_text());
        Error::internal(rejection.body_text())
    })?;

    info!("Received data: {}", body);

    let request = parse_request(body)?;

    let tests = state.generator.generate(request.code.as_deref()).await?;

    Ok(Json(GenerateTestsResponse { tests }))
}

/// Only a JSON object is a valid request; derived deserialization would
/// also accept a positional array.
fn parse_request(body: Value) -> Result<GenerateTestsRequest, Error> {
    if !body.is_object() {
        return Err(Error::internal(format!(
            "request body must be a JSON object, got: {}",
            body
        )));
    }

    Ok(serde_json::from_value(body)?)
}
