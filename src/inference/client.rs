use super::types::*;
use crate::{Error, Result, config::InferenceConfig};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Sends `prompt` upstream and returns the first generated text.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Client for a hosted text-generation endpoint speaking the
/// `{"inputs": ...}` / `[{"generated_text": ...}]` contract.
pub struct HuggingFaceClient {
    client: reqwest::Client,
    url: String,
    api_token: String,
}

impl HuggingFaceClient {
    pub fn new(config: InferenceConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(Error::config("inference.url must not be empty"));
        }

        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            url: config.url,
            api_token: config.api_token,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl InferenceClient for HuggingFaceClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = InferenceRequest {
            inputs: prompt.to_string(),
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_token)
            .json(&request)
            .send()
            .await?;

        // The body decides the outcome; the status is only informational.
        let status = response.status();
        info!("Inference upstream status code: {}", status);

        let body = response.text().await?;
        debug!("Inference upstream raw response: {}", body);

        parse_inference_reply(&body)
    }
}

/// Classifies a raw upstream body into generated text or an error.
///
/// An object with an `error` key is a model error. Anything else must be a
/// non-empty array whose first element has a string `generated_text`.
pub fn parse_inference_reply(body: &str) -> Result<String> {
    let value: Value = serde_json::from_str(body)?;

    if let Some(error) = value.as_object().and_then(|obj| obj.get("error")) {
        let detail = match error {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        return Err(Error::UpstreamModel(detail));
    }

    let mut generations = match value {
        Value::Array(generations) => generations,
        other => {
            return Err(Error::internal(format!(
                "expected an array of generations, got: {}",
                other
            )));
        }
    };

    if generations.is_empty() {
        return Err(Error::internal("inference response contained no generations"));
    }

    // Only the first entry is used; later entries are never inspected.
    let first: Generation = serde_json::from_value(generations.swap_remove(0))?;

    Ok(first.generated_text)
}
