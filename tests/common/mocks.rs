use async_trait::async_trait;
use testgen_proxy::{Error, Result, inference::InferenceClient};
use std::sync::{Arc, Mutex};

/// What the mock upstream answers with.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Text(String),
    ModelError(String),
    Internal(String),
}

/// Mock inference client for testing
#[derive(Debug, Clone)]
pub struct MockInferenceClient {
    pub outcome: MockOutcome,
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl MockInferenceClient {
    pub fn new() -> Self {
        Self::with_text("case1...case10")
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            outcome: MockOutcome::Text(text.into()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_model_error(detail: impl Into<String>) -> Self {
        Self {
            outcome: MockOutcome::ModelError(detail.into()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_internal_error(detail: impl Into<String>) -> Self {
        Self {
            outcome: MockOutcome::Internal(detail.into()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceClient for MockInferenceClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        match &self.outcome {
            MockOutcome::Text(text) => Ok(text.clone()),
            MockOutcome::ModelError(detail) => Err(Error::upstream_model(detail.clone())),
            MockOutcome::Internal(detail) => Err(Error::internal(detail.clone())),
        }
    }
}

impl Default for MockInferenceClient {
    fn default() -> Self {
        Self::new()
    }
}
