use crate::{
    Error, Result,
    config::InferenceConfig,
    inference::{HuggingFaceClient, InferenceClient},
    prompt::build_prompt,
};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Turns submitted source code into generated test cases.
#[derive(Clone)]
pub struct TestGenerator {
    client: Arc<dyn InferenceClient>,
}

impl TestGenerator {
    pub fn new(config: InferenceConfig) -> Result<Self> {
        if config.api_token.is_empty() {
            warn!("No inference API token configured; upstream calls will be unauthenticated");
        }

        let client = HuggingFaceClient::new(config)?;
        info!("Inference client targeting {}", client.url());

        Ok(Self::with_client(Arc::new(client)))
    }

    pub fn with_client(client: Arc<dyn InferenceClient>) -> Self {
        Self { client }
    }

    /// Validates `code`, prompts the upstream once and returns its text.
    ///
    /// Fails with [`Error::MissingInput`] for absent or empty code and with
    /// [`Error::UpstreamModel`] when the upstream reports an error; every
    /// other failure surfaces as one of the internal variants.
    pub async fn generate(&self, code: Option<&str>) -> Result<String> {
        let code = match code {
            Some(code) if !code.is_empty() => code,
            _ => return Err(Error::MissingInput),
        };

        let prompt = build_prompt(code);

        match self.client.generate(&prompt).await {
            Ok(tests) => {
                info!("Generated {} bytes of test cases", tests.len());
                Ok(tests)
            }
            Err(e) => {
                error!("Error in test generation: {}", e);
                Err(e)
            }
        }
    }
}
