use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceRequest {
    pub inputs: String,
}

/// One entry of a successful text-generation reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Generation {
    pub generated_text: String,
}
