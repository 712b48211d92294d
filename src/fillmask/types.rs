use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Marker a user places where the model should predict a token.
pub const MASK_TOKEN: &str = "[MASK]";

#[derive(Debug, Clone, Deserialize)]
pub struct FillMaskRequest {
    pub text: String,
}

impl FillMaskRequest {
    /// Pre-dispatch check; without the marker there is nothing for the model
    /// to fill in and no HTTP request is made.
    pub fn validate(&self) -> Result<()> {
        if !self.text.contains(MASK_TOKEN) {
            return Err(Error::validation(
                "Please include a [MASK] token in your text.",
            ));
        }
        Ok(())
    }
}

/// KServe v1 batch-input shape. This client always sends exactly one
/// instance per call.
#[derive(Debug, Serialize)]
pub struct PredictRequest {
    pub instances: Vec<String>,
}

impl From<&FillMaskRequest> for PredictRequest {
    fn from(request: &FillMaskRequest) -> Self {
        Self {
            instances: vec![request.text.clone()],
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PredictResponse {
    /// Absent and empty mean the same thing to the caller: no predictions.
    #[serde(default)]
    pub predictions: Vec<String>,
}
