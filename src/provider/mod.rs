mod gemini;
pub mod types;

pub use gemini::GeminiClient;

use crate::{diagnosis::DiagnosisRequest, Result};
use async_trait::async_trait;

/// A multimodal model that turns a [`DiagnosisRequest`] into text.
#[async_trait]
pub trait InferenceProvider: Send + Sync {
    /// `Ok(None)` means the call succeeded but produced no text.
    async fn generate(&self, request: &DiagnosisRequest) -> Result<Option<String>>;

    fn model(&self) -> &str;
}
