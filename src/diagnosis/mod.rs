pub mod prompt;
mod types;

pub use types::*;

use crate::{
    config::ProviderConfig,
    provider::{GeminiClient, InferenceProvider},
    Result,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Builds the provider request for one submission and classifies the reply.
///
/// Holds no per-request state, so a single instance serves every submission.
#[derive(Clone)]
pub struct Diagnoser {
    provider: Arc<dyn InferenceProvider>,
}

impl Diagnoser {
    pub fn new(provider: Arc<dyn InferenceProvider>) -> Self {
        Self { provider }
    }

    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        let client = GeminiClient::new(config)?;
        Ok(Self::new(Arc::new(client)))
    }

    pub fn model(&self) -> &str {
        self.provider.model()
    }

    // Decoding and re-encoding are CPU-bound; keep them off the async workers.
    async fn prepare(image: &UploadedImage, symptoms: &str) -> Result<DiagnosisRequest> {
        let upload = image.clone();
        let symptoms = symptoms.to_string();
        tokio::task::spawn_blocking(move || DiagnosisRequest::build(&upload, &symptoms)).await?
    }

    /// Runs one analysis. Every fault is folded into [`DiagnosisResult::Failure`].
    pub async fn analyze(&self, image: &UploadedImage, symptoms: &str) -> DiagnosisResult {
        let request = match Self::prepare(image, symptoms).await {
            Ok(request) => request,
            Err(e) => {
                warn!("Could not prepare '{}' for analysis: {}", image.file_name, e);
                return DiagnosisResult::from_fault(&e);
            }
        };

        debug!(
            "Prepared request for '{}' ({:?}, {} PNG bytes, prompt v{})",
            image.file_name,
            image.format,
            request.image.bytes.len(),
            prompt::PROMPT_VERSION
        );

        match self.provider.generate(&request).await {
            Ok(Some(text)) if !text.trim().is_empty() => {
                info!("Received diagnosis of {} characters", text.chars().count());
                DiagnosisResult::Success(text)
            }
            Ok(_) => {
                warn!("Provider returned no usable text");
                DiagnosisResult::EmptyResponse
            }
            Err(e) => {
                warn!("Provider call failed: {}", e);
                DiagnosisResult::from_fault(&e)
            }
        }
    }
}
