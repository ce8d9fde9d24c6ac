use super::{
    types::{Content, ErrorEnvelope, GenerateContentRequest, GenerateContentResponse, Part},
    InferenceProvider,
};
use crate::{config::ProviderConfig, diagnosis::DiagnosisRequest, Error, Result};
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use tracing::{debug, info};

const LOGGED_BODY_CHARS: usize = 500;

/// Client for the Google Gemini `generateContent` REST endpoint.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn payload(request: &DiagnosisRequest) -> GenerateContentRequest {
        let image_base64 = general_purpose::STANDARD.encode(&request.image.bytes);

        GenerateContentRequest {
            system_instruction: Some(Content {
                role: None,
                parts: vec![Part::text(request.system_instruction)],
            }),
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![
                    Part::text(request.instruction),
                    Part::inline(request.image.mime_type, image_base64),
                    Part::text(request.symptoms.clone()),
                ],
            }],
        }
    }
}

#[async_trait]
impl InferenceProvider for GeminiClient {
    async fn generate(&self, request: &DiagnosisRequest) -> Result<Option<String>> {
        let payload = Self::payload(request);

        info!("Sending request to Google Gemini model {}", self.model);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", self.api_key.as_str())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        debug!(
            "Gemini replied with status {}: {}",
            status,
            body.chars().take(LOGGED_BODY_CHARS).collect::<String>()
        );

        if !status.is_success() {
            let message = match serde_json::from_str::<ErrorEnvelope>(&body) {
                Ok(envelope) => envelope.error.message,
                Err(_) => body,
            };
            return Err(Error::provider(status.as_u16(), message));
        }

        let reply: GenerateContentResponse = serde_json::from_str(&body)?;

        let text = reply.text();
        if text.is_none() {
            if let Some(reason) = reply.block_reason().or_else(|| reply.stop_reason()) {
                return Err(Error::Blocked(reason.to_string()));
            }
        }

        Ok(text)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
