//! Google Gemini `generateContent` client for image critiques.
//!
//! Authentication is a plain API key, resolved from the explicit value, then
//! `GEMINI_API_KEY`, then `GOOGLE_API_KEY`.

use super::gemini_types::{
    Content, GeminiInlineData, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    Part,
};
use super::scrub::{api_error, sanitize_api_error};
use super::traits::{AnalysisRequest, Provider};
use crate::error::LlmError;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

pub const PROVIDER_NAME: &str = "gemini";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Text used when the model answers with no text at all.
pub const EMPTY_ANALYSIS_FALLBACK: &str = "No se pudo generar el análisis.";

pub struct GeminiProvider {
    api_key: Option<String>,
    base_url: String,
    client: Client,
}

impl GeminiProvider {
    pub fn new(api_key: Option<&str>) -> Self {
        let resolved_key = api_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(String::from)
            .or_else(|| non_empty_env("GEMINI_API_KEY"))
            .or_else(|| non_empty_env("GOOGLE_API_KEY"));

        Self {
            api_key: resolved_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            client: super::build_provider_client(),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Whether a key was resolved from config or the environment.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn build_request(request: &AnalysisRequest<'_>) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![
                    Part::text(request.prompt.to_string()),
                    Part::inline_data(GeminiInlineData {
                        mime_type: request.image.mime_type.clone(),
                        data: request.image.data_base64.clone(),
                    }),
                ],
            }],
            generation_config: GenerationConfig {
                temperature: request.temperature,
            },
        }
    }

    fn model_name(model: &str) -> String {
        if model.starts_with("models/") {
            model.to_string()
        } else {
            format!("models/{model}")
        }
    }

    /// Text parts of the first candidate, joined; `None` when there is no text.
    fn extract_text(result: &GenerateContentResponse) -> Option<String> {
        let text = result
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Why generation stopped for the first candidate (`STOP`, `SAFETY`, ...).
    fn finish_reason(result: &GenerateContentResponse) -> Option<&str> {
        result
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|candidate| candidate.finish_reason.as_deref())
    }

    async fn call_api(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LlmError> {
        let api_key = self.api_key.as_ref().ok_or_else(|| LlmError::MissingApiKey {
            provider: PROVIDER_NAME.to_string(),
        })?;

        let url = format!(
            "{}/v1beta/{}:generateContent",
            self.base_url,
            Self::model_name(model)
        );
        debug!(%url, model, "sending gemini analysis request");

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(request)
            .send()
            .await
            .map_err(request_error)?;

        if !response.status().is_success() {
            return Err(api_error(PROVIDER_NAME, response).await);
        }

        let result: GenerateContentResponse = response.json().await.map_err(request_error)?;

        if let Some(err) = result.error.as_ref() {
            return Err(LlmError::Request {
                provider: PROVIDER_NAME.to_string(),
                message: sanitize_api_error(&err.message),
            });
        }

        if let Some(usage) = result.usage_metadata.as_ref() {
            debug!(
                model_version = result.model_version.as_deref().unwrap_or(model),
                input_tokens = usage.prompt_token_count,
                output_tokens = usage.candidates_token_count,
                "gemini analysis complete"
            );
        }

        Ok(result)
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn request_error(error: reqwest::Error) -> LlmError {
    LlmError::Request {
        provider: PROVIDER_NAME.to_string(),
        message: sanitize_api_error(&error.without_url().to_string()),
    }
}

#[async_trait]
impl Provider for GeminiProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn analyze_image(&self, request: &AnalysisRequest<'_>) -> Result<String, LlmError> {
        let body = Self::build_request(request);
        let result = self.call_api(request.model, &body).await?;
        Ok(Self::extract_text(&result).unwrap_or_else(|| {
            warn!(
                finish_reason = Self::finish_reason(&result).unwrap_or("unknown"),
                "gemini returned no analysis text"
            );
            EMPTY_ANALYSIS_FALLBACK.to_string()
        }))
    }
}
