use crate::error::LlmError;
use crate::media::ImageAttachment;
use async_trait::async_trait;

/// One image-plus-prompt analysis call.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisRequest<'a> {
    pub prompt: &'a str,
    pub image: &'a ImageAttachment,
    pub model: &'a str,
    pub temperature: f64,
}

/// A multimodal model that critiques an image against a text prompt.
///
/// The returned text is untrusted free-form markdown; callers must not assume
/// any particular line is present.
#[async_trait]
pub trait Provider: Send + Sync {
    fn name(&self) -> &str;

    async fn analyze_image(&self, request: &AnalysisRequest<'_>) -> Result<String, LlmError>;
}
