use async_trait::async_trait;

/// Image payload forwarded to a multimodal generator.
#[derive(Debug, Clone)]
pub struct ImageInput<'a> {
    pub data: &'a [u8],
    pub mime_type: &'a str,
}

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError>;

    async fn describe_image(
        &self,
        image: ImageInput<'_>,
        prompt: &str,
    ) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("client configuration invalid: {0}")]
    Configuration(String),
}
