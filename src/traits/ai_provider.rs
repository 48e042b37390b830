use async_trait::async_trait;
use crate::enums::detection_error::DetectionError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Single non-streaming completion; returns the assistant text.
    async fn chat(&self, system_prompt: String, user_prompts: Vec<String>) -> Result<String, DetectionError>;
}
