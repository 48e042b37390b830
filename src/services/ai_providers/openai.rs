use async_trait::async_trait;
use reqwest::Client;

use crate::enums::detection_error::DetectionError;
use crate::structs::ai::openai::openai_message::OpenAIMessage;
use crate::structs::ai::openai::openai_request::OpenAIRequest;
use crate::structs::config::ai_config::AiConfig;
use crate::traits::ai_provider::AiProvider;

#[derive(Clone)]
pub struct OpenAIProvider {
    api_key: String,
    base_url: String,
    client: Client,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl OpenAIProvider {
    pub fn new(api_key: String, config: &AiConfig) -> Self {
        Self {
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }

    fn get_openai_messages(&self, system_prompt: String, user_prompts: Vec<String>) -> Vec<OpenAIMessage> {
        let mut messages = Vec::new();

        if !system_prompt.is_empty() {
            messages.push(OpenAIMessage {
                role: "system".to_string(),
                content: system_prompt,
            });
        }

        for prompt in user_prompts {
            messages.push(OpenAIMessage {
                role: "user".to_string(),
                content: prompt,
            });
        }

        messages
    }

    fn get_request(&self, system_prompt: String, user_prompts: Vec<String>) -> OpenAIRequest {
        OpenAIRequest {
            model: self.model.clone(),
            messages: self.get_openai_messages(system_prompt, user_prompts),
            max_tokens: Some(self.max_tokens),
            temperature: Some(self.temperature),
            stream: false,
        }
    }

    async fn make_request(&self, url: String, request_body: OpenAIRequest) -> Result<reqwest::Response, DetectionError> {
        log::debug!("📦 Request model: {}", request_body.model);

        self.client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| DetectionError::Network(e.to_string()))
    }

    fn extract_content(json: &serde_json::Value) -> Result<String, DetectionError> {
        json.get("choices")
            .and_then(|choices| choices.as_array())
            .and_then(|choices| choices.first())
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .map(|content| content.to_string())
            .ok_or_else(|| DetectionError::Serialization("No content in response".to_string()))
    }
}

#[async_trait]
impl AiProvider for OpenAIProvider {
    async fn chat(&self, system_prompt: String, user_prompts: Vec<String>) -> Result<String, DetectionError> {
        let url = format!("{}/chat/completions", self.base_url);
        let request_body = self.get_request(system_prompt, user_prompts);

        let response = self.make_request(url, request_body).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(match status.as_u16() {
                401 => DetectionError::Authentication(error_text),
                429 => DetectionError::Api(format!("Rate limit exceeded: {}", error_text)),
                _ => DetectionError::Api(format!("HTTP {}: {}", status, error_text)),
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| DetectionError::Serialization(e.to_string()))?;

        Self::extract_content(&json)
    }
}
