//! LLM Query Client
//!
//! Chat-completions client for the correction-transfer prompts. The
//! capability is a trait so the comparator can be exercised against a
//! stub and so batching or caching can be layered in later without
//! touching the comparator contract.

use async_trait::async_trait;
use reqwest::Client;
use revisio_utils::{LlmConfig, RevisioError, RevisioResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Submit one prompt, receive one generated text.
#[async_trait]
pub trait QueryLlm: Send + Sync {
    async fn query(&self, prompt: &str) -> RevisioResult<String>;
}

/// OpenAI-compatible chat-completions client.
pub struct OpenAiClient {
    client: Client,
    config: LlmConfig,
}

impl OpenAiClient {
    pub fn new(config: &LlmConfig) -> RevisioResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| RevisioError::configuration(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl QueryLlm for OpenAiClient {
    /// Single attempt, fail-fast. Retry policy, if ever wanted, belongs
    /// in a wrapper around this trait.
    async fn query(&self, prompt: &str) -> RevisioResult<String> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.api_url))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(RevisioError::llm_query(format!(
                "provider returned {}: {}",
                status, error_text
            )));
        }

        let result: ChatResponse = response.json().await?;

        let content = result
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| RevisioError::llm_query("no response content"))?;

        Ok(content.trim().to_string())
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}
