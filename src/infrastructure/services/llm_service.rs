//! LLM Service
//!
//! Abstraction for LLM API calls (supports Ollama and AWS Bedrock)

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// LLM service error
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Timeout")]
    Timeout,
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// LLM Service trait
#[async_trait]
pub trait LlmService: Send + Sync {
    /// Invoke LLM with system and user prompts
    async fn invoke(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f32,
    ) -> Result<String, LlmError>;

    /// Check if service is available
    async fn health_check(&self) -> bool;
}

/// Ollama service configuration
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
    pub max_tokens: u32,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: std::env::var("OLLAMA_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            model: std::env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama3.2".to_string()),
            timeout_secs: 60,
            max_tokens: 4096,
        }
    }
}

/// Ollama request body
#[derive(Debug, Serialize)]
struct OllamaRequest {
    model: String,
    system: String,
    prompt: String,
    stream: bool,
    format: &'static str,
    options: OllamaOptions,
}

#[derive(Debug, Serialize)]
struct OllamaOptions {
    temperature: f32,
    num_predict: u32,
}

/// Ollama response
#[derive(Debug, Deserialize)]
struct OllamaResponse {
    response: String,
    #[serde(default)]
    done: bool,
}

/// Ollama LLM service implementation
pub struct OllamaService {
    client: Client,
    config: OllamaConfig,
}

impl OllamaService {
    pub fn new(config: OllamaConfig) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        info!(
            "OllamaService initialized: {} (model: {})",
            config.base_url, config.model
        );

        Ok(Self { client, config })
    }

    pub fn with_defaults() -> Result<Self, LlmError> {
        Self::new(OllamaConfig::default())
    }

    fn build_request(&self, system_prompt: &str, user_prompt: &str, temperature: f32) -> OllamaRequest {
        OllamaRequest {
            model: self.config.model.clone(),
            system: system_prompt.to_string(),
            prompt: user_prompt.to_string(),
            stream: false,
            // Both quiz prompts ask for a JSON document
            format: "json",
            options: OllamaOptions {
                temperature,
                num_predict: self.config.max_tokens,
            },
        }
    }
}

#[async_trait]
impl LlmService for OllamaService {
    async fn invoke(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f32,
    ) -> Result<String, LlmError> {
        let url = format!("{}/api/generate", self.config.base_url);
        let request = self.build_request(system_prompt, user_prompt, temperature);

        debug!("Calling Ollama API: {}", url);
        let start = std::time::Instant::now();

        let response = self.client.post(&url).json(&request).send().await.map_err(|e| {
            if e.is_timeout() {
                LlmError::Timeout
            } else {
                LlmError::Http(e)
            }
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Ollama API error: {} - {}", status, body);
            return Err(LlmError::InvalidResponse(format!("Status: {}", status)));
        }

        let result: OllamaResponse = response.json().await?;
        if !result.done {
            warn!("Ollama reported an unfinished generation");
        }

        debug!(
            "Ollama response received in {:?}: {} chars",
            start.elapsed(),
            result.response.len()
        );

        Ok(result.response)
    }

    async fn health_check(&self) -> bool {
        let url = format!("{}/api/tags", self.config.base_url);

        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!("Ollama health check failed: {}", e);
                false
            }
        }
    }
}

/// AWS Bedrock service configuration
#[derive(Debug, Clone)]
pub struct BedrockConfig {
    pub region: String,
    pub model_id: String,
    pub max_tokens: u32,
}

impl Default for BedrockConfig {
    fn default() -> Self {
        Self {
            region: std::env::var("AWS_BEDROCK_REGION")
                .unwrap_or_else(|_| "us-west-2".to_string()),
            model_id: std::env::var("AWS_BEDROCK_MODEL_ID")
                .unwrap_or_else(|_| "us.amazon.nova-pro-v1:0".to_string()),
            max_tokens: 4096,
        }
    }
}

/// AWS Bedrock LLM service implementation using the Converse API
#[cfg(feature = "bedrock")]
pub struct BedrockService {
    client: aws_sdk_bedrockruntime::Client,
    config: BedrockConfig,
}

#[cfg(feature = "bedrock")]
impl BedrockService {
    pub async fn new(config: BedrockConfig) -> Self {
        let aws_config = aws_config::from_env()
            .region(aws_config::Region::new(config.region.clone()))
            .load()
            .await;

        let client = aws_sdk_bedrockruntime::Client::new(&aws_config);

        info!(
            "BedrockService initialized: {} (model: {})",
            config.region, config.model_id
        );

        Self { client, config }
    }
}

#[cfg(feature = "bedrock")]
#[async_trait]
impl LlmService for BedrockService {
    async fn invoke(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f32,
    ) -> Result<String, LlmError> {
        use aws_sdk_bedrockruntime::types::{
            ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
        };

        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(user_prompt.to_string()))
            .build()
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        let inference = InferenceConfiguration::builder()
            .temperature(temperature)
            .max_tokens(self.config.max_tokens as i32)
            .build();

        let response = self
            .client
            .converse()
            .model_id(&self.config.model_id)
            .system(SystemContentBlock::Text(system_prompt.to_string()))
            .messages(message)
            .inference_config(inference)
            .send()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        response
            .output()
            .and_then(|output| output.as_message().ok())
            .and_then(|message| message.content().iter().find_map(|c| c.as_text().ok()))
            .cloned()
            .ok_or_else(|| LlmError::InvalidResponse("No text in response".to_string()))
    }

    async fn health_check(&self) -> bool {
        self.invoke("Say OK", "OK", 0.0).await.is_ok()
    }
}

/// Mock LLM service for testing
pub struct MockLlmService {
    response: Result<String, String>,
}

impl MockLlmService {
    pub fn new(response: &str) -> Self {
        Self {
            response: Ok(response.to_string()),
        }
    }

    /// Mock that fails every call
    pub fn failing(reason: &str) -> Self {
        Self {
            response: Err(reason.to_string()),
        }
    }
}

#[async_trait]
impl LlmService for MockLlmService {
    async fn invoke(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
        _temperature: f32,
    ) -> Result<String, LlmError> {
        self.response.clone().map_err(LlmError::InvalidResponse)
    }

    async fn health_check(&self) -> bool {
        self.response.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_llm_service() {
        let service = MockLlmService::new("Test response");
        let result = service.invoke("system", "user", 0.3).await;
        assert_eq!(result.unwrap(), "Test response");
        assert!(service.health_check().await);
    }

    #[tokio::test]
    async fn test_failing_mock_llm_service() {
        let service = MockLlmService::failing("boom");
        let result = service.invoke("system", "user", 0.3).await;
        assert!(matches!(result, Err(LlmError::InvalidResponse(msg)) if msg == "boom"));
        assert!(!service.health_check().await);
    }

    #[test]
    fn test_ollama_request_body() {
        let service = OllamaService::with_defaults().unwrap();
        let request = service.build_request("System prompt", "User prompt", 0.7);
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["system"], "System prompt");
        assert_eq!(body["prompt"], "User prompt");
        assert_eq!(body["stream"], false);
        assert_eq!(body["format"], "json");
        assert!((body["options"]["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }
}
