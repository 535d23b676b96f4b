use std::time::Duration;

use async_openai::{config::OpenAIConfig, Client as OpenAIClient};
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    errors::{AppError, AppResult},
    models::dto::llm::{ChatCompletionRequest, ChatCompletionResponse, CompletionRequest},
};

/// Sends one prompt to a provider and returns the raw response text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> AppResult<String>;
}

pub struct OpenAiLlmClient {
    client: OpenAIClient<OpenAIConfig>,
}

impl OpenAiLlmClient {
    pub fn new(api_key: &SecretString) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key.expose_secret());
        Self {
            client: OpenAIClient::with_config(config),
        }
    }
}

#[async_trait]
impl LlmClient for OpenAiLlmClient {
    async fn complete(&self, request: &CompletionRequest) -> AppResult<String> {
        log::debug!(
            "Requesting OpenAI completion with model {} (temperature {})",
            request.model,
            request.temperature
        );

        let response: ChatCompletionResponse = self
            .client
            .chat()
            .create_byot(ChatCompletionRequest::from(request))
            .await?;

        response.into_text()
    }
}

pub struct GroqLlmClient {
    client: Client,
    api_base: String,
    api_key: SecretString,
}

impl GroqLlmClient {
    pub fn new(api_base: &str, api_key: SecretString, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build Groq HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base)
    }
}

#[async_trait]
impl LlmClient for GroqLlmClient {
    async fn complete(&self, request: &CompletionRequest) -> AppResult<String> {
        log::debug!(
            "Requesting Groq completion with model {} (temperature {})",
            request.model,
            request.temperature
        );

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&ChatCompletionRequest::from(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Generation(format!(
                "Groq API error ({}): {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::Generation(format!("Failed to parse Groq API response: {}", e)))?;

        completion.into_text()
    }
}
