use std::{sync::Arc, time::Duration};

use crate::{
    clients::{GroqLlmClient, LlmClient, OpenAiLlmClient},
    config::Config,
    errors::AppResult,
    models::{
        domain::{ModelName, Provider},
        dto::llm::CompletionRequest,
    },
};

/// Routes a prompt to the provider serving the requested model.
pub struct ModelService {
    openai: Arc<dyn LlmClient>,
    groq: Arc<dyn LlmClient>,
}

impl ModelService {
    pub fn new(openai: Arc<dyn LlmClient>, groq: Arc<dyn LlmClient>) -> Self {
        Self { openai, groq }
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        let openai = Arc::new(OpenAiLlmClient::new(&config.openai_api_key));
        let groq = Arc::new(GroqLlmClient::new(
            &config.groq_api_base,
            config.groq_api_key.clone(),
            Duration::from_secs(config.http_timeout_secs),
        )?);

        Ok(Self::new(openai, groq))
    }

    fn client_for(&self, provider: Provider) -> &Arc<dyn LlmClient> {
        match provider {
            Provider::OpenAi => &self.openai,
            Provider::Groq => &self.groq,
        }
    }

    pub async fn generate(&self, model: ModelName, prompt: String) -> AppResult<String> {
        let request = CompletionRequest {
            model: model.as_str().to_string(),
            prompt,
            temperature: model.temperature(),
        };

        log::info!(
            "Generating quiz with {} via {} (temperature {})",
            model,
            model.provider(),
            request.temperature
        );

        let text = self.client_for(model.provider()).complete(&request).await?;

        log::debug!("Model {} returned {} characters", model, text.len());
        Ok(text)
    }
}
