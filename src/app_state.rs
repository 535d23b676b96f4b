use std::{sync::Arc, time::Duration};

use secrecy::ExposeSecret;

use crate::{
    clients::{ChatClient, TelegramChatClient},
    config::Config,
    errors::AppResult,
    services::{model_service::ModelService, quiz_service::QuizService},
};

#[derive(Clone)]
pub struct AppState {
    pub chat_client: Arc<dyn ChatClient>,
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let chat_client: Arc<dyn ChatClient> = Arc::new(TelegramChatClient::new(
            &config.telegram_api_base,
            config.telegram_bot_token.clone(),
            Duration::from_secs(config.http_timeout_secs),
        )?);

        let model_service = Arc::new(ModelService::from_config(&config)?);
        let quiz_service = Arc::new(QuizService::new(Arc::clone(&chat_client), model_service));

        Ok(Self::with_services(config, chat_client, quiz_service))
    }

    /// Points the chat platform at this server's webhook and returns the URL.
    pub async fn register_webhook(&self) -> AppResult<String> {
        let url = self.config.webhook_url();
        let secret = self.config.webhook_secret.as_ref().map(|s| s.expose_secret());

        self.chat_client.set_webhook(&url, secret).await?;
        Ok(url)
    }

    pub fn with_services(
        config: Config,
        chat_client: Arc<dyn ChatClient>,
        quiz_service: Arc<QuizService>,
    ) -> Self {
        Self {
            chat_client,
            quiz_service,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        clients::llm_client::MockLlmClient,
        test_utils::{RecordingChatClient, SentItem},
    };

    fn unused_models() -> Arc<ModelService> {
        Arc::new(ModelService::new(
            Arc::new(MockLlmClient::new()),
            Arc::new(MockLlmClient::new()),
        ))
    }

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_builds_from_config() {
        let state = AppState::new(Config::test_config()).unwrap();

        assert_eq!(state.config.web_server_port, 8080);
    }

    #[actix_rt::test]
    async fn test_register_webhook_sends_url_and_secret() {
        let chat = Arc::new(RecordingChatClient::new());
        let state = AppState::with_services(
            Config::test_config(),
            chat.clone(),
            Arc::new(QuizService::new(chat.clone(), unused_models())),
        );

        let url = state.register_webhook().await.unwrap();

        assert_eq!(url, "https://bot.example.com/webhook");
        assert_eq!(
            chat.sent(),
            vec![SentItem::Webhook {
                url: "https://bot.example.com/webhook".to_string(),
                secret_token: Some("hook-secret".to_string()),
            }]
        );
    }

    #[actix_rt::test]
    async fn test_register_webhook_without_secret() {
        let chat = Arc::new(RecordingChatClient::new());
        let config = Config {
            webhook_secret: None,
            ..Config::test_config()
        };
        let state = AppState::with_services(
            config,
            chat.clone(),
            Arc::new(QuizService::new(chat.clone(), unused_models())),
        );

        state.register_webhook().await.unwrap();

        assert!(matches!(
            chat.sent().as_slice(),
            [SentItem::Webhook { secret_token: None, .. }]
        ));
    }
}
