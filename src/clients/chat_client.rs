use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::{
    errors::{AppError, AppResult},
    models::dto::telegram::{
        QuizPoll, SendMessageRequest, SendPollRequest, SetWebhookRequest, TelegramResponse,
    },
};

const ALLOWED_UPDATES: [&str; 1] = ["message"];

/// Outbound operations against the messaging platform.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn send_message(&self, chat_id: i64, text: &str) -> AppResult<()>;
    async fn send_poll(&self, chat_id: i64, poll: &QuizPoll) -> AppResult<()>;
    async fn set_webhook(&self, url: &str, secret_token: Option<&str>) -> AppResult<()>;
}

/// Telegram Bot API client.
pub struct TelegramChatClient {
    client: Client,
    api_base: String,
    token: SecretString,
}

impl TelegramChatClient {
    pub fn new(api_base: &str, token: SecretString, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build Telegram HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{}",
            self.api_base,
            self.token.expose_secret(),
            method
        )
    }

    async fn call<T: Serialize + Sync>(&self, method: &str, body: &T) -> AppResult<()> {
        let response = self
            .client
            .post(self.method_url(method))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let envelope: TelegramResponse = response.json().await?;

        if envelope.ok {
            Ok(())
        } else {
            Err(AppError::ChannelRejected(envelope.description.unwrap_or_else(
                || match envelope.error_code {
                    Some(code) => format!("{} failed with error code {}", method, code),
                    None => format!("{} failed with status {}", method, status),
                },
            )))
        }
    }
}

#[async_trait]
impl ChatClient for TelegramChatClient {
    async fn send_message(&self, chat_id: i64, text: &str) -> AppResult<()> {
        self.call("sendMessage", &SendMessageRequest { chat_id, text })
            .await
    }

    async fn send_poll(&self, chat_id: i64, poll: &QuizPoll) -> AppResult<()> {
        self.call("sendPoll", &SendPollRequest::quiz(chat_id, poll))
            .await
    }

    async fn set_webhook(&self, url: &str, secret_token: Option<&str>) -> AppResult<()> {
        self.call(
            "setWebhook",
            &SetWebhookRequest {
                url,
                secret_token,
                allowed_updates: &ALLOWED_UPDATES,
            },
        )
        .await
    }
}
