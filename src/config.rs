use std::env;

use secrecy::{ExposeSecret, SecretString};
use validator::Validate;

use crate::errors::{AppError, AppResult};

const TELEGRAM_TOKEN_PLACEHOLDER: &str = "telegram_bot_token";
const OPENAI_KEY_PLACEHOLDER: &str = "openai_api_key";
const GROQ_KEY_PLACEHOLDER: &str = "groq_api_key";

#[derive(Clone, Debug, Validate)]
pub struct Config {
    pub telegram_bot_token: SecretString,
    pub openai_api_key: SecretString,
    pub groq_api_key: SecretString,
    #[validate(url)]
    pub public_url: String,
    pub webhook_secret: Option<SecretString>,
    pub web_server_host: String,
    #[validate(range(min = 1))]
    pub web_server_port: u16,
    #[validate(range(min = 1, max = 600))]
    pub http_timeout_secs: u64,
    #[validate(url)]
    pub telegram_api_base: String,
    #[validate(url)]
    pub groq_api_base: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            telegram_bot_token: SecretString::from(
                env::var("TELEGRAM_BOT_TOKEN")
                    .unwrap_or_else(|_| TELEGRAM_TOKEN_PLACEHOLDER.to_string()),
            ),
            openai_api_key: SecretString::from(
                env::var("OPENAI_API_KEY").unwrap_or_else(|_| OPENAI_KEY_PLACEHOLDER.to_string()),
            ),
            groq_api_key: SecretString::from(
                env::var("GROQ_API_KEY").unwrap_or_else(|_| GROQ_KEY_PLACEHOLDER.to_string()),
            ),
            public_url: env::var("PUBLIC_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            webhook_secret: env::var("WEBHOOK_SECRET")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(SecretString::from),
            web_server_host: env::var("WEB_SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(120),
            telegram_api_base: env::var("TELEGRAM_API_BASE")
                .unwrap_or_else(|_| "https://api.telegram.org".to_string()),
            groq_api_base: env::var("GROQ_API_BASE")
                .unwrap_or_else(|_| "https://api.groq.com/openai/v1".to_string()),
        }
    }

    /// Public address Telegram delivers updates to.
    pub fn webhook_url(&self) -> String {
        format!("{}/webhook", self.public_url.trim_end_matches('/'))
    }

    /// Validate that production-critical configuration is set.
    /// Fails if any credential is still a placeholder value.
    pub fn validate_for_production(&self) -> AppResult<()> {
        self.validate()?;

        let placeholders = [
            (
                "TELEGRAM_BOT_TOKEN",
                self.telegram_bot_token.expose_secret(),
                TELEGRAM_TOKEN_PLACEHOLDER,
            ),
            (
                "OPENAI_API_KEY",
                self.openai_api_key.expose_secret(),
                OPENAI_KEY_PLACEHOLDER,
            ),
            (
                "GROQ_API_KEY",
                self.groq_api_key.expose_secret(),
                GROQ_KEY_PLACEHOLDER,
            ),
        ];

        for (name, value, placeholder) in placeholders {
            if value == placeholder || value.trim().is_empty() {
                return Err(AppError::Config(format!(
                    "{} is using its default value. Set the {} environment variable.",
                    name, name
                )));
            }
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            telegram_bot_token: SecretString::from("123456:test-token".to_string()),
            openai_api_key: SecretString::from("sk-test".to_string()),
            groq_api_key: SecretString::from("gsk-test".to_string()),
            public_url: "https://bot.example.com/".to_string(),
            webhook_secret: Some(SecretString::from("hook-secret".to_string())),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            http_timeout_secs: 30,
            telegram_api_base: "https://api.telegram.org".to_string(),
            groq_api_base: "https://api.groq.com/openai/v1".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.public_url.is_empty());
        assert!(config.web_server_port > 0);
        assert!(!config.telegram_api_base.is_empty());
    }

    #[test]
    fn test_webhook_url_strips_trailing_slash() {
        let config = Config::test_config();

        assert_eq!(config.webhook_url(), "https://bot.example.com/webhook");
    }

    #[test]
    fn test_test_config_passes_production_checks() {
        let config = Config::test_config();

        assert!(config.validate_for_production().is_ok());
    }

    #[test]
    fn test_placeholder_secret_fails_production_checks() {
        let mut config = Config::test_config();
        config.groq_api_key = SecretString::from(GROQ_KEY_PLACEHOLDER.to_string());

        let err = config.validate_for_production().unwrap_err();
        assert!(matches!(err, AppError::Config(ref msg) if msg.contains("GROQ_API_KEY")));
    }

    #[test]
    fn test_invalid_public_url_fails_validation() {
        let mut config = Config::test_config();
        config.public_url = "not a url".to_string();

        assert!(config.validate().is_err());
        assert!(matches!(
            config.validate_for_production(),
            Err(AppError::Config(_))
        ));
    }
}
