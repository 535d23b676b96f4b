pub mod chat_client;
pub mod llm_client;

pub use chat_client::{ChatClient, TelegramChatClient};
pub use llm_client::{GroqLlmClient, LlmClient, OpenAiLlmClient};
