use std::sync::Mutex;

use async_trait::async_trait;

use crate::{
    clients::ChatClient,
    errors::{AppError, AppResult},
    models::dto::telegram::QuizPoll,
};

/// Everything the bot tried to send, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum SentItem {
    Message { chat_id: i64, text: String },
    Poll { chat_id: i64, poll: QuizPoll },
    Webhook { url: String, secret_token: Option<String> },
}

/// In-memory chat client that records every attempt and can be told to
/// reject specific poll attempts.
#[derive(Default)]
pub struct RecordingChatClient {
    sent: Mutex<Vec<SentItem>>,
    failing_polls: Vec<usize>,
    failing_message_attempts: Vec<usize>,
    fail_messages: bool,
    delivered: Mutex<Vec<String>>,
}

impl RecordingChatClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero-based poll attempt numbers that fail.
    pub fn failing_poll_attempts(mut self, attempts: &[usize]) -> Self {
        self.failing_polls = attempts.to_vec();
        self
    }

    /// Zero-based message attempt numbers that fail.
    pub fn failing_message_attempts(mut self, attempts: &[usize]) -> Self {
        self.failing_message_attempts = attempts.to_vec();
        self
    }

    pub fn failing_messages(mut self) -> Self {
        self.fail_messages = true;
        self
    }

    pub fn sent(&self) -> Vec<SentItem> {
        self.sent.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|item| match item {
                SentItem::Message { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    /// Message texts that were accepted.
    pub fn delivered_messages(&self) -> Vec<String> {
        self.delivered.lock().unwrap().clone()
    }

    pub fn polls(&self) -> Vec<QuizPoll> {
        self.sent()
            .into_iter()
            .filter_map(|item| match item {
                SentItem::Poll { poll, .. } => Some(poll),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl ChatClient for RecordingChatClient {
    async fn send_message(&self, chat_id: i64, text: &str) -> AppResult<()> {
        let attempt = {
            let mut sent = self.sent.lock().unwrap();
            let attempt = sent
                .iter()
                .filter(|item| matches!(item, SentItem::Message { .. }))
                .count();
            sent.push(SentItem::Message {
                chat_id,
                text: text.to_string(),
            });
            attempt
        };

        if self.fail_messages || self.failing_message_attempts.contains(&attempt) {
            return Err(AppError::Transport("sendMessage unavailable".to_string()));
        }
        self.delivered.lock().unwrap().push(text.to_string());
        Ok(())
    }

    async fn send_poll(&self, chat_id: i64, poll: &QuizPoll) -> AppResult<()> {
        let attempt = {
            let mut sent = self.sent.lock().unwrap();
            let attempt = sent
                .iter()
                .filter(|item| matches!(item, SentItem::Poll { .. }))
                .count();
            sent.push(SentItem::Poll {
                chat_id,
                poll: poll.clone(),
            });
            attempt
        };

        if self.failing_polls.contains(&attempt) {
            return Err(AppError::ChannelRejected(
                "Bad Request: wrong correct option id specified".to_string(),
            ));
        }
        Ok(())
    }

    async fn set_webhook(&self, url: &str, secret_token: Option<&str>) -> AppResult<()> {
        self.sent.lock().unwrap().push(SentItem::Webhook {
            url: url.to_string(),
            secret_token: secret_token.map(str::to_string),
        });
        Ok(())
    }
}

pub mod fixtures {
    use serde_json::json;

    use crate::models::{
        domain::QuestionEntity,
        dto::telegram::{Chat, InboundMessage},
    };

    /// Creates a text message in the given chat
    pub fn inbound_message(chat_id: i64, text: &str) -> InboundMessage {
        InboundMessage {
            message_id: 1,
            chat: Chat { id: chat_id },
            text: Some(text.to_string()),
        }
    }

    /// Creates a two-option question with the first option correct
    pub fn question(text: &str) -> QuestionEntity {
        QuestionEntity {
            question_text: text.to_string(),
            options: vec!["Right".to_string(), "Wrong".to_string()],
            correct_option_index: 0,
            explanation: Some(format!("Explains {}", text)),
        }
    }

    /// Model output holding `count` well formed questions
    pub fn generated_questions(count: usize) -> String {
        let questions: Vec<_> = (0..count)
            .map(|i| {
                json!({
                    "question": format!("Question {}?", i + 1),
                    "options": ["Evaporation", "Condensation", "Precipitation"],
                    "correctOptionIndex": i % 3,
                    "explanation": "See the water cycle."
                })
            })
            .collect();

        serde_json::Value::Array(questions).to_string()
    }
}

pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_fixtures_generated_questions() {
        let text = generated_questions(3);
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(parsed.as_array().unwrap().len(), 3);
        assert_eq!(parsed[2]["correctOptionIndex"], 2);
    }

    #[actix_rt::test]
    async fn test_recording_client_fails_selected_attempts() {
        let chat = RecordingChatClient::new().failing_poll_attempts(&[1]);
        let poll = QuizPoll::from(question("q"));

        assert!(chat.send_poll(1, &poll).await.is_ok());
        assert!(chat.send_poll(1, &poll).await.is_err());
        assert!(chat.send_poll(1, &poll).await.is_ok());
        assert_eq!(chat.polls().len(), 3);
    }
}
