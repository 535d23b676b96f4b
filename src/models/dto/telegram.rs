use serde::{Deserialize, Serialize};

use crate::models::domain::QuestionEntity;

pub const POLL_TYPE_QUIZ: &str = "quiz";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<InboundMessage>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct InboundMessage {
    #[serde(default)]
    pub message_id: i64,
    pub chat: Chat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Chat {
    pub id: i64,
}

/// Poll contents and quiz settings for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizPoll {
    pub question: String,
    pub options: Vec<String>,
    pub correct_option_id: i64,
    pub explanation: Option<String>,
}

impl From<QuestionEntity> for QuizPoll {
    fn from(entity: QuestionEntity) -> Self {
        QuizPoll {
            question: entity.question_text,
            options: entity.options,
            correct_option_id: entity.correct_option_index,
            explanation: entity.explanation,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SendMessageRequest<'a> {
    pub chat_id: i64,
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
pub struct InputPollOption<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
pub struct SendPollRequest<'a> {
    pub chat_id: i64,
    pub question: &'a str,
    pub options: Vec<InputPollOption<'a>>,
    #[serde(rename = "type")]
    pub poll_type: &'static str,
    pub is_anonymous: bool,
    pub correct_option_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<&'a str>,
}

impl<'a> SendPollRequest<'a> {
    pub fn quiz(chat_id: i64, poll: &'a QuizPoll) -> Self {
        SendPollRequest {
            chat_id,
            question: &poll.question,
            options: poll
                .options
                .iter()
                .map(|text| InputPollOption { text })
                .collect(),
            poll_type: POLL_TYPE_QUIZ,
            is_anonymous: false,
            correct_option_id: poll.correct_option_id,
            explanation: poll.explanation.as_deref(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SetWebhookRequest<'a> {
    pub url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_token: Option<&'a str>,
    pub allowed_updates: &'a [&'a str],
}

/// Envelope every Bot API method answers with.
#[derive(Debug, Deserialize)]
pub struct TelegramResponse {
    pub ok: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub error_code: Option<i32>,
}
