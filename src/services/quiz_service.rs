use std::sync::Arc;

use crate::{
    clients::ChatClient,
    constants::messages,
    errors::AppResult,
    models::{
        domain::{ModelName, ParsedCommand},
        dto::telegram::InboundMessage,
    },
    services::{
        command_parser, model_service::ModelService, poll_dispatcher::PollDispatcher,
        prompt_builder::build_quiz_prompt, question_validator::validate_questions,
        response_extractor::extract_records,
    },
};

/// How one inbound message was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    HelpSent,
    InputRejected,
    GenerationFailed,
    ExtractionFailed,
    Completed { attempted: usize, sent: usize },
}

/// Runs the quiz pipeline for one message at a time. Holds no per-message
/// state, so concurrent messages never interfere.
pub struct QuizService {
    chat: Arc<dyn ChatClient>,
    models: Arc<ModelService>,
    dispatcher: PollDispatcher,
}

impl QuizService {
    pub fn new(chat: Arc<dyn ChatClient>, models: Arc<ModelService>) -> Self {
        let dispatcher = PollDispatcher::new(Arc::clone(&chat));
        Self {
            chat,
            models,
            dispatcher,
        }
    }

    /// Entry point for the webhook. Anything that escapes the pipeline is
    /// logged, then the user gets one best-effort apology.
    pub async fn handle_message(&self, message: &InboundMessage) {
        let Err(e) = self.process_message(message).await else {
            return;
        };

        log::error!(
            "Unexpected error [{}] handling message {} in chat {}: {}",
            e.error_code(),
            message.message_id,
            message.chat.id,
            e
        );

        if let Err(reply_err) = self
            .chat
            .send_message(message.chat.id, messages::UNEXPECTED_ERROR)
            .await
        {
            log::error!(
                "Could not report failure to chat {}: {}",
                message.chat.id,
                reply_err
            );
        }
    }

    pub async fn process_message(&self, message: &InboundMessage) -> AppResult<PipelineOutcome> {
        let chat_id = message.chat.id;
        let text = message.text.as_deref().unwrap_or_default();

        let command = match command_parser::parse(text) {
            ParsedCommand::NotACommand => {
                self.chat.send_message(chat_id, &messages::help()).await?;
                return Ok(PipelineOutcome::HelpSent);
            }
            ParsedCommand::MissingModel => {
                self.chat.send_message(chat_id, messages::MISSING_MODEL).await?;
                return Ok(PipelineOutcome::InputRejected);
            }
            ParsedCommand::MissingContent { .. } => {
                self.chat
                    .send_message(chat_id, messages::MISSING_CONTENT)
                    .await?;
                return Ok(PipelineOutcome::InputRejected);
            }
            ParsedCommand::Command(command) => command,
        };

        let Some(model) = ModelName::resolve(&command.model_token) else {
            self.chat
                .send_message(chat_id, &messages::invalid_model(&command.model_token))
                .await?;
            return Ok(PipelineOutcome::InputRejected);
        };

        let prompt = build_quiz_prompt(&command.content);

        let response_text = match self.models.generate(model, prompt).await {
            Ok(text) => text,
            Err(e) => {
                log::error!("Quiz generation with {} failed for chat {}: {}", model, chat_id, e);
                self.chat
                    .send_message(chat_id, &messages::generation_error(&e.to_string()))
                    .await?;
                return Ok(PipelineOutcome::GenerationFailed);
            }
        };

        let records = match extract_records(&response_text) {
            Ok(records) => records,
            Err(e) => {
                log::error!(
                    "Could not extract questions from {} response for chat {}: {}. Raw response: {}",
                    model,
                    chat_id,
                    e,
                    response_text
                );
                self.chat.send_message(chat_id, messages::PARSE_ERROR).await?;
                return Ok(PipelineOutcome::ExtractionFailed);
            }
        };

        let questions = validate_questions(records);
        let outcomes = self.dispatcher.dispatch(chat_id, questions).await;

        // Counts attempts, not confirmed polls.
        let attempted = outcomes.len();
        let sent = outcomes.iter().filter(|o| o.is_sent()).count();

        log::info!(
            "Dispatched {} polls to chat {} ({} sent, {} failed)",
            attempted,
            chat_id,
            sent,
            attempted - sent
        );

        self.chat
            .send_message(chat_id, &messages::summary(attempted))
            .await?;

        Ok(PipelineOutcome::Completed { attempted, sent })
    }
}
