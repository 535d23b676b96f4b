use std::sync::Arc;

use crate::{
    clients::ChatClient,
    constants::messages,
    models::{
        domain::{DispatchOutcome, QuestionEntity},
        dto::telegram::QuizPoll,
    },
};

/// Posts questions as quiz polls, one at a time and in order.
pub struct PollDispatcher {
    chat: Arc<dyn ChatClient>,
}

impl PollDispatcher {
    pub fn new(chat: Arc<dyn ChatClient>) -> Self {
        Self { chat }
    }

    /// Each send completes before the next starts. A failed send is reported
    /// to the chat and does not stop the remaining questions.
    pub async fn dispatch(
        &self,
        chat_id: i64,
        questions: Vec<QuestionEntity>,
    ) -> Vec<DispatchOutcome> {
        let mut outcomes = Vec::with_capacity(questions.len());

        for (index, question) in questions.into_iter().enumerate() {
            let poll = QuizPoll::from(question);

            match self.chat.send_poll(chat_id, &poll).await {
                Ok(()) => outcomes.push(DispatchOutcome::Sent),
                Err(e) => {
                    log::error!(
                        "Failed to send poll {} to chat {}: {}",
                        index + 1,
                        chat_id,
                        e
                    );
                    let error = e.to_string();

                    if let Err(report_err) = self
                        .chat
                        .send_message(chat_id, &messages::poll_error(index + 1, &error))
                        .await
                    {
                        log::error!(
                            "Failed to report poll {} failure to chat {}: {}",
                            index + 1,
                            chat_id,
                            report_err
                        );
                    }

                    outcomes.push(DispatchOutcome::Failed { index, error });
                }
            }
        }

        outcomes
    }
}
