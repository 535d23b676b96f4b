use serde_json::Value;

use crate::models::domain::{QuestionEntity, RawQuestionRecord};

/// Keeps the records that form a question, clamped to channel limits, in
/// their original order. Malformed records are dropped individually.
pub fn validate_questions(records: Vec<Value>) -> Vec<QuestionEntity> {
    let total = records.len();

    let questions: Vec<QuestionEntity> = records
        .into_iter()
        .filter_map(RawQuestionRecord::from_value)
        .filter_map(QuestionEntity::from_raw)
        .collect();

    if questions.len() < total {
        log::warn!(
            "Discarded {} of {} generated questions as malformed",
            total - questions.len(),
            total
        );
    }

    questions
}
