use serde::Deserialize;
use serde_json::Value;

/// Telegram's limit on a poll question.
pub const MAX_QUESTION_CHARS: usize = 200;
/// Telegram's limit on a single poll option.
pub const MAX_OPTION_CHARS: usize = 100;

/// One element of the model's JSON array, before any checks.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RawQuestionRecord {
    #[serde(default)]
    pub question: Option<Value>,
    #[serde(default)]
    pub options: Option<Value>,
    #[serde(default, rename = "correctOptionIndex")]
    pub correct_option_index: Option<Value>,
    #[serde(default)]
    pub explanation: Option<Value>,
}

impl RawQuestionRecord {
    /// Non-object elements carry no record.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(_) => serde_json::from_value(value).ok(),
            _ => None,
        }
    }
}

/// A question that fits the chat channel's size limits.
///
/// `correct_option_index` is not range checked and the option count is not
/// bounded here; the channel rejects those per poll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionEntity {
    pub question_text: String,
    pub options: Vec<String>,
    pub correct_option_index: i64,
    pub explanation: Option<String>,
}

impl QuestionEntity {
    pub fn from_raw(raw: RawQuestionRecord) -> Option<Self> {
        let question_text = raw.question.as_ref()?.as_str()?;

        let options = match raw.options.as_ref()? {
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(|text| truncate_chars(text, MAX_OPTION_CHARS)))
                .collect::<Option<Vec<String>>>()?,
            _ => return None,
        };

        let correct_option_index = raw.correct_option_index.as_ref()?.as_i64()?;

        let explanation = raw
            .explanation
            .as_ref()
            .and_then(Value::as_str)
            .map(str::to_string);

        Some(Self {
            question_text: truncate_chars(question_text, MAX_QUESTION_CHARS),
            options,
            correct_option_index,
            explanation,
        })
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
