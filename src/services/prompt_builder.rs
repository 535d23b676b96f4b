use crate::constants::quiz_prompt::{CONTENT_PLACEHOLDER, QUIZ_PROMPT_TEMPLATE};

pub fn build_quiz_prompt(content: &str) -> String {
    QUIZ_PROMPT_TEMPLATE.replacen(CONTENT_PLACEHOLDER, content, 1)
}
