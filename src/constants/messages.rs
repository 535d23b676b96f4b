use crate::models::domain::ModelName;

pub const USAGE: &str = "/make_mcq <model> <content>";

pub const MISSING_MODEL: &str =
    "Please specify a model. Usage: /make_mcq <model> <content>";

pub const MISSING_CONTENT: &str =
    "Please provide some content after the model name. Usage: /make_mcq <model> <content>";

pub const PARSE_ERROR: &str =
    "Could not parse the quiz from the model response. Please try again.";

pub const UNEXPECTED_ERROR: &str =
    "Something went wrong while creating your quiz. Please try again later.";

pub fn help() -> String {
    format!(
        "Send {} to turn any text into quiz polls.\nAvailable models: {}",
        USAGE,
        ModelName::registry_listing()
    )
}

pub fn invalid_model(token: &str) -> String {
    format!(
        "Unknown model \"{}\". Available models: {}",
        token,
        ModelName::registry_listing()
    )
}

pub fn generation_error(error: &str) -> String {
    format!("Error generating quiz: {}", error)
}

/// `position` is one-based.
pub fn poll_error(position: usize, error: &str) -> String {
    format!("Failed to create poll {}: {}", position, error)
}

pub fn summary(attempted: usize) -> String {
    format!("Done! I created {} polls.", attempted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_lists_every_model() {
        let text = help();

        assert!(text.contains(USAGE));
        for model in ModelName::all() {
            assert!(text.contains(model.as_str()));
        }
    }

    #[test]
    fn error_messages_are_distinct() {
        let messages = [
            MISSING_MODEL.to_string(),
            MISSING_CONTENT.to_string(),
            invalid_model("x"),
            generation_error("boom"),
            PARSE_ERROR.to_string(),
            poll_error(1, "boom"),
            UNEXPECTED_ERROR.to_string(),
        ];

        for (i, a) in messages.iter().enumerate() {
            for b in messages.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn summary_reports_count() {
        assert_eq!(summary(3), "Done! I created 3 polls.");
    }
}
