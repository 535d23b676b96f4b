use crate::models::domain::{Command, ParsedCommand};

pub const TRIGGER: &str = "/make_mcq";

/// Splits `"<trigger> <model> <content...>"` on single spaces.
///
/// The model token is checked before the content, so a bare trigger reports
/// a missing model.
pub fn parse(text: &str) -> ParsedCommand {
    let mut tokens = text.split(' ');

    let keyword = tokens.next().unwrap_or_default();
    if !is_trigger(keyword) {
        return ParsedCommand::NotACommand;
    }

    let model_token = tokens.next().unwrap_or_default();
    if model_token.is_empty() {
        return ParsedCommand::MissingModel;
    }

    let content = tokens.collect::<Vec<_>>().join(" ");
    if content.trim().is_empty() {
        return ParsedCommand::MissingContent {
            model_token: model_token.to_string(),
        };
    }

    ParsedCommand::Command(Command {
        keyword: TRIGGER.to_string(),
        model_token: model_token.to_string(),
        content,
    })
}

// Group chats address commands as "/make_mcq@SomeBot".
fn is_trigger(keyword: &str) -> bool {
    match keyword.split_once('@') {
        Some((command, bot)) => command == TRIGGER && !bot.is_empty(),
        None => keyword == TRIGGER,
    }
}
