/// A message that starts with the trigger keyword and carries both a
/// model token and content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    pub keyword: String,
    pub model_token: String,
    pub content: String,
}

/// Outcome of parsing one inbound text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsedCommand {
    NotACommand,
    MissingModel,
    MissingContent { model_token: String },
    Command(Command),
}
