pub mod command;
pub mod dispatch_outcome;
pub mod model_name;
pub mod quiz_question;
pub use command::{Command, ParsedCommand};
pub use dispatch_outcome::DispatchOutcome;
pub use model_name::{ModelName, Provider};
pub use quiz_question::{QuestionEntity, RawQuestionRecord};
