pub mod command_parser;
pub mod http_helpers;
pub mod model_service;
pub mod poll_dispatcher;
pub mod prompt_builder;
pub mod question_validator;
pub mod quiz_service;
pub mod response_extractor;
