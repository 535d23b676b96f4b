pub mod webhook_handler;

pub use webhook_handler::{health_check, json_config, telegram_webhook};
