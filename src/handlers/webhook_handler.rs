use std::sync::Arc;

use actix_web::{error::JsonPayloadError, get, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::telegram::Update,
    services::http_helpers::{acknowledged, success_json},
};

/// Receives a Telegram update and acknowledges it right away. Message updates
/// run the quiz pipeline on a detached task; other updates are ignored.
pub async fn telegram_webhook(
    state: web::Data<AppState>,
    req: HttpRequest,
    update: web::Json<Update>,
) -> HttpResponse {
    let update = update.into_inner();
    let request_id = get_request_id(&req).unwrap_or_default();

    match update.message {
        Some(message) => {
            log::info!(
                "Webhook request {}: update {} from chat {}",
                request_id,
                update.update_id,
                message.chat.id
            );
            let quiz_service = Arc::clone(&state.quiz_service);
            actix_web::rt::spawn(async move {
                quiz_service.handle_message(&message).await;
            });
        }
        None => log::debug!(
            "Webhook request {}: ignoring update {} without a message",
            request_id,
            update.update_id
        ),
    }

    acknowledged()
}

/// Rejects malformed webhook bodies through `AppError`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req| {
        log::warn!("Rejected malformed webhook body: {}", err);
        AppError::InvalidInput(err.to_string()).into()
    })
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    success_json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
