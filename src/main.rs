use actix_web::{middleware::Logger, web, App, HttpServer};
use mcq_bot_server::{
    app_state::AppState, config::Config, handlers, middleware::WebhookSecretMiddleware,
};

fn io_error(err: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, err.to_string())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    if let Err(e) = config.validate_for_production() {
        log::error!("FATAL: {}", e);
        return Err(io_error(e));
    }

    let state = AppState::new(config.clone()).map_err(io_error)?;

    match state.register_webhook().await {
        Ok(url) => log::info!("Registered webhook at {}", url),
        Err(e) => log::error!("Failed to register webhook at {}: {}", config.webhook_url(), e),
    }

    let webhook_secret = config.webhook_secret.clone();

    log::info!(
        "starting HTTP server on {}:{}",
        config.web_server_host,
        config.web_server_port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(handlers::json_config())
            .wrap(Logger::default())
            .service(handlers::health_check)
            .service(
                web::resource("/webhook")
                    .route(web::post().to(handlers::telegram_webhook))
                    .wrap(WebhookSecretMiddleware::new(webhook_secret.clone())),
            )
    })
    .bind((config.web_server_host.clone(), config.web_server_port))?
    .run()
    .await
}
