use actix_web::HttpResponse;

/// Acknowledges a webhook delivery so the platform does not redeliver it
pub fn acknowledged() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "ok": true }))
}

/// Creates a success JSON response
pub fn success_json<T: serde::Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(data)
}
