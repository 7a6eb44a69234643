use actix_cors::Cors;
use actix_web::web;

use crate::web::error::ApiError;
use crate::web::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::MalformedBody(err.to_string()).into()),
    )
    .service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health_check))
            .route("/chat", web::post().to(handlers::chat))
            .route("/topics", web::get().to(handlers::topics))
            .route("/suggest", web::post().to(handlers::suggest))
            .route("/contact", web::post().to(handlers::contact))
            .route("/analytics", web::post().to(handlers::analytics)),
    )
    .route("/", web::get().to(handlers::index));
}

/// Cross-origin requests are accepted from any origin.
pub fn cors() -> Cors {
    Cors::permissive()
}
