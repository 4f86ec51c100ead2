use actix_web::web;

use super::error::ApiError;
use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Errores de deserialización como JSON, igual que el resto de errores
        .app_data(web::JsonConfig::default().error_handler(|err, _req| ApiError::from(err).into()))
        .app_data(web::FormConfig::default().error_handler(|err, _req| ApiError::from(err).into()))

        // Formulario web
        .route("/", web::get().to(handlers::invoice_form))
        .route("/generate", web::post().to(handlers::generate_from_form))

        .route("/metrics", web::get().to(handlers::metrics_endpoint))

        // API JSON
        .service(
            web::scope("/api")
                .route("/health", web::get().to(handlers::health_check))
                .route("/generate", web::post().to(handlers::generate_invoice))
                .route("/receipt", web::post().to(handlers::generate_receipt))
        );
}
