use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use anyhow::Result;
use invoice_generator::api::middleware::compression::create_compression_middleware;
use invoice_generator::api::{configure_routes, ApiState};
use invoice_generator::core::AppConfig;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    tracing::info!("Starting Invoice Generator API");

    // Process metrics
    prometheus::default_registry()
        .register(Box::new(prometheus::process_collector::ProcessCollector::for_self()))?;

    // Load configuration
    let config = AppConfig::load()?;
    let host = config.server.host.clone();
    let port = config.server.port;
    let compress = config.server.enable_compression;

    // Initialize application state
    let state = web::Data::new(ApiState::new(config)?);

    tracing::info!("Starting server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(create_compression_middleware(compress))
            .wrap(Cors::permissive())
            .wrap(TracingLogger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await?;

    Ok(())
}
