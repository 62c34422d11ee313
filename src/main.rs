use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use mentor_match::config::{LoggingSettings, Settings};
use mentor_match::core::Matcher;
use mentor_match::models::ScoringWeights;
use mentor_match::routes::{self, errors::handle_json_payload_error, matches::AppState};
use mentor_match::services::{BackendDirectory, CachedDirectory};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Initialize logging; RUST_LOG wins over the configured level
fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

fn startup_error(context: &str, err: impl std::fmt::Display) -> std::io::Error {
    error!("{}: {}", context, err);
    std::io::Error::new(std::io::ErrorKind::Other, format!("{}: {}", context, err))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load();

    let logging = settings
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default();
    init_tracing(&logging);

    info!("Starting mentor matching service...");

    let settings = settings.map_err(|e| startup_error("Failed to load configuration", e))?;

    info!("Configuration loaded successfully");

    let backend = BackendDirectory::new(
        settings.backend.url.clone(),
        settings.backend.api_key.clone(),
        settings.backend.mentors_table.clone(),
        Duration::from_secs(settings.backend.timeout_secs),
    )
    .map_err(|e| startup_error("Failed to create backend client", e))?;

    let directory = Arc::new(CachedDirectory::new(
        backend,
        settings.cache.capacity,
        settings.cache.ttl_secs,
    ));

    info!(
        "Mentor directory initialized (table: {}, cache: {} entries, TTL: {}s)",
        settings.backend.mentors_table, settings.cache.capacity, settings.cache.ttl_secs
    );

    let weights = ScoringWeights::from(&settings.scoring.weights);
    let matcher = Matcher::new(weights, settings.scoring.reason_thresholds());

    info!("Matcher initialized with weights: {:?}", weights);

    let app_state = AppState {
        directory,
        matcher,
        ranking_defaults: settings.matching.ranking_defaults(),
        max_results_cap: settings.matching.max_results_cap,
        candidate_pool_limit: settings.matching.candidate_pool_limit,
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
