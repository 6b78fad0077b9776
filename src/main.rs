use actix_cors::Cors;
use actix_web::{web, App, HttpServer, HttpResponse, middleware, error, http::StatusCode};
use rawasi_recommend::config::{config_path_arg, Settings};
use rawasi_recommend::core::{Catalogs, Matcher, Recommender};
use rawasi_recommend::routes::{self, recommend::AppState};
use rawasi_recommend::services::{load_suppliers, InsightsClient};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn, error};
use tracing_subscriber::EnvFilter;

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging; RUST_LOG wins over LOG_LEVEL
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Rawasi recommendation service...");

    // An explicit --config file replaces the config/ directory layers
    let loaded = match config_path_arg(std::env::args().skip(1)) {
        Some(path) => {
            info!("Loading configuration from {}", path);
            Settings::load_from(&path)
        }
        None => Settings::load(),
    };

    let settings = loaded.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, format!("Configuration error: {}", e))
    })?;

    info!("Configuration loaded successfully");

    // Reference tables are loaded once and shared read-only across workers
    let technologies = settings.technology_catalog();
    let suppliers = load_suppliers(&settings.catalog.suppliers_path);

    info!(
        "Catalogs ready: {} technologies, {} suppliers",
        technologies.len(),
        suppliers.len()
    );

    let recommender = Recommender::new(
        Catalogs { technologies, suppliers },
        Matcher::new(settings.recommendation.default_technology.clone()),
        settings.recommendation.top_n,
    )
    .with_default_complexity(settings.recommendation.default_complexity);

    // Insight summarizer is optional - recommendations work without it
    let insights = match &settings.insights.endpoint {
        Some(endpoint) => match InsightsClient::new(
            endpoint.clone(),
            settings.insights.api_key.clone(),
            Duration::from_secs(settings.insights.timeout_secs),
        ) {
            Ok(client) => {
                info!("Insight summarizer enabled at {}", endpoint);
                Some(Arc::new(client))
            }
            Err(e) => {
                warn!("Failed to build insight client ({}), running without insights", e);
                None
            }
        },
        None => {
            info!("No insight endpoint configured - using basic matching only");
            None
        }
    };

    let app_state = AppState {
        recommender,
        insights,
        default_location: settings.recommendation.default_location.clone(),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
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
