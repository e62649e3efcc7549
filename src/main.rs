use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use lgc_directory::config::{LoggingSettings, Settings};
use lgc_directory::routes::{self, AppState};
use lgc_directory::services::{DisabledOracle, HttpSuggestionOracle, InMemoryDirectory, ShowcaseStore, SuggestionOracle};
use std::sync::Arc;
use tracing::{error, info, warn};
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
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
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

fn init_logging(logging: &LoggingSettings) {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

fn build_oracle(settings: &Settings) -> Arc<dyn SuggestionOracle> {
    if !settings.oracle.enabled {
        info!("Suggestion oracle disabled, searches use exact matches only");
        return Arc::new(DisabledOracle);
    }

    if settings.oracle.api_key.is_empty() {
        warn!("Suggestion oracle has no API key configured; requests will likely be rejected");
    }

    match HttpSuggestionOracle::new(
        settings.oracle.endpoint.clone(),
        settings.oracle.api_key.clone(),
        settings.oracle.model.clone(),
        settings.oracle.timeout(),
    ) {
        Ok(oracle) => {
            info!("Suggestion oracle: {} ({})", settings.oracle.endpoint, settings.oracle.model);
            Arc::new(oracle)
        }
        Err(e) => {
            error!("Failed to build suggestion oracle client ({}), running without suggestions", e);
            Arc::new(DisabledOracle)
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // the subscriber is configured from settings, so load errors go to stderr
    let settings = match std::env::var("CONFIG_PATH") {
        Ok(path) => Settings::load_from(path),
        Err(_) => Settings::load(),
    }
    .map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    init_logging(&settings.logging);

    info!("Starting LGC directory service...");

    let directory = match &settings.directory.seed_path {
        Some(path) => InMemoryDirectory::from_seed_file(path).map_err(|e| {
            error!("Failed to load member seed {}: {}", path, e);
            std::io::Error::new(std::io::ErrorKind::InvalidData, e)
        })?,
        None => InMemoryDirectory::seeded(),
    };

    info!("Directory loaded with {} members", directory.len());

    let app_state = AppState::new(
        Arc::new(directory),
        Arc::new(ShowcaseStore::seeded()),
        build_oracle(&settings),
        settings.oracle.timeout(),
        &settings.search,
        &settings.auth.mock_user_id,
    );

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
