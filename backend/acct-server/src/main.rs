use acct_server::error::{Result as ServerErrorResult, ServerError};
use acct_server::{AppState, build_router, logger};

use acct_auth::JwtValidator;
use acct_config::{ConfigError, ConfigSection};
use acct_core::AccountDeletionHandler;
use acct_db::{SqliteDocumentStore, SqliteIdentityStore};

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional (development)
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config = acct_config::Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(parent) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(parent)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(&config.logging, log_file_path.as_deref())?;

    info!("Starting acct-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let pool = acct_db::connect(&config.database_path()?, config.database.max_connections).await?;
    info!("Database connection established");
    acct_db::run_migrations(&pool).await?;

    let jwt_validator = build_jwt_validator(&config)?;
    info!("JWT: {} verification enabled", jwt_validator.algorithm());

    // Store handles live for the whole process and are shared by all requests
    let deletion = AccountDeletionHandler::new(
        Arc::new(SqliteDocumentStore::new(pool.clone())),
        Arc::new(SqliteIdentityStore::new(pool.clone())),
    );

    let mut app_state = AppState::new(deletion, jwt_validator, pool);
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => app_state = app_state.with_prometheus(handle),
        Err(e) => warn!("Metrics recorder not installed: {}", e),
    }

    let app = build_router(app_state, &config.server);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

fn build_jwt_validator(config: &acct_config::Config) -> ServerErrorResult<JwtValidator> {
    let validator = if let Some(ref secret) = config.auth.jwt_secret {
        JwtValidator::with_hs256(secret.as_bytes())
    } else if let Some(key_path) = config.jwt_public_key_path()? {
        let public_key =
            std::fs::read_to_string(&key_path).map_err(|e| ServerError::JwtKeyFile {
                path: key_path.display().to_string(),
                source: e,
            })?;
        JwtValidator::with_rs256(&public_key)?
    } else {
        return Err(
            ConfigError::invalid(ConfigSection::Auth, "no JWT key source configured").into(),
        );
    };

    let validator = match config.auth.issuer {
        Some(ref issuer) => validator.with_issuer(issuer),
        None => validator,
    };

    Ok(match config.auth.audience {
        Some(ref audience) => validator.with_audience(audience),
        None => validator,
    })
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
