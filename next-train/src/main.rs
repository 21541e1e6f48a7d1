use std::process::ExitCode;

use next_train::config::AppConfig;
use next_train::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match serve(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "server stopped");
            ExitCode::FAILURE
        }
    }
}

async fn serve(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Fail fast on a missing or broken catalog
    let state = AppState::from_config(&config)?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!(
        timezone = %config.timezone,
        max_distance_km = config.max_distance_km,
        "Next train listening on http://{}",
        config.bind
    );
    info!("  GET  /health      - Health check");
    info!("  GET  /next-train  - Next departure (headers location-lat, location-long)");

    axum::serve(listener, app).await?;
    Ok(())
}
