//! HTTP server for the Deduction Estimator.
//!
//! Reads the rate schedule directory from `DEDUCTION_CONFIG_DIR` and the
//! listen address from `DEDUCTION_BIND_ADDR`.

use std::env;
use std::process::ExitCode;

use deduction_estimator::api::{AppState, create_router};
use deduction_estimator::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/jp2024";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config_dir = env::var("DEDUCTION_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let bind_addr = env::var("DEDUCTION_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());

    let config = match ConfigLoader::load(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(config_dir = %config_dir, error = %err, "Failed to load rate schedule");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        schedule = %config.metadata().code,
        regions = config.regions().len(),
        "Rate schedule loaded"
    );

    let router = create_router(AppState::new(config));

    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(bind_addr = %bind_addr, error = %err, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(bind_addr = %bind_addr, "Listening");

    if let Err(err) = axum::serve(listener, router).await {
        tracing::error!(error = %err, "Server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
