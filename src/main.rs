mod cli;
mod config;
mod errors;
mod models;
mod normalize;
mod routes;
mod services;
mod utils;

use clap::Parser;
use cli::Cli;
use config::AppConfig;
use errors::AppError;
use routes::AppState;
use services::sheets::GoogleSheetsReader;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sheet_cards=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load().with_debug(cli.debug);

    if let Err(e) = run(&cli, config).await {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli, config: AppConfig) -> Result<(), AppError> {
    info!(?config, "loaded configuration");
    if config.sheets_id.is_empty() || config.service_account_json.is_empty() {
        warn!("Google Sheets is not fully configured; /api/cards will fail until it is");
    }
    if config.debug {
        warn!("debug mode enabled: /debug/env is exposed and error bodies name the error kind");
    }

    let app = routes::router(AppState::new(config, GoogleSheetsReader));

    let listener = bind_listener(&cli.host, cli.port).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Io(format!("Server failed: {}", e)))?;

    info!("server stopped");
    Ok(())
}

/// Binds `host:port`, where `host` may be an IPv4/IPv6 literal or a hostname.
async fn bind_listener(host: &str, port: u16) -> Result<TcpListener, AppError> {
    let listener = TcpListener::bind((host, port))
        .await
        .map_err(|e| AppError::Io(format!("Failed to bind {}:{}: {}", host, port, e)))?;

    if let Ok(addr) = listener.local_addr() {
        info!("Listening on http://{}", addr);
    }
    Ok(listener)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
