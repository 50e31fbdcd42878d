use std::process::ExitCode;

use arrival_board::config::{AppConfig, ConfigError};
use arrival_board::datamall::{ClientError, DatamallClient};
use arrival_board::render::{AssetError, FontAsset, PngRenderer};
use arrival_board::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "arrival_board=info,tower_http=info";

/// Anything that stops the server from starting.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error("failed to create DataMall client: {0}")]
    Client(#[from] ClientError),

    #[error("failed to serve: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Startup failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::from_env()?;

    // Fail before accepting traffic if the font is unusable
    let font = FontAsset::load(&config.font_path)?;

    let client = DatamallClient::new(config.datamall.clone())?;

    info!(
        services = config.tracked.len(),
        endpoint = %config.datamall.base_url,
        "Tracking services"
    );
    for service in &config.tracked {
        info!(%service, "Tracked");
    }

    let state = AppState::new(client, config.tracked, PngRenderer::new(font));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "Arrival board listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
