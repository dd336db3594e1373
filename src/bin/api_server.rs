// Surge Radar server
//
// Serves the JSON API and the HTML dashboard.
// Usage: cargo run --features api --bin api_server -- --port 8080

use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use surge_radar::{create_router, AppState, SurgeCalibration};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "api_server")]
#[command(about = "Medical surge radar API and dashboard", long_about = None)]
#[command(version)]
struct ServerArgs {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "3000")]
    port: u16,

    /// Calibration JSON overriding the built-in model constants
    #[arg(long, env = "SURGE_CALIBRATION")]
    calibration: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "surge_radar=info,tower_http=debug,axum=debug,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = ServerArgs::parse();

    let calibration = match &args.calibration {
        Some(path) => {
            tracing::info!("Loading calibration from {}", path.display());
            SurgeCalibration::load(path)?
        }
        None => {
            tracing::info!("Using built-in calibration");
            SurgeCalibration::default()
        }
    };

    let app = create_router(AppState::new(calibration)?);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Surge radar listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
