//! NBA Spread Predictions Service
//!
//! Serves `GET /api/predictions`: odds from The Odds API, a synthetic
//! spread pick per game, and won/lost/push for games already finished.

use anyhow::{Context, Result};
use nba_predictions::{create_router, AppState, Config, OddsApiClient};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Optional local .env; deployed environments set variables directly
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("nba_predictions=info".parse()?),
        )
        .init();

    info!("NBA Spread Predictions Service v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env();
    if config.odds_api_key.is_none() {
        warn!("ODDS_API_KEY is not set; prediction requests will fail until it is");
    }
    let port = config.port;

    let client = OddsApiClient::new(config).context("Failed to create HTTP client")?;
    let app = create_router(AppState::new(client));

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Shutting down...");
        })
        .await
        .context("Server error")?;

    Ok(())
}
