//! ink-server - serves the YTD stats dashboard and redraws the stats card.

use anyhow::Context;
use clap::Parser;
use ink_stats::{strava::StravaClient, tokens::TokenStore};
use log::{info, warn};
use std::sync::Arc;

mod app;
mod card;
mod config;
mod eink;
mod error;

use app::{build_router, AppState};
use card::{CardSink, CardSinks, PngCard};
use config::ServerConfig;

#[derive(Parser)]
#[command(
    name = "ink-server",
    version,
    about = "Strava YTD stats dashboard and e-ink card renderer"
)]
struct Cli {
    #[command(flatten)]
    config: ServerConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    run(cli.config).await
}

async fn run(config: ServerConfig) -> anyhow::Result<()> {
    if let Err(e) = card::register_fonts(&config.font_dir) {
        warn!("{}; card refreshes will fail until fonts are provided", e);
    }

    let strava = StravaClient::new(config.credentials(), TokenStore::new(&config.tokens))?;
    let state = AppState {
        stats: Arc::new(strava),
        card: Arc::new(card_sinks(&config)),
    };
    let app = build_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!(
        "Serving {} on http://{}",
        config.static_dir.display(),
        config.bind
    );
    axum::serve(listener, app).await?;
    Ok(())
}

/// The PNG served to the dashboard, plus the e-ink panel when one is configured.
fn card_sinks(config: &ServerConfig) -> CardSinks {
    let png: Arc<dyn CardSink> = Arc::new(PngCard::new(&config.image));
    #[cfg(feature = "inky")]
    if let Some(device) = &config.eink_device {
        info!("Drawing cards on the e-ink panel at {}", device.display());
        let panel = eink::EinkCard::new(eink::DevicePanel::new(device));
        return CardSinks::new(vec![png, Arc::new(panel)]);
    }
    CardSinks::new(vec![png])
}
