//! Strava YTD stats dashboard.
//!
//! Data flow:
//! 1. On mount: `GET /api/v1/stats` and show the totals table.
//! 2. The card image is served by the server from `/static/img/stats.png`.
//! 3. The refresh button posts `{"mode":"dark"}` to `/api/v1/refresh`, which
//!    redraws that image; the button carries `is-loading` while it runs.

use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};
use ink_refresh_ui::components::{RefreshButton, StatsTable};
use ink_refresh_ui::transport::fetch_stats;
use ink_stats::stats::YtdStats;

/// DOM id of the refresh button.
const REFRESH_BUTTON_ID: &str = "refresh-card";

/// Where the server writes the rendered card.
const CARD_IMAGE_URL: &str = "/static/img/stats.png";

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("ink-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut stats = use_signal(|| None::<YtdStats>);
    let mut loading = use_signal(|| true);
    let mut error_msg = use_signal(|| None::<String>);

    use_effect(move || {
        spawn(async move {
            match fetch_stats().await {
                Ok(loaded) => {
                    info!("Loaded stats for {}", loaded.year);
                    stats.set(Some(loaded));
                }
                Err(e) => error_msg.set(Some(format!("Failed to load stats: {}", e))),
            }
            loading.set(false);
        });
    });

    rsx! {
        div {
            class: "container",
            style: "max-width: 640px; margin: 0 auto; padding: 20px; font-family: sans-serif;",

            h1 { style: "margin-bottom: 4px;", "Year to date" }

            if let Some(error) = error_msg() {
                div {
                    style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px;",
                    "{error}"
                }
            }

            if loading() {
                div { style: "padding: 40px; color: #666;", "Loading stats..." }
            } else if let Some(current) = stats() {
                StatsTable { stats: current }
            }

            img {
                src: CARD_IMAGE_URL,
                alt: "Stats card",
                width: "212",
                height: "104",
                style: "display: block; margin: 12px 0; image-rendering: pixelated;",
            }

            RefreshButton {
                id: REFRESH_BUTTON_ID.to_string(),
                label: "Refresh e-ink".to_string(),
            }
        }
    }
}
