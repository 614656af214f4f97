//! Core types for the YTD stats card.
//!
//! Everything here compiles for `wasm32` so the browser crates can share the
//! request and stats models with the server. The Strava HTTP client and the
//! token file sit behind the `api` feature.

pub mod error;
pub mod mode;
pub mod stats;
pub mod units;

#[cfg(feature = "api")]
pub mod strava;
#[cfg(feature = "api")]
pub mod tokens;

/// Endpoint the browser posts to when the card should be redrawn.
pub const REFRESH_PATH: &str = "/api/v1/refresh";

/// Endpoint serving the current [`stats::YtdStats`] as JSON.
pub const STATS_PATH: &str = "/api/v1/stats";

/// Content type for every JSON body exchanged with the server.
pub const JSON_CONTENT_TYPE: &str = "application/json";
