//! Reusable Dioxus RSX components for the stats dashboard.

mod refresh_button;
mod stats_table;

pub use refresh_button::RefreshButton;
pub use stats_table::StatsTable;
