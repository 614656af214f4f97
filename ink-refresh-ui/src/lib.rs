//! Refresh button handler and shared Dioxus components for the stats dashboard.
//!
//! This crate provides:
//! - `handler`: the refresh trigger, marks an element busy while `POST /api/v1/refresh` is in flight
//! - `loading`: the `is-loading` marker and the guard that clears it
//! - `transport`: typed POST request and the `window.fetch` transport
//! - `dom`: click binding for server-rendered buttons
//! - `components`: `RefreshButton` and `StatsTable` RSX components

pub mod components;
pub mod dom;
pub mod error;
pub mod handler;
pub mod loading;
pub mod transport;

pub use error::RefreshError;
pub use handler::refresh;
