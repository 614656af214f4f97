use crate::card::CardError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ink_stats::error::StatsError;
use log::error;
use thiserror::Error;

/// Failure while serving a request; rendered as a plain-text response.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to fetch stats: {0}")]
    Stats(#[from] StatsError),

    #[error("Failed to render card: {0}")]
    Card(#[from] CardError),

    #[error("Card task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Stats(_) => StatusCode::BAD_GATEWAY,
            AppError::Card(_) | AppError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error!("{}", self);
        (status, self.to_string()).into_response()
    }
}
