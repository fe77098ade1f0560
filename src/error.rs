use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("malformed csv: {0}")]
    Parse(#[from] csv::Error),
}

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("header row {index} missing, sheet has {rows} rows")]
    MissingHeader { index: usize, rows: usize },

    #[error("no row found for today ({0})")]
    NotFound(NaiveDate),
}

#[derive(Error, Debug)]
#[error("{0}")]
pub struct RenderError(#[from] fmt::Error);

/// Request-scoped failures, tagged with the stage they came from.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("error from csv: {0}")]
    Csv(#[from] SheetError),

    #[error("error for today's row: {0}")]
    TodayRow(#[from] MatchError),

    #[error("error in template: {0}")]
    Render(#[from] RenderError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        error!("{message}");

        (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
    }
}

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("invalid timezone: {0}")]
    Timezone(String),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(std::io::Error),
}
