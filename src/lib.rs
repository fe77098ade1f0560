//! # LunchWeb
//!
//! Who ordered what for lunch today, straight from a published spreadsheet.
//!
//!
//!
//! # Flow
//! - Every `GET /` fetches the sheet as CSV, nothing is kept between requests
//! - Row `header` holds the participant names, column 0 is a label
//! - Rows below it start with a `YYYY-MM-DD` date, the first one matching today wins
//! - Today is decided in the configured timezone, not the server's
//! - Names and that row's cells line up by column and make the order overview
//! - Rendered as an HTML page, or as plain text with `GET /?format=text`
//!
//! Any failure before rendering is a 500 with the error as body, tagged with where it
//! happened (`error from csv`, `error for today's row`, `error in template`).
//!
//!
//!
//! # Sheet Layout
//! ```text
//! Lunch orders,,,
//! ,,,
//! Fill in before 11:00,,,
//! Date,Alice,Bob,Carol
//! 2021-01-01,BLT,,Soup
//! 2021-01-02,Wrap,Pizza,
//! ```
//!
//!
//!
//! # Setup
//!
//! Run with defaults (port 8081, header row 3, Europe/Brussels).
//! ```sh
//! cargo run
//! ```
//!
//! Point it at another sheet.
//! ```sh
//! cargo run -- --csvurl "https://docs.google.com/.../pub?output=csv" --header 0 --tz UTC
//! ```
//!
//! Every flag can also be set from the environment (`LUNCH_PORT`, `LUNCH_CSV_URL`, ...).
//! Logging follows `RUST_LOG`, `info` by default.
use std::sync::Arc;

use axum::{Router, routing::get};
use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod matcher;
pub mod orders;
pub mod render;
pub mod routes;
pub mod sheet;
pub mod state;
pub mod utils;

use config::Config;
use error::StartupError;
use routes::orders_handler;
use state::State;

pub fn router(state: Arc<State>) -> Router {
    Router::new()
        .route("/", get(orders_handler))
        .layer(
            TraceLayer::new_for_http().on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

pub async fn start_server(config: Config) -> Result<(), StartupError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    info!("Initializing state...");
    config.log();
    let state = State::new(config)?;

    info!("Starting server...");

    let app = router(state.clone());

    let address = state.config.address();
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind {
            address: address.clone(),
            source,
        })?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;

    info!("Server shut down");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
            }
            Err(e) => {
                warn!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
