use std::sync::Arc;

use axum::{
    extract::{self, Query},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::info;

use crate::{
    error::{AppError, MatchError},
    matcher::find_row_for_today,
    orders::OrderOverview,
    render::{Html, OrderPage, PlainText, Render},
    sheet::{Row, fetch_rows},
    state::State,
    utils::now_in,
};

#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Html,
    Text,
}

#[derive(Deserialize, Debug, Default)]
pub struct Params {
    #[serde(default)]
    pub format: Format,
}

pub async fn orders_handler(
    extract::State(state): extract::State<Arc<State>>,
    Query(params): Query<Params>,
) -> Result<Response, AppError> {
    let rows = fetch_rows(&state.client, &state.config.csv_url).await?;

    let header = header_row(&rows, state.config.header)?;
    let row = find_row_for_today(&rows, state.config.header, state.timezone)?;

    let overview = OrderOverview::new(participants(header), participants(row));
    info!("Orders so far:\n{}", overview.summary());

    let page = OrderPage::new(&overview, now_in(state.timezone));

    let html = Html {
        config: &state.config,
    };
    let renderer: &dyn Render = match params.format {
        Format::Html => &html,
        Format::Text => &PlainText,
    };
    let body = renderer.render(&page)?;

    Ok(([(CONTENT_TYPE, renderer.content_type())], body).into_response())
}

fn header_row(rows: &[Row], index: usize) -> Result<&Row, MatchError> {
    rows.get(index).ok_or(MatchError::MissingHeader {
        index,
        rows: rows.len(),
    })
}

/// Everything after the date/label column.
fn participants(row: &Row) -> &[String] {
    row.get(1..).unwrap_or_default()
}
