//! # Sheet
//!
//! Published spreadsheet, read as CSV.
//!
//! - Fetched fresh on every request, no retries, no caching
//! - Any non-2xx status counts as a failed fetch
//! - Rows may have different lengths, column access is checked later on
use reqwest::Client;
use tracing::debug;

use crate::error::SheetError;

pub type Row = Vec<String>;

pub async fn fetch_rows(client: &Client, url: &str) -> Result<Vec<Row>, SheetError> {
    let response = client.get(url).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;

    debug!("Fetched {} bytes from {url}", bytes.len());

    parse_rows(&bytes)
}

pub fn parse_rows(data: &[u8]) -> Result<Vec<Row>, SheetError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);

    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record?.iter().map(str::to_owned).collect());
    }

    Ok(rows)
}
