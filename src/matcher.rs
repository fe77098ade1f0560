use chrono::NaiveDate;
use chrono_tz::Tz;
use tracing::warn;

use crate::{error::MatchError, sheet::Row, utils::now_in};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn find_row_for_today(
    rows: &[Row],
    header_index: usize,
    timezone: Tz,
) -> Result<&Row, MatchError> {
    find_row_for_date(rows, header_index, now_in(timezone).date_naive())
}

/// First row below the header whose date cell is `today`.
///
/// Rows with an unreadable date are logged and skipped.
pub fn find_row_for_date(
    rows: &[Row],
    header_index: usize,
    today: NaiveDate,
) -> Result<&Row, MatchError> {
    let data_rows = rows.get(header_index + 1..).unwrap_or_default();

    for (offset, row) in data_rows.iter().enumerate() {
        let cell = row.first().map(String::as_str).unwrap_or_default();

        match NaiveDate::parse_from_str(cell.trim(), DATE_FORMAT) {
            Ok(date) if date == today => return Ok(row),
            Ok(_) => {}
            Err(e) => {
                let index = header_index + 1 + offset;
                warn!("Skipping row {index}, bad date {cell:?}: {e}");
            }
        }
    }

    Err(MatchError::NotFound(today))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(dates: &[&str]) -> Vec<Row> {
        let mut rows = vec![vec!["date".to_string(), "Alice".to_string()]];
        rows.extend(
            dates
                .iter()
                .enumerate()
                .map(|(i, date)| vec![date.to_string(), format!("order {i}")]),
        );
        rows
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_match_wins() {
        let rows = rows(&["2021-01-01", "2021-01-02", "bad-date", "2021-01-02"]);
        let row = find_row_for_date(&rows, 0, day(2021, 1, 2)).unwrap();

        assert_eq!(row, &rows[2]);
        assert_eq!(row[1], "order 1");
    }

    #[test]
    fn test_bad_dates_skipped() {
        let rows = rows(&["bad-date", "", "02/01/2021", "2021-01-02"]);
        let row = find_row_for_date(&rows, 0, day(2021, 1, 2)).unwrap();

        assert_eq!(row[1], "order 3");
    }

    #[test]
    fn test_not_found() {
        let rows = rows(&["2021-01-01", "2021-01-03"]);
        let error = find_row_for_date(&rows, 0, day(2021, 1, 2)).unwrap_err();

        assert!(matches!(error, MatchError::NotFound(date) if date == day(2021, 1, 2)));
        assert!(error.to_string().contains("2021-01-02"));
    }

    #[test]
    fn test_rows_above_header_ignored() {
        let mut rows = rows(&["2021-01-03"]);
        rows.insert(0, vec!["2021-01-02".to_string(), "stale".to_string()]);

        assert!(find_row_for_date(&rows, 1, day(2021, 1, 2)).is_err());
    }

    #[test]
    fn test_header_past_end() {
        let rows = rows(&["2021-01-02"]);

        assert!(matches!(
            find_row_for_date(&rows, 10, day(2021, 1, 2)),
            Err(MatchError::NotFound(_))
        ));
    }

    #[test]
    fn test_today_in_timezone() {
        let today = now_in(chrono_tz::Pacific::Kiritimati).date_naive();
        let date = today.format(DATE_FORMAT).to_string();
        let rows = rows(&[date.as_str()]);

        assert!(find_row_for_today(&rows, 0, chrono_tz::Pacific::Kiritimati).is_ok());
    }
}
