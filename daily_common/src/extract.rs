//! Locating one day's record inside the decoded response.
//!
//! The response carries a `"Time Series (Daily)"` object keyed by `YYYY-MM-DD`
//! dates, each holding an object of text-encoded fields. `DateSelection`
//! decides which key is looked up:
//!
//! - `Today` — the caller's local calendar date. The API usually lags behind
//!   the wall clock (weekends, holidays, before the close), so this fails often.
//! - `Latest` — the greatest date key. ISO dates order lexicographically.
//! - `On(date)` — an explicit date.
use chrono::NaiveDate;
use log::debug;
use serde_json::{Map, Value};

use crate::error::DailyError;
use crate::result::Result;

/// Key of the daily series in the top-level object.
pub const SERIES_KEY: &str = "Time Series (Daily)";
/// Keys the API uses to explain why no data was returned.
pub const NOTICE_KEYS: [&str; 3] = ["Error Message", "Note", "Information"];
/// Date key format used by the series.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Which date of the series to analyse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateSelection {
    /// Local calendar date of the run.
    #[default]
    Today,
    /// Most recent date present in the series.
    Latest,
    /// A specific date.
    On(NaiveDate),
}

/// Returns the series object, or a shape error explaining why it is unusable.
pub fn series(root: &Map<String, Value>) -> Result<&Map<String, Value>> {
    match root.get(SERIES_KEY) {
        Some(Value::Object(series)) => Ok(series),
        Some(_) => Err(DailyError::SeriesNotObject(SERIES_KEY)),
        None => Err(DailyError::MissingSeries {
            key: SERIES_KEY,
            notice: api_notice(root),
        }),
    }
}

/// First string value found under one of [`NOTICE_KEYS`].
pub fn api_notice(root: &Map<String, Value>) -> Option<String> {
    NOTICE_KEYS
        .iter()
        .find_map(|key| root.get(*key).and_then(Value::as_str))
        .map(String::from)
}

/// Resolves `selection` to a date key of `series`.
///
/// `today` is only consulted for `DateSelection::Today`. The returned key is not
/// guaranteed to exist in `series` except for `Latest`.
pub fn resolve_date(
    series: &Map<String, Value>,
    selection: DateSelection,
    today: NaiveDate,
) -> Result<String> {
    match selection {
        DateSelection::Today => Ok(today.format(DATE_FORMAT).to_string()),
        DateSelection::On(date) => Ok(date.format(DATE_FORMAT).to_string()),
        DateSelection::Latest => series
            .keys()
            .max()
            .cloned()
            .ok_or(DailyError::EmptySeries),
    }
}

/// Walks `root` down to the field mapping of the selected date.
///
/// Returns the resolved date key together with the record.
pub fn extract_record(
    root: &Map<String, Value>,
    selection: DateSelection,
    today: NaiveDate,
) -> Result<(String, &Map<String, Value>)> {
    let series = series(root)?;
    debug!("Daily series holds {} entries", series.len());

    let date = resolve_date(series, selection, today)?;
    match series.get(&date) {
        Some(Value::Object(record)) => Ok((date, record)),
        Some(_) => Err(DailyError::RecordNotObject(date)),
        None => Err(DailyError::NoDataForDate(date)),
    }
}
