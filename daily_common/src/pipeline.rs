//! End-to-end run: build the URL, fetch once, decode, extract, parse, analyse.
use chrono::NaiveDate;
use log::{debug, info};

use crate::decode::decode;
use crate::extract::{DateSelection, extract_record};
use crate::fetch::Fetch;
use crate::record::{FieldPolicy, parse_record};
use crate::report::Report;
use crate::request::QuoteQuery;
use crate::result::Result;

/// Knobs of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunOptions {
    /// Which date of the series to report on.
    pub selection: DateSelection,
    /// Handling of fields that fail to convert.
    pub policy: FieldPolicy,
}

/// Runs the pipeline against `fetcher` and returns the report.
///
/// `today` is the caller's local date, used by `DateSelection::Today`.
/// Nothing is written anywhere; the caller decides how to render the report.
pub fn run<F: Fetch + ?Sized>(
    fetcher: &F,
    query: &QuoteQuery,
    options: RunOptions,
    today: NaiveDate,
) -> Result<Report> {
    let url = query.url()?;
    info!("Requesting {} for {}", crate::request::FUNCTION, query.symbol);

    let body = fetcher.fetch(&url)?;
    debug!("Received {} bytes", body.len());

    let root = decode(&body)?;
    let (date, fields) = extract_record(&root, options.selection, today)?;
    info!("Using record dated {}", date);

    let record = parse_record(&query.symbol, &date, fields, options.policy)?;
    Ok(Report::new(date, record))
}
