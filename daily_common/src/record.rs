//! Typed OHLCV record and the field parser that builds it.
//!
//! Every field comes back from the API as text. Conversion is scan-style:
//! leading whitespace is skipped and the longest numeric prefix is parsed, so
//! `"150.25 "` and `"150.25abc"` both read as `150.25`. Each conversion returns
//! a `FieldError` on failure and the [`FieldPolicy`] decides what happens next.
use chrono::{NaiveDate, NaiveTime};
use log::{debug, warn};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::error::DailyError;
use crate::extract::DATE_FORMAT;
use crate::result::Result;

/// Field label of the opening price.
pub const OPEN: &str = "1. open";
/// Field label of the session high.
pub const HIGH: &str = "2. high";
/// Field label of the session low.
pub const LOW: &str = "3. low";
/// Field label of the closing price.
pub const CLOSE: &str = "4. close";
/// Field label of the traded volume.
pub const VOLUME: &str = "5. volume";

/// One day's OHLCV data point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteRecord {
    /// Symbol the record belongs to.
    pub symbol: String,
    /// Opening price.
    pub open: f64,
    /// Session high.
    pub high: f64,
    /// Session low.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume.
    pub volume: u64,
    /// Midnight UTC of the record's date, in seconds since the Unix epoch.
    pub timestamp: i64,
}

/// Why a single field could not be converted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The label is absent from the record.
    #[error("missing")]
    Missing,
    /// The value is present but not a JSON string.
    #[error("expected text, got {0}")]
    NotText(String),
    /// The text has no usable numeric prefix.
    #[error("malformed number '{0}'")]
    Malformed(String),
}

/// What to do with a field that fails to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldPolicy {
    /// Substitute zero and log a warning.
    #[default]
    Lenient,
    /// Abort with `DailyError::InvalidField`.
    Strict,
}

impl FieldPolicy {
    fn settle<T: Default>(self, field: &'static str, parsed: Result<T, FieldError>) -> Result<T> {
        match (parsed, self) {
            (Ok(value), _) => Ok(value),
            (Err(e), FieldPolicy::Lenient) => {
                warn!("Field \"{}\" {}; using 0", field, e);
                Ok(T::default())
            }
            (Err(e), FieldPolicy::Strict) => Err(DailyError::InvalidField {
                field,
                reason: e.to_string(),
            }),
        }
    }
}

/// Builds a `QuoteRecord` from the field mapping of one date.
///
/// Under `FieldPolicy::Lenient` this never fails. A date key that is not
/// `YYYY-MM-DD` leaves `timestamp` at zero.
pub fn parse_record(
    symbol: &str,
    date: &str,
    fields: &Map<String, Value>,
    policy: FieldPolicy,
) -> Result<QuoteRecord> {
    let open = policy.settle(OPEN, price(fields, OPEN))?;
    let high = policy.settle(HIGH, price(fields, HIGH))?;
    let low = policy.settle(LOW, price(fields, LOW))?;
    let close = policy.settle(CLOSE, price(fields, CLOSE))?;
    let volume = policy.settle(VOLUME, volume(fields, VOLUME))?;

    let timestamp = match NaiveDate::parse_from_str(date, DATE_FORMAT) {
        Ok(day) => day.and_time(NaiveTime::MIN).and_utc().timestamp(),
        Err(e) => {
            debug!("Date key '{}' is not {}: {}", date, DATE_FORMAT, e);
            0
        }
    };

    Ok(QuoteRecord {
        symbol: String::from(symbol),
        open,
        high,
        low,
        close,
        volume,
        timestamp,
    })
}

/// Reads a price field.
pub fn price(fields: &Map<String, Value>, label: &str) -> Result<f64, FieldError> {
    let text = text_field(fields, label)?;
    scan_prefix(text, true)
        .and_then(|digits| digits.parse::<f64>().ok())
        .ok_or_else(|| FieldError::Malformed(String::from(text)))
}

/// Reads the volume field. Negative volumes are malformed.
pub fn volume(fields: &Map<String, Value>, label: &str) -> Result<u64, FieldError> {
    let text = text_field(fields, label)?;
    scan_prefix(text, false)
        .and_then(|digits| digits.parse::<u64>().ok())
        .ok_or_else(|| FieldError::Malformed(String::from(text)))
}

fn text_field<'a>(fields: &'a Map<String, Value>, label: &str) -> Result<&'a str, FieldError> {
    match fields.get(label) {
        Some(Value::String(text)) => Ok(text),
        Some(other) => Err(FieldError::NotText(other.to_string())),
        None => Err(FieldError::Missing),
    }
}

/// Longest numeric prefix of `text` after leading whitespace.
///
/// Accepts an optional sign and digits; with `fractional` also a decimal point
/// and an exponent. Returns `None` when no digit is found.
fn scan_prefix(text: &str, fractional: bool) -> Option<&str> {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = skip_digits(bytes, end);
    let mut digits = int_end - end;
    end = int_end;

    if fractional {
        if bytes.get(end) == Some(&b'.') {
            let frac_end = skip_digits(bytes, end + 1);
            digits += frac_end - (end + 1);
            end = frac_end;
        }
        if digits > 0 && matches!(bytes.get(end), Some(b'e' | b'E')) {
            let mut exp = end + 1;
            if matches!(bytes.get(exp), Some(b'+' | b'-')) {
                exp += 1;
            }
            let exp_end = skip_digits(bytes, exp);
            if exp_end > exp {
                end = exp_end;
            }
        }
    }

    if digits == 0 { None } else { Some(&s[..end]) }
}

fn skip_digits(bytes: &[u8], from: usize) -> usize {
    let mut at = from;
    while bytes.get(at).is_some_and(u8::is_ascii_digit) {
        at += 1;
    }
    at
}
