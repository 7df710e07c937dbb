//! Error types shared between the library and the client binary.
//!
//! The `DailyError` enum covers every stage of the quote pipeline that can stop
//! a run: building the request, fetching, decoding, and walking the response.
//! Every variant is fatal for the binary and maps to exit status 1.
use std::io;

use thiserror::Error;

/// Unified error type for the quote pipeline.
#[derive(Error, Debug)]
pub enum DailyError {
    /// The configured endpoint is not an absolute URL.
    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint {
        /// Endpoint as given by the user.
        endpoint: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Transport-level failure (DNS, connection refused, TLS).
    #[error("Request failed: {0}")]
    Transport(String),

    /// The response arrived but its body could not be read.
    #[error("Failed to read response body: {0}")]
    BodyRead(String),

    /// The body is not valid JSON.
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The decoded body is valid JSON but not an object.
    #[error("Unexpected response shape: top-level value is not an object")]
    NotAnObject,

    /// The daily series key is absent. Carries the API notice when the body has one.
    #[error("Unexpected response shape: missing \"{key}\"{}", notice_suffix(.notice))]
    MissingSeries {
        /// Series key that was looked up.
        key: &'static str,
        /// `Error Message` / `Note` / `Information` text sent by the API instead of data.
        notice: Option<String>,
    },

    /// The daily series key holds something other than an object.
    #[error("Unexpected response shape: \"{0}\" is not an object")]
    SeriesNotObject(&'static str),

    /// The series has no entries at all.
    #[error("No data: the daily series is empty")]
    EmptySeries,

    /// The series has no entry for the requested date.
    #[error("No data for {0}")]
    NoDataForDate(String),

    /// The entry for the requested date is not an object.
    #[error("Unexpected response shape: record for {0} is not an object")]
    RecordNotObject(String),

    /// A record field could not be converted and the strict field policy is active.
    #[error("Invalid field \"{field}\": {reason}")]
    InvalidField {
        /// Field label, e.g. `1. open`.
        field: &'static str,
        /// Conversion failure.
        reason: String,
    },

    /// I/O error while writing the report.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn notice_suffix(notice: &Option<String>) -> String {
    match notice {
        Some(text) => format!(" (API says: {})", text),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_series_mentions_api_notice() {
        let err = DailyError::MissingSeries {
            key: "Time Series (Daily)",
            notice: Some(String::from("Invalid API call.")),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected response shape: missing \"Time Series (Daily)\" (API says: Invalid API call.)"
        );
    }

    #[test]
    fn missing_series_without_notice() {
        let err = DailyError::MissingSeries {
            key: "Time Series (Daily)",
            notice: None,
        };
        assert_eq!(
            err.to_string(),
            "Unexpected response shape: missing \"Time Series (Daily)\""
        );
    }
}
