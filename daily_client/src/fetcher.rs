//! Blocking HTTP transport for the daily quote pipeline.
//!
//! Issues exactly one GET per `fetch`, with no custom headers and no retry.
//! The `Response` is owned by `fetch` and dropped before it returns, which
//! releases the connection on the success path and on every error path.
use std::error::Error as _;
use std::time::Duration;

use daily_common::{DailyError, Fetch, Result};
use log::{debug, warn};
use reqwest::blocking::Client;
use url::Url;

/// `reqwest`-backed implementation of [`Fetch`].
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a fetcher. Without `timeout` the client's own default applies.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| DailyError::Transport(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| DailyError::Transport(describe(e)))?;

        let status = response.status();
        debug!("HTTP status {}", status);
        if !status.is_success() {
            warn!("Quote API answered {}; decoding the body anyway", status);
        }

        let body = response
            .bytes()
            .map_err(|e| DailyError::BodyRead(describe(e)))?;
        Ok(body.to_vec())
    }
}

/// One-line message for a reqwest error with its cause chain, URL stripped.
///
/// The URL carries the API key, so it never reaches the diagnostic.
fn describe(err: reqwest::Error) -> String {
    let err = err.without_url();
    let mut message = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        let text = inner.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        cause = inner.source();
    }
    message
}
