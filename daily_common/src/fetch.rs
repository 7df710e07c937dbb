//! Transport seam for the pipeline.

use url::Url;

use crate::result::Result;

/// Retrieves the raw response body for a query URL.
///
/// Implementations issue exactly one request and return the fully buffered
/// body. Transport failures map to `DailyError::Transport`, body read failures
/// to `DailyError::BodyRead`. Any connection handle must be released before
/// `fetch` returns, on success and on error.
pub trait Fetch {
    /// Performs one GET against `url`.
    fn fetch(&self, url: &Url) -> Result<Vec<u8>>;
}
