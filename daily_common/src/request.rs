//! Query URL construction for the daily time-series endpoint.
//!
//! A `QuoteQuery` holds the endpoint, the symbol and the API key and turns them
//! into a single GET URL. Nothing about the symbol or the key is validated here;
//! a bad key only shows up later as an API notice in the response body.
use url::Url;

use crate::error::DailyError;
use crate::result::Result;

/// Public Alpha Vantage query endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://www.alphavantage.co/query";
/// API function requested by every query.
pub const FUNCTION: &str = "TIME_SERIES_DAILY";

/// Parameters of one daily series request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteQuery {
    /// Base endpoint the query parameters are appended to.
    pub endpoint: String,
    /// Equity symbol, e.g. `IBM`.
    pub symbol: String,
    /// API credential.
    pub api_key: String,
}

impl QuoteQuery {
    /// Creates a query against [`DEFAULT_ENDPOINT`].
    pub fn new(symbol: &str, api_key: &str) -> Self {
        QuoteQuery {
            endpoint: String::from(DEFAULT_ENDPOINT),
            symbol: String::from(symbol),
            api_key: String::from(api_key),
        }
    }

    /// Replaces the endpoint.
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = String::from(endpoint);
        self
    }

    /// Builds `<endpoint>?function=TIME_SERIES_DAILY&symbol=..&apikey=..`.
    ///
    /// Parameters are percent-encoded. Fails only when the endpoint is not an
    /// absolute URL.
    pub fn url(&self) -> Result<Url> {
        Url::parse_with_params(
            &self.endpoint,
            &[
                ("function", FUNCTION),
                ("symbol", self.symbol.as_str()),
                ("apikey", self.api_key.as_str()),
            ],
        )
        .map_err(|e| DailyError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_daily_series_url() {
        let url = QuoteQuery::new("IBM", "demo").url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.alphavantage.co/query?function=TIME_SERIES_DAILY&symbol=IBM&apikey=demo"
        );
    }

    #[test]
    fn encodes_parameters() {
        let url = QuoteQuery::new("BRK B", "a&b=c").url().unwrap();
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(pairs[1], (String::from("symbol"), String::from("BRK B")));
        assert_eq!(pairs[2], (String::from("apikey"), String::from("a&b=c")));
    }

    #[test]
    fn empty_key_is_not_rejected() {
        assert!(QuoteQuery::new("IBM", "").url().is_ok());
    }

    #[test]
    fn custom_endpoint() {
        let url = QuoteQuery::new("IBM", "k")
            .with_endpoint("http://127.0.0.1:9000/query")
            .url()
            .unwrap();
        assert_eq!(url.host_str(), Some("127.0.0.1"));
        assert_eq!(url.port(), Some(9000));
    }

    #[test]
    fn relative_endpoint_is_rejected() {
        let err = QuoteQuery::new("IBM", "k")
            .with_endpoint("query")
            .url()
            .unwrap_err();
        assert!(matches!(err, DailyError::InvalidEndpoint { .. }));
    }
}
