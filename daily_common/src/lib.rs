//!
//! Daily quote analysis shared by the client binary.
//!
//! This crate aggregates:
//! - `error` — unified error type `DailyError` used across the workspace.
//! - `result` — handy `Result<T, DailyError>` alias.
//! - `request` — query URL construction for the daily series endpoint.
//! - `fetch` — the `Fetch` transport trait.
//! - `decode` — response body to JSON object.
//! - `extract` — locating the record for the selected date.
//! - `record` — `QuoteRecord` and the text field parser.
//! - `analysis` — price change, volatility, trend and tier.
//! - `report` — text and JSON rendering.
//! - `pipeline` — the whole run wired together.
#![warn(missing_docs)]
pub mod analysis;
pub mod decode;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod pipeline;
pub mod record;
pub mod report;
pub mod request;
pub mod result;

pub use error::DailyError;
pub use fetch::Fetch;
pub use result::Result;
