//! Command-line arguments for the daily quote client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use chrono::NaiveDate;
use clap::Parser;
use daily_common::extract::DateSelection;
use daily_common::record::FieldPolicy;
use daily_common::report::OutputFormat;
use daily_common::request::DEFAULT_ENDPOINT;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Equity symbol to analyse.
    #[clap(long, env = "DAILY_SYMBOL", default_value = "IBM")]
    pub symbol: String,

    /// Alpha Vantage API key.
    #[clap(long, env = "ALPHAVANTAGE_API_KEY", default_value = "demo", hide_env_values = true)]
    pub api_key: String,

    /// Query endpoint.
    #[clap(long, env = "ALPHAVANTAGE_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Report on the most recent date in the series instead of today.
    #[clap(long, conflicts_with = "date")]
    pub latest: bool,

    /// Report on a specific date (YYYY-MM-DD).
    #[clap(long)]
    pub date: Option<NaiveDate>,

    /// Fail on malformed fields instead of treating them as zero.
    #[clap(long)]
    pub strict: bool,

    /// Output format.
    #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Overall request timeout in seconds. The HTTP client default applies when unset.
    #[clap(long)]
    pub timeout_secs: Option<u64>,
}

impl Args {
    /// Date selection implied by `--latest` / `--date`.
    pub fn selection(&self) -> DateSelection {
        match (self.latest, self.date) {
            (true, _) => DateSelection::Latest,
            (false, Some(date)) => DateSelection::On(date),
            (false, None) => DateSelection::Today,
        }
    }

    /// Field policy implied by `--strict`.
    pub fn policy(&self) -> FieldPolicy {
        if self.strict {
            FieldPolicy::Strict
        } else {
            FieldPolicy::Lenient
        }
    }
}
