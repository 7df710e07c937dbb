//! Daily Quote Client — fetches one symbol's daily price series from Alpha Vantage,
//! picks one day's OHLCV record and prints its price change, intraday volatility,
//! trend and volatility tier.
//!
//! Usage example (CLI):
//! ```bash
//! ALPHAVANTAGE_API_KEY=... daily_client --symbol IBM --latest
//! ```
//!
//! By default the record for the local calendar date is used, which fails outside
//! trading days; `--latest` takes the most recent date the API has. Any failure
//! prints one diagnostic line to stderr and exits with status 1. Logging goes to
//! stderr as well and is tuned with `RUST_LOG`.
#![warn(missing_docs)]
mod args;
mod fetcher;

use crate::args::Args;
use crate::fetcher::HttpFetcher;
use chrono::Local;
use clap::Parser;
use daily_common::Result;
use daily_common::pipeline::{self, RunOptions};
use daily_common::request::QuoteQuery;
use log::debug;
use std::io;
use std::process::ExitCode;
use std::time::Duration;

fn run(args: &Args) -> Result<()> {
    let query = QuoteQuery::new(&args.symbol, &args.api_key).with_endpoint(&args.endpoint);
    let options = RunOptions {
        selection: args.selection(),
        policy: args.policy(),
    };
    debug!("Run options: {:?}", options);

    let fetcher = HttpFetcher::new(args.timeout_secs.map(Duration::from_secs))?;
    let today = Local::now().date_naive();
    let report = pipeline::run(&fetcher, &query, options, today)?;

    report.write_to(&mut io::stdout().lock(), args.format)
}

fn main() -> ExitCode {
    init_logger();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("Run failed: {:?}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
