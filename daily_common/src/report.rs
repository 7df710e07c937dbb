//! Rendering of the final report.
//!
//! The text layout is fixed: header with symbol and date, then open, close,
//! high, low, volume, change, volatility, trend and volatility tier, one per
//! line. Prices and ratios use two decimals.
use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use crate::analysis::{Analysis, analyze};
use crate::error::DailyError;
use crate::record::QuoteRecord;
use crate::result::Result;

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum OutputFormat {
    /// Human readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON document.
    Json,
}

/// Record and analysis for one symbol and date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Date key the record was taken from.
    pub date: String,
    /// Parsed record.
    pub record: QuoteRecord,
    /// Derived statistics.
    pub analysis: Analysis,
}

impl Report {
    /// Analyses `record` and wraps the result.
    pub fn new(date: String, record: QuoteRecord) -> Self {
        let analysis = analyze(&record);
        Report {
            date,
            record,
            analysis,
        }
    }

    /// Writes the report in `format`.
    pub fn write_to<W: Write>(&self, out: &mut W, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Text => self.write_text(out)?,
            OutputFormat::Json => self.write_json(out)?,
        }
        out.flush()?;
        Ok(())
    }

    fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let r = &self.record;
        let a = &self.analysis;
        writeln!(out, "=== {} daily analysis ({}) ===", r.symbol, self.date)?;
        writeln!(out, "Open: {:.2}", r.open)?;
        writeln!(out, "Close: {:.2}", r.close)?;
        writeln!(out, "High: {:.2}", r.high)?;
        writeln!(out, "Low: {:.2}", r.low)?;
        writeln!(out, "Volume: {}", r.volume)?;
        writeln!(out, "Change: {:.2} ({:.2}%)", a.price_change, a.percent_change)?;
        writeln!(out, "Volatility: {:.2}%", a.volatility)?;
        writeln!(out, "Trend: {}", a.trend)?;
        writeln!(out, "Volatility tier: {}", a.tier)?;
        Ok(())
    }

    fn write_json<W: Write>(&self, out: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)
            .map_err(|e| DailyError::Io(io::Error::from(e)))?;
        writeln!(out)?;
        Ok(())
    }
}
