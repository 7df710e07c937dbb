//! Descriptive statistics for one day's record.
//!
//! All ratios are relative to the opening price. An opening price of zero
//! (e.g. after a lenient parse of a malformed field) yields infinite or NaN
//! ratios; no value here ever panics on them, and a NaN volatility falls into
//! the `Low` tier because both threshold comparisons are false.
use serde::Serialize;
use strum_macros::Display;

use crate::record::QuoteRecord;

/// Volatility strictly above this is `High`.
pub const HIGH_VOLATILITY: f64 = 5.0;
/// Volatility strictly above this (and not `High`) is `Medium`.
pub const MEDIUM_VOLATILITY: f64 = 2.0;

/// Direction of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Close above open.
    Up,
    /// Close below open.
    Down,
    /// Close equal to open.
    Flat,
}

impl Trend {
    /// Classifies by exact comparison of close against open.
    pub fn classify(open: f64, close: f64) -> Self {
        if close > open {
            Trend::Up
        } else if close < open {
            Trend::Down
        } else {
            Trend::Flat
        }
    }
}

/// Bucketed intraday volatility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VolatilityTier {
    /// Above [`HIGH_VOLATILITY`] percent.
    High,
    /// Above [`MEDIUM_VOLATILITY`] and at most [`HIGH_VOLATILITY`] percent.
    Medium,
    /// At most [`MEDIUM_VOLATILITY`] percent.
    Low,
}

impl VolatilityTier {
    /// Buckets a volatility expressed in percent.
    pub fn classify(volatility: f64) -> Self {
        if volatility > HIGH_VOLATILITY {
            VolatilityTier::High
        } else if volatility > MEDIUM_VOLATILITY {
            VolatilityTier::Medium
        } else {
            VolatilityTier::Low
        }
    }
}

/// Derived values for one record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// `close - open`.
    pub price_change: f64,
    /// `price_change / open * 100`.
    pub percent_change: f64,
    /// `(high - low) / open * 100`.
    pub volatility: f64,
    /// Session direction.
    pub trend: Trend,
    /// Volatility bucket.
    pub tier: VolatilityTier,
}

/// Computes the analysis of `record`.
pub fn analyze(record: &QuoteRecord) -> Analysis {
    let price_change = record.close - record.open;
    let percent_change = price_change / record.open * 100.0;
    let volatility = (record.high - record.low) / record.open * 100.0;

    Analysis {
        price_change,
        percent_change,
        volatility,
        trend: Trend::classify(record.open, record.close),
        tier: VolatilityTier::classify(volatility),
    }
}
