//! Exchange rate snapshots and the annualized rate estimate.

use crate::error::{ApiError, Result};

/// One exchange-rate observation from the subgraph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExchangeRatePoint {
    /// Credits-to-underlying exchange rate.
    pub rate: f64,
    /// Unix timestamp of the observation.
    pub timestamp: u64,
}

impl ExchangeRatePoint {
    pub(crate) fn from_gql(rate: &str, timestamp: i64) -> Result<Self> {
        let rate: f64 = rate
            .parse()
            .map_err(|_| ApiError::Parse(format!("Invalid exchange rate: {rate}")))?;
        Ok(Self {
            rate,
            timestamp: timestamp as u64,
        })
    }
}

/// The latest and 24h-old exchange rates for a savings contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExchangeRateSnapshots {
    pub latest: ExchangeRatePoint,
    pub day_ago: ExchangeRatePoint,
}

impl ExchangeRateSnapshots {
    /// Annualized APR estimate from this pair of snapshots, as a
    /// percentage-scaled figure.
    pub fn annualized_apr(&self) -> f64 {
        annualized_rate_delta(self.latest.rate, self.day_ago.rate)
    }
}

/// Extrapolate an annualized percentage rate from a single 24-hour exchange
/// rate delta: `(latest - previous) * 365 * 1000`.
///
/// A one-sample extrapolation, not a statistically robust estimator;
/// best-effort telemetry only.
pub fn annualized_rate_delta(latest: f64, previous: f64) -> f64 {
    (latest - previous) * 365.0 * 1000.0
}
