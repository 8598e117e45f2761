//! Value types returned by the api clients.

pub mod position;
pub mod rates;

pub use position::{BassetLiquidity, SupplyPosition};
pub use rates::{annualized_rate_delta, ExchangeRatePoint, ExchangeRateSnapshots};
