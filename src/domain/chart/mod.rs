//! Chart domain — price-history normalization for time-series renderers.

pub mod client;
pub mod normalize;
pub mod state;
pub mod wire;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use normalize::normalize;
pub use state::ChartSeriesState;

/// A single data point on a price chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Unix timestamp in seconds.
    pub time: i64,
    /// Close price of the bar.
    pub value: f64,
}

/// Errors raised by chart-data normalization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// A bar carried a timestamp no accepted format could parse.
    ///
    /// This fails the whole batch: a chart with a silently misplaced point
    /// is worse than no chart.
    #[error("Malformed timestamp: {0:?}")]
    MalformedTimestamp(String),
}
