//! Chart state container — app-owned, SDK-provided update logic.

use super::wire::PriceBar;
use super::{normalize, ChartError, ChartPoint};
use crate::shared::{Interval, SymbolToken};
use std::collections::HashMap;

/// Normalized chart series per `(scrip, interval)`.
///
/// The app owns an instance of this type; each fetch result is pushed
/// through [`apply_bars`](Self::apply_bars), which runs the normalizer so
/// only ordered, deduplicated series ever reach a renderer.
///
/// On error the affected series is cleared: stale curves are never left
/// displayed.
#[derive(Debug, Clone, Default)]
pub struct ChartSeriesState {
    series: HashMap<(SymbolToken, Interval), Vec<ChartPoint>>,
}

impl ChartSeriesState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a freshly fetched batch and replace the series for this key.
    ///
    /// A malformed batch clears the series and propagates the error.
    pub fn apply_bars(
        &mut self,
        token: SymbolToken,
        interval: Interval,
        bars: &[PriceBar],
    ) -> Result<(), ChartError> {
        match normalize(bars) {
            Ok(points) => {
                self.series.insert((token, interval), points);
                Ok(())
            }
            Err(e) => {
                self.series.remove(&(token, interval));
                Err(e)
            }
        }
    }

    /// Append a live point, or overwrite the tail when the second matches.
    pub fn apply_point(&mut self, token: SymbolToken, interval: Interval, point: ChartPoint) {
        let entry = self.series.entry((token, interval)).or_default();
        if let Some(last) = entry.last_mut() {
            if last.time == point.time {
                last.value = point.value;
                return;
            }
        }
        entry.push(point);
    }

    /// Clear one series after a failed fetch.
    pub fn apply_error(&mut self, token: &SymbolToken, interval: Interval) {
        self.series.remove(&(token.clone(), interval));
    }

    pub fn get(&self, token: &SymbolToken, interval: Interval) -> Option<&[ChartPoint]> {
        self.series
            .get(&(token.clone(), interval))
            .map(Vec::as_slice)
    }

    pub fn clear(&mut self) {
        self.series.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(timestamp: &str, close: f64) -> PriceBar {
        PriceBar {
            timestamp: timestamp.to_string(),
            open: close,
            high: close,
            low: close,
            close,
            volume: Some(1000),
        }
    }

    #[test]
    fn test_apply_bars_normalizes() {
        let mut state = ChartSeriesState::new();
        let token = SymbolToken::from("3045");
        state
            .apply_bars(
                token.clone(),
                Interval::Day1,
                &[
                    bar("2024-01-02T00:00:00Z", 100.0),
                    bar("2024-01-01T00:00:00Z", 90.0),
                ],
            )
            .unwrap();
        let series = state.get(&token, Interval::Day1).unwrap();
        assert_eq!(series[0].value, 90.0);
        assert_eq!(series[1].value, 100.0);
    }

    #[test]
    fn test_malformed_batch_clears_series() {
        let mut state = ChartSeriesState::new();
        let token = SymbolToken::from("3045");
        state
            .apply_bars(token.clone(), Interval::Day1, &[bar("2024-01-01T00:00:00Z", 90.0)])
            .unwrap();
        let err = state
            .apply_bars(token.clone(), Interval::Day1, &[bar("garbage", 1.0)])
            .unwrap_err();
        assert!(matches!(err, ChartError::MalformedTimestamp(_)));
        assert!(state.get(&token, Interval::Day1).is_none());
    }

    #[test]
    fn test_apply_point_overwrites_same_second() {
        let mut state = ChartSeriesState::new();
        let token = SymbolToken::from("3045");
        state.apply_point(token.clone(), Interval::Minute1, ChartPoint { time: 60, value: 1.0 });
        state.apply_point(token.clone(), Interval::Minute1, ChartPoint { time: 60, value: 2.0 });
        state.apply_point(token.clone(), Interval::Minute1, ChartPoint { time: 120, value: 3.0 });
        let series = state.get(&token, Interval::Minute1).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].value, 2.0);
    }

    #[test]
    fn test_series_keyed_by_interval() {
        let mut state = ChartSeriesState::new();
        let token = SymbolToken::from("3045");
        state.apply_point(token.clone(), Interval::Minute1, ChartPoint { time: 60, value: 1.0 });
        assert!(state.get(&token, Interval::Day1).is_none());
    }
}
