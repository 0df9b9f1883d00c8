//! Ticker state container — app-owned, SDK-provided update logic.

use super::MarketTrend;
use std::collections::HashMap;

/// Live index LTP state behind the scrolling price ticker.
///
/// The app owns an instance and feeds it each poll result. Change direction
/// prefers the previous session close (fetched once from price history);
/// when no close is known it falls back to the previous poll snapshot.
///
/// On error the container clears its quotes: stale prices are never left
/// displayed.
#[derive(Debug, Clone, Default)]
pub struct TickerState {
    current: HashMap<String, f64>,
    previous: HashMap<String, f64>,
    prev_closes: HashMap<String, f64>,
}

impl TickerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a poll result, rotating the previous snapshot.
    pub fn apply_quotes(&mut self, quotes: HashMap<String, f64>) {
        if !self.current.is_empty() {
            self.previous = std::mem::take(&mut self.current);
        }
        self.current = quotes;
    }

    /// Record an index's previous session close.
    pub fn set_prev_close(&mut self, name: impl Into<String>, close: f64) {
        self.prev_closes.insert(name.into(), close);
    }

    /// Clear displayed quotes after a failed poll. Previous closes are kept;
    /// they stay valid for the whole session.
    pub fn apply_error(&mut self) {
        self.current.clear();
        self.previous.clear();
    }

    pub fn ltp(&self, name: &str) -> Option<f64> {
        self.current.get(name).copied()
    }

    pub fn quotes(&self) -> &HashMap<String, f64> {
        &self.current
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Direction of the current LTP for an index, previous close first,
    /// previous snapshot as fallback. `None` when there is no reference.
    pub fn change_direction(&self, name: &str) -> Option<MarketTrend> {
        let ltp = self.ltp(name)?;
        let reference = self
            .prev_closes
            .get(name)
            .or_else(|| self.previous.get(name))?;
        Some(MarketTrend::from_change(ltp - reference))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quotes(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_first_poll_has_no_direction() {
        let mut state = TickerState::new();
        state.apply_quotes(quotes(&[("NIFTY 50", 21700.0)]));
        assert_eq!(state.ltp("NIFTY 50"), Some(21700.0));
        assert_eq!(state.change_direction("NIFTY 50"), None);
    }

    #[test]
    fn test_direction_from_snapshot_fallback() {
        let mut state = TickerState::new();
        state.apply_quotes(quotes(&[("NIFTY 50", 21700.0)]));
        state.apply_quotes(quotes(&[("NIFTY 50", 21710.0)]));
        assert_eq!(state.change_direction("NIFTY 50"), Some(MarketTrend::Up));
        state.apply_quotes(quotes(&[("NIFTY 50", 21650.0)]));
        assert_eq!(state.change_direction("NIFTY 50"), Some(MarketTrend::Down));
    }

    #[test]
    fn test_prev_close_takes_priority() {
        let mut state = TickerState::new();
        state.set_prev_close("SENSEX", 72000.0);
        state.apply_quotes(quotes(&[("SENSEX", 71900.0)]));
        state.apply_quotes(quotes(&[("SENSEX", 71950.0)]));
        // Above the last poll but still below yesterday's close.
        assert_eq!(state.change_direction("SENSEX"), Some(MarketTrend::Down));
    }

    #[test]
    fn test_error_clears_quotes_keeps_closes() {
        let mut state = TickerState::new();
        state.set_prev_close("SENSEX", 72000.0);
        state.apply_quotes(quotes(&[("SENSEX", 71900.0)]));
        state.apply_error();
        assert!(state.is_empty());
        assert_eq!(state.change_direction("SENSEX"), None);
        state.apply_quotes(quotes(&[("SENSEX", 72100.0)]));
        assert_eq!(state.change_direction("SENSEX"), Some(MarketTrend::Up));
    }
}
