//! Chart series normalization — raw bars to ordered `(time, value)` points.

use super::wire::PriceBar;
use super::{ChartError, ChartPoint};
use chrono::{DateTime, NaiveDateTime};

/// Naive (offset-less) formats the broker feed has been seen to emit.
/// Naive timestamps are treated as UTC.
const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parse a bar timestamp to epoch milliseconds.
fn parse_timestamp(raw: &str) -> Result<i64, ChartError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.timestamp_millis());
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(naive.and_utc().timestamp_millis());
        }
    }
    Err(ChartError::MalformedTimestamp(raw.to_string()))
}

/// Convert raw bars into a strictly ordered chart series.
///
/// Bars are stable-sorted ascending by parsed timestamp (ties keep input
/// order), then mapped to `{ time: floor(millis / 1000), value: close }`.
/// Bars that collapse onto the same second keep the last value seen, so the
/// output is strictly increasing in `time` and safe to hand to a renderer
/// that rejects duplicate keys.
///
/// Any unparsable timestamp fails the whole batch with
/// [`ChartError::MalformedTimestamp`].
pub fn normalize(bars: &[PriceBar]) -> Result<Vec<ChartPoint>, ChartError> {
    let mut parsed: Vec<(i64, f64)> = bars
        .iter()
        .map(|bar| parse_timestamp(&bar.timestamp).map(|millis| (millis, bar.close)))
        .collect::<Result<_, _>>()?;

    parsed.sort_by_key(|(millis, _)| *millis);

    let mut points: Vec<ChartPoint> = Vec::with_capacity(parsed.len());
    for (millis, close) in parsed {
        let time = millis.div_euclid(1000);
        match points.last_mut() {
            // Duplicate second: the later bar wins.
            Some(last) if last.time == time => last.value = close,
            _ => points.push(ChartPoint { time, value: close }),
        }
    }
    Ok(points)
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
            volume: None,
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(&[]).unwrap(), vec![]);
    }

    #[test]
    fn test_sorts_ascending_by_timestamp() {
        let points = normalize(&[
            bar("2024-01-02T00:00:00Z", 100.0),
            bar("2024-01-01T00:00:00Z", 90.0),
        ])
        .unwrap();
        assert_eq!(
            points,
            vec![
                ChartPoint { time: 1704067200, value: 90.0 },
                ChartPoint { time: 1704153600, value: 100.0 },
            ]
        );
    }

    #[test]
    fn test_time_is_nondecreasing_and_length_preserved() {
        let bars: Vec<PriceBar> = (0..20)
            .rev()
            .map(|i| bar(&format!("2024-03-0{}T0{}:00:00Z", i % 9 + 1, i % 10), i as f64))
            .collect();
        let points = normalize(&bars).unwrap();
        assert_eq!(points.len(), bars.len());
        assert!(points.windows(2).all(|w| w[0].time <= w[1].time));
    }

    #[test]
    fn test_offset_timestamps() {
        // IST market open, 2024-01-01 09:15 +05:30 == 03:45 UTC.
        let points = normalize(&[bar("2024-01-01T09:15:00+05:30", 21500.5)]).unwrap();
        assert_eq!(points[0].time, 1704080700);
        assert_eq!(points[0].value, 21500.5);
    }

    #[test]
    fn test_naive_timestamps_assumed_utc() {
        let points = normalize(&[
            bar("2024-01-01 09:15:00", 1.0),
            bar("2024-01-01 09:16", 2.0),
            bar("2024-01-01T09:17:00", 3.0),
        ])
        .unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].time, 1704100500);
        assert_eq!(points[1].time - points[0].time, 60);
    }

    #[test]
    fn test_malformed_timestamp_fails_whole_batch() {
        let err = normalize(&[
            bar("2024-01-01T00:00:00Z", 1.0),
            bar("not-a-date", 2.0),
        ])
        .unwrap_err();
        assert_eq!(err, ChartError::MalformedTimestamp("not-a-date".to_string()));
    }

    #[test]
    fn test_duplicate_second_keeps_last_value() {
        let points = normalize(&[
            bar("2024-01-01T00:00:00Z", 1.0),
            bar("2024-01-01T00:00:00.400Z", 2.0),
            bar("2024-01-01T00:00:01Z", 3.0),
        ])
        .unwrap();
        assert_eq!(
            points,
            vec![
                ChartPoint { time: 1704067200, value: 2.0 },
                ChartPoint { time: 1704067201, value: 3.0 },
            ]
        );
    }

    #[test]
    fn test_stable_ties_by_input_order() {
        // Same parsed instant: the later input bar is the survivor.
        let points = normalize(&[
            bar("2024-01-01T00:00:00Z", 10.0),
            bar("2024-01-01T00:00:00Z", 20.0),
        ])
        .unwrap();
        assert_eq!(points, vec![ChartPoint { time: 1704067200, value: 20.0 }]);
    }

    #[test]
    fn test_pre_epoch_floor() {
        // div_euclid floors toward negative infinity, matching the source's
        // Math.floor over millis.
        let points = normalize(&[bar("1969-12-31T23:59:59.500Z", 1.0)]).unwrap();
        assert_eq!(points[0].time, -1);
    }
}
