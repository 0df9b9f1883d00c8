//! PCR classification — symbol cleaning, bucketing, per-bucket ranking.

use super::{PcrCategory, PcrRecord, PcrRow, SegregatedPcr};
use std::cmp::Ordering;

/// Maximum entries kept per sentiment bucket.
pub const TOP_PER_BUCKET: usize = 2;

const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Whether `s` ends with a `<DD><MMM><YY>FUT` contract-expiry token.
fn has_expiry_suffix(s: &str) -> bool {
    // 2 digits + 3-letter month + 2 digits + "FUT" = 10 bytes, all ASCII.
    if s.len() < 10 || !s.is_ascii() || !s.ends_with("FUT") {
        return false;
    }
    let expiry = &s[s.len() - 10..s.len() - 3];
    let day = &expiry[..2];
    let month = &expiry[2..5];
    let year = &expiry[5..];
    day.bytes().all(|b| b.is_ascii_digit())
        && year.bytes().all(|b| b.is_ascii_digit())
        && MONTHS.contains(&month)
}

/// Strip trailing contract-expiry tokens from a futures trading symbol.
///
/// `"DALBHARAT30DEC25FUT"` → `"DALBHARAT"`. Symbols without the suffix pass
/// through unchanged. Stripping repeats until no suffix remains, so cleaning
/// is idempotent even for pathological symbols.
pub fn clean_trading_symbol(symbol: &str) -> &str {
    let mut cleaned = symbol;
    while has_expiry_suffix(cleaned) {
        cleaned = &cleaned[..cleaned.len() - 10];
    }
    cleaned
}

fn stable_sort_by_key(records: &mut [PcrRecord], key: impl Fn(&PcrRecord) -> f64) {
    // NaN pcr values never survive bucketing, so Equal is unreachable noise.
    records.sort_by(|a, b| key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal));
}

/// Segregate PCR rows into sentiment buckets with per-bucket ranking.
///
/// Cleaning and filtering happen first: expiry suffixes are stripped, rows
/// with an empty cleaned symbol or a null `pcr` are dropped. Bucketing uses
/// [`PcrCategory::of`]; non-positive ratios land in no bucket. Each bucket is
/// ranked by its own comparator (stable, so ties keep input order) and
/// truncated to [`TOP_PER_BUCKET`]:
///
/// - oversold: ascending — most oversold first
/// - bearish: descending
/// - neutral: closest to parity (`|1 − pcr|`) first
/// - bullish: descending — highest ratio first
pub fn classify(rows: Vec<PcrRow>) -> SegregatedPcr {
    let mut result = SegregatedPcr::default();

    for row in rows {
        let symbol = clean_trading_symbol(&row.trading_symbol);
        if symbol.is_empty() {
            continue;
        }
        let Some(pcr) = row.pcr else { continue };
        let Some(category) = PcrCategory::of(pcr) else {
            continue;
        };

        let record = PcrRecord {
            trading_symbol: symbol.to_string(),
            pcr,
        };
        match category {
            PcrCategory::Oversold => result.oversold.push(record),
            PcrCategory::Bearish => result.bearish.push(record),
            PcrCategory::Neutral => result.neutral.push(record),
            PcrCategory::Bullish => result.bullish.push(record),
        }
    }

    stable_sort_by_key(&mut result.oversold, |r| r.pcr);
    stable_sort_by_key(&mut result.bearish, |r| -r.pcr);
    stable_sort_by_key(&mut result.neutral, |r| (1.0 - r.pcr).abs());
    stable_sort_by_key(&mut result.bullish, |r| -r.pcr);

    result.oversold.truncate(TOP_PER_BUCKET);
    result.bearish.truncate(TOP_PER_BUCKET);
    result.neutral.truncate(TOP_PER_BUCKET);
    result.bullish.truncate(TOP_PER_BUCKET);

    result
}
