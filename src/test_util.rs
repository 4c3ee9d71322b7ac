// src/test_util.rs

use crate::{Bar, Price, Timestamp};

pub fn p(raw: i64) -> Price {
    Price::from_raw(raw)
}

pub fn prices(raws: &[i64]) -> Vec<Price> {
    raws.iter().copied().map(Price::from_raw).collect()
}

/// Convenience: bar with just a close price and timestamp (OHLC all equal to close).
pub fn bar(close: i64, time: Timestamp) -> Bar {
    ohlc(close, close, close, close, time)
}

pub fn ohlc(open: i64, high: i64, low: i64, close: i64, time: Timestamp) -> Bar {
    Bar::new(time, p(open), p(high), p(low), p(close))
}

/// One close-only bar per value, timestamps `1..`.
pub fn closes(values: &[i64]) -> Vec<Bar> {
    (1..).zip(values).map(|(t, &c)| bar(c, t)).collect()
}
