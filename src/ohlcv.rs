use crate::Price;

/// Bar open timestamp, seconds since the Unix epoch.
///
/// Must be strictly increasing across a series.
pub type Timestamp = i64;

/// Kline data used as input to all indicators.
///
/// Implement this on your own kline/candle type to compute indicators over
/// `&[YourKline]` without converting to [`Bar`](crate::Bar) first.
///
/// # Example
///
/// ```
/// use kline_ta::{Ohlcv, Price, Timestamp};
///
/// struct MyKline {
///     o: i64, h: i64, l: i64, c: i64,
///     ts: i64,
/// }
///
/// impl Ohlcv for MyKline {
///     fn timestamp(&self) -> Timestamp { self.ts }
///     fn open(&self) -> Price { Price::from_raw(self.o) }
///     fn high(&self) -> Price { Price::from_raw(self.h) }
///     fn low(&self) -> Price { Price::from_raw(self.l) }
///     fn close(&self) -> Price { Price::from_raw(self.c) }
/// }
/// ```
pub trait Ohlcv {
    /// Bar open time.
    fn timestamp(&self) -> Timestamp;

    /// Opening price of the bar.
    fn open(&self) -> Price;

    /// Highest price during the bar.
    fn high(&self) -> Price;

    /// Lowest price during the bar.
    fn low(&self) -> Price;

    /// Closing price of the bar.
    fn close(&self) -> Price;

    /// Units traded during the bar. Defaults to `0`.
    ///
    /// Only [`vwap`](crate::vwap) reads this value.
    fn volume(&self) -> i64 {
        0
    }

    /// Turnover: monetary value traded during the bar. Defaults to zero.
    ///
    /// Only [`vwap`](crate::vwap) reads this value.
    fn amount(&self) -> Price {
        Price::ZERO
    }
}
