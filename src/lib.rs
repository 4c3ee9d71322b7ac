//! Batch technical analysis indicators over kline (OHLCV) series.
//!
//! Prices are fixed-point [`Price`] values with three decimal places, and
//! every indicator uses integer arithmetic with truncating division, so
//! results are exact and reproducible across platforms.
//!
//! Indicators are free functions over `&[B]` for any `B:` [`Ohlcv`], each
//! returning one value per input bar. Positions without enough history hold
//! [`Price::ZERO`] (`0` for [`rsi`]). [`BarSeries`] wraps validated bars and
//! exposes the same indicators as methods.
//!
//! | Indicator | Function | Output |
//! |-----------|----------|--------|
//! | Highest high | [`hhv`] | single [`Price`] |
//! | Lowest low | [`llv`] | single [`Price`] |
//! | Simple moving average | [`ma`] | `Vec<Price>` |
//! | Exponential moving average | [`ema`] | `Vec<Price>` |
//! | MACD | [`macd`], [`macd_with`] | [`MacdSeries`] |
//! | Relative strength index | [`rsi`] | `Vec<i64>` |
//! | Bollinger bands | [`boll`], [`boll_with`] | [`BollSeries`] |
//! | Average true range | [`atr`] | `Vec<Price>` |
//! | Volume weighted average price | [`vwap`] | `Vec<Price>` |
//!
//! Each indicator call opens a `trace`-level [`tracing`] span; rejected
//! inputs are logged at `debug` before the error is returned. The crate never
//! installs a subscriber.

mod atr;
mod bar;
mod boll;
mod ema;
mod error;
mod extremum;
mod ma;
mod macd;
mod ohlcv;
mod price;
mod ring_buffer;
mod rsi;
mod series;
mod vwap;
mod window;

pub use crate::bar::Bar;
pub use crate::error::IndicatorError;
pub use crate::ohlcv::{Ohlcv, Timestamp};
pub use crate::price::{PRICE_SCALE, ParsePriceError, Price, isqrt};
pub use crate::series::BarSeries;

pub use crate::atr::{atr, true_range};
pub use crate::boll::{BollConfig, BollSeries, boll, boll_with};
pub use crate::ema::ema;
pub use crate::extremum::{hhv, llv};
pub use crate::ma::ma;
pub use crate::macd::{MacdConfig, MacdConfigBuilder, MacdSeries, macd, macd_with};
pub use crate::rsi::rsi;
pub use crate::vwap::vwap;

#[cfg(test)]
mod test_util;
