use std::ops::Deref;

use crate::{
    Bar, BollConfig, BollSeries, IndicatorError, MacdConfig, MacdSeries, Price, atr, boll,
    boll_with, ema, hhv, llv, ma, macd, macd_with, rsi, vwap,
};

/// Bars in strictly ascending timestamp order.
///
/// Construction and [`push`](Self::push) reject out-of-order or duplicate
/// timestamps, so every indicator method runs on a valid series. Derefs to
/// `[Bar]` for read access.
///
/// # Example
///
/// ```
/// use kline_ta::{Bar, BarSeries, Price};
///
/// let p = Price::from_raw;
/// let series = BarSeries::new(
///     [10, 10, 10, 10, 10]
///         .into_iter()
///         .zip(1..)
///         .map(|(c, t)| Bar::new(t, p(c), p(c), p(c), p(c)))
///         .collect(),
/// )
/// .unwrap();
///
/// assert_eq!(series.ma(3).unwrap(), [p(0), p(0), p(10), p(10), p(10)]);
/// assert_eq!(series.hhv(2).unwrap(), p(10));
/// ```
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct BarSeries {
    bars: Vec<Bar>,
}

impl BarSeries {
    /// # Errors
    ///
    /// [`IndicatorError::UnorderedSeries`] at the first bar whose timestamp
    /// is not after its predecessor's.
    pub fn new(bars: Vec<Bar>) -> Result<Self, IndicatorError> {
        for (i, pair) in bars.windows(2).enumerate() {
            check_order(i + 1, &pair[0], &pair[1])?;
        }

        Ok(Self { bars })
    }

    /// Appends a bar after the last one.
    ///
    /// # Errors
    ///
    /// [`IndicatorError::UnorderedSeries`] if `bar` is not after the last bar.
    pub fn push(&mut self, bar: Bar) -> Result<(), IndicatorError> {
        if let Some(last) = self.bars.last() {
            check_order(self.bars.len(), last, &bar)?;
        }

        self.bars.push(bar);
        Ok(())
    }

    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    #[must_use]
    pub fn into_bars(self) -> Vec<Bar> {
        self.bars
    }

    /// See [`hhv`](crate::hhv).
    ///
    /// # Errors
    ///
    /// [`IndicatorError::InvalidWindow`] if `length` is zero or longer than the series.
    pub fn hhv(&self, length: usize) -> Result<Price, IndicatorError> {
        hhv(&self.bars, length)
    }

    /// See [`llv`](crate::llv).
    ///
    /// # Errors
    ///
    /// [`IndicatorError::InvalidWindow`] if `length` is zero or longer than the series.
    pub fn llv(&self, length: usize) -> Result<Price, IndicatorError> {
        llv(&self.bars, length)
    }

    /// See [`ma`](crate::ma).
    ///
    /// # Errors
    ///
    /// [`IndicatorError::InvalidWindow`] if `length` is zero.
    pub fn ma(&self, length: usize) -> Result<Vec<Price>, IndicatorError> {
        ma(&self.bars, length)
    }

    /// See [`ema`](crate::ema).
    ///
    /// # Errors
    ///
    /// [`IndicatorError::InvalidWindow`] if `length` is zero.
    pub fn ema(&self, length: usize) -> Result<Vec<Price>, IndicatorError> {
        ema(&self.bars, length)
    }

    /// See [`macd`](crate::macd).
    #[must_use]
    pub fn macd(&self) -> MacdSeries {
        macd(&self.bars)
    }

    /// See [`macd_with`](crate::macd_with).
    #[must_use]
    pub fn macd_with(&self, config: MacdConfig) -> MacdSeries {
        macd_with(&self.bars, config)
    }

    /// See [`rsi`](crate::rsi).
    ///
    /// # Errors
    ///
    /// [`IndicatorError::InvalidWindow`] if `length` is zero.
    pub fn rsi(&self, length: usize) -> Result<Vec<i64>, IndicatorError> {
        rsi(&self.bars, length)
    }

    /// See [`boll`](crate::boll).
    ///
    /// # Errors
    ///
    /// [`IndicatorError::InvalidWindow`] if `length` is zero.
    pub fn boll(&self, length: usize) -> Result<BollSeries, IndicatorError> {
        boll(&self.bars, length)
    }

    /// See [`boll_with`](crate::boll_with).
    #[must_use]
    pub fn boll_with(&self, config: BollConfig) -> BollSeries {
        boll_with(&self.bars, config)
    }

    /// See [`atr`](crate::atr).
    ///
    /// # Errors
    ///
    /// [`IndicatorError::InvalidWindow`] if `length` is zero.
    pub fn atr(&self, length: usize) -> Result<Vec<Price>, IndicatorError> {
        atr(&self.bars, length)
    }

    /// See [`vwap`](crate::vwap).
    #[must_use]
    pub fn vwap(&self) -> Vec<Price> {
        vwap(&self.bars)
    }
}

impl Deref for BarSeries {
    type Target = [Bar];

    fn deref(&self) -> &Self::Target {
        &self.bars
    }
}

impl TryFrom<Vec<Bar>> for BarSeries {
    type Error = IndicatorError;

    fn try_from(bars: Vec<Bar>) -> Result<Self, Self::Error> {
        Self::new(bars)
    }
}

fn check_order(index: usize, previous: &Bar, bar: &Bar) -> Result<(), IndicatorError> {
    if bar.timestamp > previous.timestamp {
        return Ok(());
    }

    tracing::debug!(
        index,
        previous = previous.timestamp,
        timestamp = bar.timestamp,
        "rejecting out-of-order bar"
    );
    Err(IndicatorError::UnorderedSeries {
        index,
        previous: previous.timestamp,
        timestamp: bar.timestamp,
    })
}
