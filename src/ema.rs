use std::num::NonZero;

use crate::{IndicatorError, Ohlcv, Price, window::require_length};

/// Exponential Moving Average (EMA) of the closing price.
///
/// Seeded with the first close, then
///
/// ```text
/// ema[i] = (close[i] × 2 + ema[i-1] × (n - 1)) / (n + 1)
/// ```
///
/// which is the smoothing factor `α = 2 / (n + 1)` applied in integer
/// arithmetic: both products are formed before the single truncating
/// division. Every position is defined, there is no warm-up gap.
///
/// # Errors
///
/// [`IndicatorError::InvalidWindow`] if `length` is zero.
///
/// # Example
///
/// ```
/// use kline_ta::{Bar, Price, ema};
///
/// let bars: Vec<Bar> = [10, 20, 10]
///     .into_iter()
///     .zip(1..)
///     .map(|(c, t)| {
///         let c = Price::from_raw(c);
///         Bar::new(t, c, c, c, c)
///     })
///     .collect();
///
/// let out = ema(&bars, 2).unwrap();
/// assert_eq!(out.iter().map(|p| p.raw()).collect::<Vec<_>>(), [10, 16, 12]);
/// ```
#[tracing::instrument(level = "trace", skip(bars), fields(bars = bars.len()))]
pub fn ema<B: Ohlcv>(bars: &[B], length: usize) -> Result<Vec<Price>, IndicatorError> {
    let smoothing = Smoothing::new(require_length(length, bars.len())?);

    Ok(exponential_average(bars.iter().map(Ohlcv::close), smoothing))
}

/// EMA weights for a period of `n`: new value `2`, previous average `n - 1`,
/// divisor `n + 1`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Smoothing {
    period: i128,
}

impl Smoothing {
    pub(crate) fn new(period: NonZero<usize>) -> Self {
        Self {
            // usize is at most 64 bits wide, the fallback is never taken.
            period: i128::try_from(period.get()).unwrap_or(i128::from(u64::MAX)),
        }
    }

    #[inline]
    fn apply(self, value: Price, prev: Price) -> Price {
        let weighted = i128::from(value.raw()) * 2 + i128::from(prev.raw()) * (self.period - 1);
        Price::saturating_from_i128(weighted / (self.period + 1))
    }
}

pub(crate) fn exponential_average(
    values: impl IntoIterator<Item = Price>,
    smoothing: Smoothing,
) -> Vec<Price> {
    let mut prev: Option<Price> = None;

    values
        .into_iter()
        .map(|value| {
            let next = prev.map_or(value, |prev| smoothing.apply(value, prev));
            prev = Some(next);
            next
        })
        .collect()
}
