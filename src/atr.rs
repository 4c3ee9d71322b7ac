use crate::{IndicatorError, Ohlcv, Price, window::require_length};

/// True range of `bar`:
/// `max(high - low, |high - prev_close|, |low - prev_close|)`.
///
/// Without a previous close (first bar), falls back to `high - low`.
#[inline]
#[must_use]
pub fn true_range<B: Ohlcv>(bar: &B, prev_close: Option<Price>) -> Price {
    let hl = bar.high() - bar.low();

    match prev_close {
        Some(prev_close) => {
            let hc = (bar.high() - prev_close).abs();
            let lc = (bar.low() - prev_close).abs();
            hl.max(hc).max(lc)
        }
        None => hl,
    }
}

/// Average True Range (ATR).
///
/// Keeps a running sum of true ranges: each bar adds its own and, from
/// position `length` on, removes the true range of bar `i - length + 1`
/// (against its own previous close). Position `i >= length` is that sum over
/// `length`, truncated, so it covers the `length - 1` true ranges ending at
/// `i`. `ATR(1)` is therefore zero throughout. Earlier positions hold
/// [`Price::ZERO`].
///
/// # Errors
///
/// [`IndicatorError::InvalidWindow`] if `length` is zero.
///
/// # Example
///
/// ```
/// use kline_ta::{Bar, Price, atr};
///
/// let p = Price::from_raw;
/// let bars: Vec<Bar> = (1..=5)
///     .map(|t| Bar::new(t, p(100), p(105), p(95), p(100))) // TR = 10
///     .collect();
///
/// assert_eq!(atr(&bars, 2).unwrap(), [p(0), p(0), p(5), p(5), p(5)]);
/// ```
#[tracing::instrument(level = "trace", skip(bars), fields(bars = bars.len()))]
pub fn atr<B: Ohlcv>(bars: &[B], length: usize) -> Result<Vec<Price>, IndicatorError> {
    let n = require_length(length, bars.len())?.get();
    // usize is at most 64 bits wide, the fallback is never taken.
    let divisor = i128::try_from(n).unwrap_or(i128::from(u64::MAX));
    let mut out = vec![Price::ZERO; bars.len()];
    let mut sum: i128 = 0;

    for i in 1..bars.len() {
        sum += range_at(bars, i);

        if i >= n {
            sum -= range_at(bars, i + 1 - n);
            out[i] = Price::saturating_from_i128(sum / divisor);
        }
    }

    Ok(out)
}

#[inline]
fn range_at<B: Ohlcv>(bars: &[B], i: usize) -> i128 {
    i128::from(true_range(&bars[i], Some(bars[i - 1].close())).raw())
}
