use crate::{IndicatorError, Ohlcv, Price, window::require_tail};

/// Highest `high` over the last `length` bars of the series (HHV).
///
/// Returns a single value for the tail of the series, not a rolling series.
///
/// # Errors
///
/// [`IndicatorError::InvalidWindow`] if `length` is zero or longer than the
/// series.
///
/// # Example
///
/// ```
/// use kline_ta::{Bar, Price, hhv};
///
/// let bars: Vec<Bar> = [(30, 10), (50, 20), (40, 30)]
///     .into_iter()
///     .enumerate()
///     .map(|(t, (h, l))| {
///         let (h, l) = (Price::from_raw(h), Price::from_raw(l));
///         Bar::new(t as i64, l, h, l, l)
///     })
///     .collect();
///
/// assert_eq!(hhv(&bars, 2), Ok(Price::from_raw(50)));
/// assert!(hhv(&bars, 4).is_err());
/// ```
#[tracing::instrument(level = "trace", skip(bars), fields(bars = bars.len()))]
pub fn hhv<B: Ohlcv>(bars: &[B], length: usize) -> Result<Price, IndicatorError> {
    require_tail(length, bars.len())?;

    Ok(tail(bars, length)
        .iter()
        .map(Ohlcv::high)
        .max()
        .unwrap_or_default())
}

/// Lowest `low` over the last `length` bars of the series (LLV).
///
/// The running minimum starts from the first bar in the tail, so a zero low
/// is reported like any other price.
///
/// # Errors
///
/// [`IndicatorError::InvalidWindow`] if `length` is zero or longer than the
/// series.
#[tracing::instrument(level = "trace", skip(bars), fields(bars = bars.len()))]
pub fn llv<B: Ohlcv>(bars: &[B], length: usize) -> Result<Price, IndicatorError> {
    require_tail(length, bars.len())?;

    Ok(tail(bars, length)
        .iter()
        .map(Ohlcv::low)
        .min()
        .unwrap_or_default())
}

#[inline]
fn tail<B>(bars: &[B], length: usize) -> &[B] {
    &bars[bars.len() - length..]
}
