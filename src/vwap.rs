use crate::{Ohlcv, Price};

/// Volume Weighted Average Price (VWAP) over the whole history.
///
/// Cumulative, not windowed: position `i` is total turnover over total
/// volume of bars `0..=i`, truncated. Positions before the first traded
/// volume hold [`Price::ZERO`].
///
/// Totals are accumulated in `i128`.
///
/// # Example
///
/// ```
/// use kline_ta::{Bar, Price, vwap};
///
/// let p = Price::from_raw;
/// let bars: Vec<Bar> = (1..=4)
///     .map(|t| Bar::new(t, p(10), p(10), p(10), p(10)).with_volume(1).with_amount(p(10)))
///     .collect();
///
/// assert_eq!(vwap(&bars), [p(10); 4]);
/// ```
#[tracing::instrument(level = "trace", skip(bars), fields(bars = bars.len()))]
pub fn vwap<B: Ohlcv>(bars: &[B]) -> Vec<Price> {
    let mut volume: i128 = 0;
    let mut amount: i128 = 0;

    bars.iter()
        .map(|bar| {
            volume += i128::from(bar.volume());
            amount += i128::from(bar.amount().raw());

            if volume > 0 {
                Price::saturating_from_i128(amount / volume)
            } else {
                Price::ZERO
            }
        })
        .collect()
}
