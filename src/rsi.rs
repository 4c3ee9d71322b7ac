use crate::{IndicatorError, Ohlcv, Price, ring_buffer::RingBuffer, window::require_length};

/// Relative Strength Index (RSI) over a sliding window of close-to-close
/// changes.
///
/// Gains and losses of the last `length` changes are kept as running `i128`
/// sums, sliding like [`ma`](crate::ma):
///
/// ```text
/// RSI = 100 × gain / (gain + loss)      (truncated)
/// ```
///
/// Position `i` is defined once `length` changes are available, i.e. for
/// `i >= length`. Earlier positions hold `0`.
///
/// A window with no losing change also holds `0`, not `100`: callers treat
/// `0` as "not defined" throughout, and a window of only gains is reported
/// the same way.
///
/// # Errors
///
/// [`IndicatorError::InvalidWindow`] if `length` is zero.
///
/// # Example
///
/// ```
/// use kline_ta::{Bar, Price, rsi};
///
/// let bars: Vec<Bar> = [10, 12, 11, 13]
///     .into_iter()
///     .zip(1..)
///     .map(|(c, t)| {
///         let c = Price::from_raw(c);
///         Bar::new(t, c, c, c, c)
///     })
///     .collect();
///
/// // changes +2, −1, +2 → gain = 4, loss = 1 → RSI = 80
/// assert_eq!(rsi(&bars, 3).unwrap(), [0, 0, 0, 80]);
/// ```
#[tracing::instrument(level = "trace", skip(bars), fields(bars = bars.len()))]
pub fn rsi<B: Ohlcv>(bars: &[B], length: usize) -> Result<Vec<i64>, IndicatorError> {
    let length = require_length(length, bars.len())?;

    let mut out = vec![0; bars.len()];
    let mut changes = RingBuffer::new(length.get());
    let mut gain: i128 = 0;
    let mut loss: i128 = 0;

    for (i, pair) in bars.windows(2).enumerate() {
        let change = pair[1].close() - pair[0].close();

        if let Some(old) = changes.push(change) {
            let (old_gain, old_loss) = gain_and_loss(old);
            gain -= old_gain;
            loss -= old_loss;
        }

        let (new_gain, new_loss) = gain_and_loss(change);
        gain += new_gain;
        loss += new_loss;

        if changes.is_ready() && loss != 0 {
            out[i + 1] = strength(gain, loss);
        }
    }

    Ok(out)
}

#[inline]
fn gain_and_loss(change: Price) -> (i128, i128) {
    let change = i128::from(change.raw());
    if change > 0 { (change, 0) } else { (0, -change) }
}

#[inline]
fn strength(gain: i128, loss: i128) -> i64 {
    let total = gain + loss;
    // gain <= total, so the ratio lies in 0..=100.
    i64::try_from(100 * gain / total).unwrap_or_default()
}
