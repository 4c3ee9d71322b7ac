use std::num::NonZero;

use crate::{
    IndicatorError, Ohlcv, Price,
    window::{RunningSum, require_length},
};

/// Simple Moving Average (MA) of the closing price.
///
/// Position `i` holds the truncated mean of the closes of the `length` bars
/// ending at `i`. Positions before `length - 1` hold [`Price::ZERO`]. A window
/// longer than the series yields a series of zeros.
///
/// Uses a running sum for O(1) work per bar.
///
/// # Errors
///
/// [`IndicatorError::InvalidWindow`] if `length` is zero.
///
/// # Example
///
/// ```
/// use kline_ta::{Bar, Price, ma};
///
/// let bars: Vec<Bar> = (1..=5)
///     .map(|t| {
///         let c = Price::from_raw(10);
///         Bar::new(t, c, c, c, c)
///     })
///     .collect();
///
/// let out = ma(&bars, 3).unwrap();
/// assert_eq!(out.iter().map(|p| p.raw()).collect::<Vec<_>>(), [0, 0, 10, 10, 10]);
/// ```
#[tracing::instrument(level = "trace", skip(bars), fields(bars = bars.len()))]
pub fn ma<B: Ohlcv>(bars: &[B], length: usize) -> Result<Vec<Price>, IndicatorError> {
    let length = require_length(length, bars.len())?;

    Ok(moving_average(bars.iter().map(Ohlcv::close), length))
}

pub(crate) fn moving_average(
    values: impl Iterator<Item = Price>,
    length: NonZero<usize>,
) -> Vec<Price> {
    let mut window = RunningSum::new(length);

    values
        .map(|value| {
            window.push(value);
            window.mean().unwrap_or_default()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{closes, prices};

    mod filling {
        use super::*;

        #[test]
        fn sentinel_until_window_full() {
            let out = ma(&closes(&[10, 20, 30]), 3).unwrap();
            assert_eq!(out, prices(&[0, 0, 20]));
        }

        #[test]
        fn constant_closes() {
            let out = ma(&closes(&[10, 10, 10, 10, 10]), 3).unwrap();
            assert_eq!(out, prices(&[0, 0, 10, 10, 10]));
        }
    }

    mod sliding {
        use super::*;

        #[test]
        fn drops_oldest_on_advance() {
            // (20 + 30) / 2 = 25
            let out = ma(&closes(&[10, 20, 30]), 2).unwrap();
            assert_eq!(out, prices(&[0, 15, 25]));
        }

        #[test]
        fn truncates_toward_zero() {
            // (10 + 15) / 2 = 12.5, (15 + 17) / 2 = 16
            let out = ma(&closes(&[10, 15, 17]), 2).unwrap();
            assert_eq!(out, prices(&[0, 12, 16]));
        }

        #[test]
        fn length_one_is_identity() {
            let out = ma(&closes(&[4, 8, 15, 16]), 1).unwrap();
            assert_eq!(out, prices(&[4, 8, 15, 16]));
        }
    }

    mod edges {
        use super::*;

        #[test]
        fn window_longer_than_series() {
            let out = ma(&closes(&[10, 20]), 5).unwrap();
            assert_eq!(out, prices(&[0, 0]));
        }

        #[test]
        fn empty_series() {
            assert_eq!(ma(&closes(&[]), 3).unwrap(), Vec::new());
        }

        #[test]
        fn zero_length_is_rejected() {
            assert_eq!(
                ma(&closes(&[1, 2]), 0),
                Err(IndicatorError::InvalidWindow {
                    length: 0,
                    available: 2
                })
            );
        }

        #[test]
        fn large_closes_do_not_overflow() {
            let half = i64::MAX / 2 + 1;
            let out = ma(&closes(&[half, half]), 2).unwrap();
            assert_eq!(out, prices(&[0, half]));
        }

        #[test]
        fn input_untouched() {
            let bars = closes(&[1, 2, 3]);
            let before = bars.clone();
            let _ = ma(&bars, 2).unwrap();
            assert_eq!(bars, before);
        }
    }
}
