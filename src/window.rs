use std::num::NonZero;

use crate::{IndicatorError, Price, ring_buffer::RingBuffer};

/// Running sum over the last `length` pushed values.
///
/// Adds the entering value and subtracts the one leaving the window, so each
/// push is O(1) regardless of window length. The sum is held in `i128`, wide
/// enough for any window of `i64` prices.
#[derive(Clone, Debug)]
pub(crate) struct RunningSum {
    window: RingBuffer<Price>,
    sum: i128,
    length: i128,
}

impl RunningSum {
    pub(crate) fn new(length: NonZero<usize>) -> Self {
        Self {
            window: RingBuffer::new(length.get()),
            sum: 0,
            // usize is at most 64 bits wide, the fallback is never taken.
            length: i128::try_from(length.get()).unwrap_or(i128::from(u64::MAX)),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, value: Price) {
        if let Some(old) = self.window.push(value) {
            self.sum -= i128::from(old.raw());
        }
        self.sum += i128::from(value.raw());
    }

    /// Truncated mean of the window, `None` until the window is full.
    #[inline]
    pub(crate) fn mean(&self) -> Option<Price> {
        self.window
            .is_ready()
            .then(|| Price::saturating_from_i128(self.sum / self.length))
    }
}

/// Rejects a zero window length.
pub(crate) fn require_length(
    length: usize,
    available: usize,
) -> Result<NonZero<usize>, IndicatorError> {
    NonZero::new(length).ok_or_else(|| {
        tracing::debug!(length, available, "rejecting zero window");
        IndicatorError::InvalidWindow { length, available }
    })
}

/// Rejects a window that is zero or reaches before the first bar.
pub(crate) fn require_tail(length: usize, available: usize) -> Result<(), IndicatorError> {
    if length == 0 || length > available {
        tracing::debug!(length, available, "rejecting window outside series");
        return Err(IndicatorError::InvalidWindow { length, available });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(raw: i64) -> Price {
        Price::from_raw(raw)
    }

    fn window(length: usize) -> RunningSum {
        RunningSum::new(NonZero::new(length).unwrap())
    }

    mod running_sum {
        use super::*;

        #[test]
        fn none_until_full() {
            let mut sum = window(3);
            sum.push(p(10));
            assert_eq!(sum.mean(), None);
            sum.push(p(20));
            assert_eq!(sum.mean(), None);
            sum.push(p(30));
            assert_eq!(sum.mean(), Some(p(20)));
        }

        #[test]
        fn slides_and_truncates() {
            let mut sum = window(2);
            sum.push(p(10));
            sum.push(p(20));
            sum.push(p(25));
            // (20 + 25) / 2 = 22.5, truncated
            assert_eq!(sum.mean(), Some(p(22)));
        }

        #[test]
        fn sum_wider_than_price() {
            let mut sum = window(2);
            sum.push(Price::MAX);
            sum.push(Price::MAX);
            assert_eq!(sum.mean(), Some(Price::MAX));
            sum.push(Price::MIN);
            // (MAX + MIN) / 2 = -1 / 2, truncated
            assert_eq!(sum.mean(), Some(Price::ZERO));
        }

        #[test]
        fn negative_mean_truncates_toward_zero() {
            let mut sum = window(2);
            sum.push(p(-10));
            sum.push(p(-5));
            assert_eq!(sum.mean(), Some(p(-7)));
        }
    }

    mod validation {
        use super::*;

        #[test]
        fn zero_length_is_invalid() {
            assert_eq!(
                require_length(0, 5),
                Err(IndicatorError::InvalidWindow {
                    length: 0,
                    available: 5
                })
            );
            assert_eq!(require_length(9, 5), Ok(NonZero::new(9).unwrap()));
        }

        #[test]
        fn tail_must_fit_series() {
            assert_eq!(require_tail(5, 5), Ok(()));
            assert_eq!(
                require_tail(6, 5),
                Err(IndicatorError::InvalidWindow {
                    length: 6,
                    available: 5
                })
            );
            assert!(require_tail(0, 5).is_err());
            assert!(require_tail(1, 0).is_err());
        }
    }
}
