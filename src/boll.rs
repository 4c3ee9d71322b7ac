use std::{fmt::Display, num::NonZero};

use crate::{IndicatorError, Ohlcv, Price, ma::moving_average, price::isqrt, window::require_length};

/// Configuration for [`boll_with`].
///
/// # Example
///
/// ```
/// use kline_ta::BollConfig;
/// use std::num::NonZero;
///
/// let config = BollConfig::new(NonZero::new(20).unwrap());
/// assert_eq!(config.multiplier(), 2);
///
/// let wide = config.with_multiplier(NonZero::new(3).unwrap());
/// assert_eq!(wide.to_string(), "BollConfig(20, 3)");
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct BollConfig {
    length: NonZero<usize>,
    multiplier: NonZero<u32>,
}

impl BollConfig {
    /// Bands at two standard deviations over a `length`-bar window.
    #[must_use]
    pub fn new(length: NonZero<usize>) -> Self {
        Self {
            length,
            multiplier: NonZero::<u32>::MIN.saturating_add(1),
        }
    }

    /// BOLL(20, 2σ), the usual setting.
    #[must_use]
    pub fn default_20() -> Self {
        Self::new(NonZero::<usize>::MIN.saturating_add(19))
    }

    /// Replaces the standard deviation multiplier.
    #[must_use]
    pub fn with_multiplier(mut self, multiplier: NonZero<u32>) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Window length (number of bars).
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.length.get()
    }

    /// Standard deviation multiplier for the upper and lower bands.
    #[inline]
    #[must_use]
    pub fn multiplier(&self) -> u32 {
        self.multiplier.get()
    }
}

impl Display for BollConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BollConfig({}, {})", self.length, self.multiplier)
    }
}

/// Bollinger Bands output: upper, middle and lower band series.
///
/// ```text
/// upper = MA + k × σ
/// mid   = MA
/// lower = MA − k × σ
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BollSeries {
    upper: Vec<Price>,
    mid: Vec<Price>,
    lower: Vec<Price>,
}

impl BollSeries {
    #[inline]
    #[must_use]
    pub fn upper(&self) -> &[Price] {
        &self.upper
    }

    /// Middle band, the [`ma`](crate::ma) of the window.
    #[inline]
    #[must_use]
    pub fn mid(&self) -> &[Price] {
        &self.mid
    }

    #[inline]
    #[must_use]
    pub fn lower(&self) -> &[Price] {
        &self.lower
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.mid.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mid.is_empty()
    }

    /// `(upper, mid, lower)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Price>, Vec<Price>, Vec<Price>) {
        (self.upper, self.mid, self.lower)
    }
}

/// Bollinger Bands (BOLL) at two standard deviations.
///
/// The middle band is [`ma`](crate::ma). For every position with a full
/// window, σ is the integer square root of the population variance of the
/// window's closes around that position's middle band. Positions before
/// `length - 1` hold [`Price::ZERO`] in all three bands.
///
/// Recomputes the variance over the whole window at each position, O(n) per
/// bar.
///
/// # Errors
///
/// [`IndicatorError::InvalidWindow`] if `length` is zero.
#[tracing::instrument(level = "trace", skip(bars), fields(bars = bars.len()))]
pub fn boll<B: Ohlcv>(bars: &[B], length: usize) -> Result<BollSeries, IndicatorError> {
    let length = require_length(length, bars.len())?;

    Ok(compute(bars, BollConfig::new(length)))
}

/// [`boll`] with a custom window and band multiplier.
#[tracing::instrument(level = "trace", skip(bars), fields(bars = bars.len()))]
pub fn boll_with<B: Ohlcv>(bars: &[B], config: BollConfig) -> BollSeries {
    compute(bars, config)
}

fn compute<B: Ohlcv>(bars: &[B], config: BollConfig) -> BollSeries {
    let length = config.length.get();
    let multiplier = i128::from(config.multiplier.get());
    // A window wider than i128 never fills, so the fallback is unused.
    let divisor = i128::try_from(length).unwrap_or(i128::MAX);

    let mid = moving_average(bars.iter().map(Ohlcv::close), config.length);
    let mut upper = vec![Price::ZERO; bars.len()];
    let mut lower = vec![Price::ZERO; bars.len()];

    for (end, window) in (length - 1..).zip(bars.windows(length)) {
        let center = i128::from(mid[end].raw());
        let sum_of_squares = window.iter().fold(0_i128, |acc, bar| {
            let d = i128::from(bar.close().raw()) - center;
            acc.saturating_add(d.saturating_mul(d))
        });

        let band = Price::saturating_from_i128(isqrt(sum_of_squares / divisor) * multiplier);
        upper[end] = mid[end] + band;
        lower[end] = mid[end] - band;
    }

    BollSeries { upper, mid, lower }
}
