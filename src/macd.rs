use std::{fmt::Display, num::NonZero};

use crate::{
    IndicatorError, Ohlcv, Price,
    ema::{Smoothing, exponential_average},
};

/// Configuration for [`macd_with`].
///
/// Defaults to the standard 12/26/9 periods.
///
/// # Example
///
/// ```
/// use kline_ta::MacdConfig;
/// use std::num::NonZero;
///
/// let config = MacdConfig::builder()
///     .fast(NonZero::new(8).unwrap())
///     .slow(NonZero::new(21).unwrap())
///     .signal(NonZero::new(5).unwrap())
///     .build()
///     .unwrap();
/// assert_eq!(config.fast(), 8);
/// assert_eq!(config.to_string(), "MacdConfig(8, 21, 5)");
///
/// assert!(MacdConfig::builder().fast(NonZero::new(30).unwrap()).build().is_err());
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct MacdConfig {
    fast: NonZero<usize>,
    slow: NonZero<usize>,
    signal: NonZero<usize>,
}

impl MacdConfig {
    #[must_use]
    pub fn builder() -> MacdConfigBuilder {
        MacdConfigBuilder::new()
    }

    /// Fast EMA period.
    #[inline]
    #[must_use]
    pub fn fast(&self) -> usize {
        self.fast.get()
    }

    /// Slow EMA period.
    #[inline]
    #[must_use]
    pub fn slow(&self) -> usize {
        self.slow.get()
    }

    /// Signal line (DEA) EMA period.
    #[inline]
    #[must_use]
    pub fn signal(&self) -> usize {
        self.signal.get()
    }
}

impl Default for MacdConfig {
    fn default() -> Self {
        Self {
            fast: NonZero::<usize>::MIN.saturating_add(11),
            slow: NonZero::<usize>::MIN.saturating_add(25),
            signal: NonZero::<usize>::MIN.saturating_add(8),
        }
    }
}

impl Display for MacdConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MacdConfig({}, {}, {})", self.fast, self.slow, self.signal)
    }
}

/// Builder for [`MacdConfig`].
///
/// Starts from the 12/26/9 defaults.
pub struct MacdConfigBuilder {
    config: MacdConfig,
}

impl MacdConfigBuilder {
    fn new() -> Self {
        Self {
            config: MacdConfig::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn fast(mut self, fast: NonZero<usize>) -> Self {
        self.config.fast = fast;
        self
    }

    #[inline]
    #[must_use]
    pub fn slow(mut self, slow: NonZero<usize>) -> Self {
        self.config.slow = slow;
        self
    }

    #[inline]
    #[must_use]
    pub fn signal(mut self, signal: NonZero<usize>) -> Self {
        self.config.signal = signal;
        self
    }

    /// # Errors
    ///
    /// [`IndicatorError::InvalidMacdPeriods`] unless `fast < slow`.
    pub fn build(self) -> Result<MacdConfig, IndicatorError> {
        let MacdConfig { fast, slow, .. } = self.config;

        if fast >= slow {
            return Err(IndicatorError::InvalidMacdPeriods {
                fast: fast.get(),
                slow: slow.get(),
            });
        }

        Ok(self.config)
    }
}

/// MACD output: DIF, DEA and histogram series, each as long as the input.
///
/// ```text
/// dif  = EMA(fast) − EMA(slow)
/// dea  = EMA(dif, signal)
/// hist = 2 × (dif − dea)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacdSeries {
    dif: Vec<Price>,
    dea: Vec<Price>,
    hist: Vec<Price>,
}

impl MacdSeries {
    /// Fast EMA minus slow EMA.
    #[inline]
    #[must_use]
    pub fn dif(&self) -> &[Price] {
        &self.dif
    }

    /// Signal line: EMA of [`dif`](Self::dif).
    #[inline]
    #[must_use]
    pub fn dea(&self) -> &[Price] {
        &self.dea
    }

    /// Histogram: `2 × (dif − dea)`.
    #[inline]
    #[must_use]
    pub fn hist(&self) -> &[Price] {
        &self.hist
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.dif.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dif.is_empty()
    }

    /// `(dif, dea, hist)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Price>, Vec<Price>, Vec<Price>) {
        (self.dif, self.dea, self.hist)
    }
}

/// Moving Average Convergence/Divergence with the standard 12/26/9 periods.
///
/// All three series are defined from the first bar, since every component is
/// a seeded EMA.
#[tracing::instrument(level = "trace", skip(bars), fields(bars = bars.len()))]
pub fn macd<B: Ohlcv>(bars: &[B]) -> MacdSeries {
    compute(bars, MacdConfig::default())
}

/// [`macd`] with custom periods.
#[tracing::instrument(level = "trace", skip(bars), fields(bars = bars.len()))]
pub fn macd_with<B: Ohlcv>(bars: &[B], config: MacdConfig) -> MacdSeries {
    compute(bars, config)
}

fn compute<B: Ohlcv>(bars: &[B], config: MacdConfig) -> MacdSeries {
    let closes = || bars.iter().map(Ohlcv::close);
    let fast = exponential_average(closes(), Smoothing::new(config.fast));
    let slow = exponential_average(closes(), Smoothing::new(config.slow));

    let dif: Vec<Price> = fast.iter().zip(&slow).map(|(&f, &s)| f - s).collect();
    let dea = exponential_average(dif.iter().copied(), Smoothing::new(config.signal));
    let hist = dif.iter().zip(&dea).map(|(&d, &e)| (d - e) * 2).collect();

    MacdSeries { dif, dea, hist }
}
