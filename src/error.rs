use crate::Timestamp;

/// Errors returned by indicator functions, configs and [`BarSeries`](crate::BarSeries).
///
/// Too little history is not an error: windowed indicators hold
/// [`Price::ZERO`](crate::Price::ZERO) at warm-up positions instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IndicatorError {
    /// Window length is zero, or longer than the series where the whole
    /// window must be read (HHV, LLV).
    #[error("invalid window length {length} for a series of {available} bars")]
    InvalidWindow { length: usize, available: usize },

    #[error("bar {index} has timestamp {timestamp}, not after previous {previous}")]
    UnorderedSeries {
        index: usize,
        previous: Timestamp,
        timestamp: Timestamp,
    },

    #[error("MACD fast period {fast} must be shorter than slow period {slow}")]
    InvalidMacdPeriods { fast: usize, slow: usize },
}
