use crate::{Ohlcv, Price, Timestamp};

/// One sampling interval of market activity.
///
/// Prices are expected to satisfy `low <= {open, close} <= high`; the bar
/// does not enforce it, indicators assume validated input.
///
/// # Example
///
/// ```
/// use kline_ta::{Bar, Price};
///
/// let bar = Bar::new(
///     1_700_000_000,
///     Price::from_raw(10_000),
///     Price::from_raw(10_500),
///     Price::from_raw(9_800),
///     Price::from_raw(10_200),
/// )
/// .with_volume(1_200)
/// .with_amount(Price::from_raw(12_240_000))
/// .with_stock(1_000, 4_000);
///
/// assert_eq!(bar.float_value(), Price::from_raw(10_200_000));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bar {
    pub timestamp: Timestamp,
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
    /// Units traded, `>= 0`.
    pub volume: i64,
    /// Turnover, `>= 0`.
    pub amount: Price,
    /// Tradable shares outstanding.
    pub float_stock: i64,
    /// Total shares outstanding.
    pub total_stock: i64,
}

impl Bar {
    /// A bar with zero volume, turnover and share counts.
    #[must_use]
    pub const fn new(
        timestamp: Timestamp,
        open: Price,
        high: Price,
        low: Price,
        close: Price,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume: 0,
            amount: Price::ZERO,
            float_stock: 0,
            total_stock: 0,
        }
    }

    #[must_use]
    pub const fn with_volume(mut self, volume: i64) -> Self {
        self.volume = volume;
        self
    }

    #[must_use]
    pub const fn with_amount(mut self, amount: Price) -> Self {
        self.amount = amount;
        self
    }

    #[must_use]
    pub const fn with_stock(mut self, float_stock: i64, total_stock: i64) -> Self {
        self.float_stock = float_stock;
        self.total_stock = total_stock;
        self
    }

    /// Market value of the tradable shares at the closing price.
    #[must_use]
    pub fn float_value(&self) -> Price {
        self.close * self.float_stock
    }

    /// Market value of all shares at the closing price.
    #[must_use]
    pub fn total_value(&self) -> Price {
        self.close * self.total_stock
    }
}

impl Ohlcv for Bar {
    #[inline]
    fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    #[inline]
    fn open(&self) -> Price {
        self.open
    }

    #[inline]
    fn high(&self) -> Price {
        self.high
    }

    #[inline]
    fn low(&self) -> Price {
        self.low
    }

    #[inline]
    fn close(&self) -> Price {
        self.close
    }

    #[inline]
    fn volume(&self) -> i64 {
        self.volume
    }

    #[inline]
    fn amount(&self) -> Price {
        self.amount
    }
}
