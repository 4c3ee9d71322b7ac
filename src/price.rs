use std::{
    fmt::{Display, Formatter},
    iter::Sum,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
    str::FromStr,
};

/// Number of raw units in one whole price unit.
///
/// Prices carry three decimal places, the resolution quotes arrive in.
pub const PRICE_SCALE: i64 = 1_000;

const PRICE_DECIMALS: usize = 3;

/// A fixed-point price or monetary amount.
///
/// Stores a raw `i64` count of thousandths, so `Price::from_raw(12_345)` is
/// `12.345`. Arithmetic is exact integer arithmetic: multiplication and
/// division take a plain integer scalar and division truncates toward zero.
/// Every operator saturates at [`Price::MIN`] and [`Price::MAX`].
///
/// # Example
///
/// ```
/// use kline_ta::Price;
///
/// let p: Price = "10.5".parse().unwrap();
/// assert_eq!(p.raw(), 10_500);
/// assert_eq!((p * 3 / 2).to_string(), "15.750");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Price(i64);

impl Price {
    /// The zero price, also the sentinel held by indicator warm-up positions.
    pub const ZERO: Self = Self(0);

    pub const MAX: Self = Self(i64::MAX);

    pub const MIN: Self = Self(i64::MIN);

    #[inline]
    #[must_use]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw thousandths.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Rounds `value` to the nearest thousandth, saturating at the
    /// representable range.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        Self((value * PRICE_SCALE as f64).round() as i64)
    }

    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn as_f64(self) -> f64 {
        self.0 as f64 / PRICE_SCALE as f64
    }

    /// Narrows a wide accumulator back to a price, clamping at the `i64` range.
    #[must_use]
    pub fn saturating_from_i128(raw: i128) -> Self {
        match i64::try_from(raw) {
            Ok(raw) => Self(raw),
            Err(_) if raw > 0 => Self::MAX,
            Err(_) => Self::MIN,
        }
    }

    #[inline]
    #[must_use]
    pub const fn abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Add for Price {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Price {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Price {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Price {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Price {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl Mul<i64> for Price {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: i64) -> Self {
        Self(self.0.saturating_mul(rhs))
    }
}

impl Div<i64> for Price {
    type Output = Self;

    #[inline]
    fn div(self, rhs: i64) -> Self {
        Self(self.0.saturating_div(rhs))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.as_f64()
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        let scale = PRICE_SCALE.unsigned_abs();
        write!(
            f,
            "{sign}{}.{:0width$}",
            magnitude / scale,
            magnitude % scale,
            width = PRICE_DECIMALS
        )
    }
}

/// Failure to parse a [`Price`] from decimal text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParsePriceError {
    #[error("empty price string")]
    Empty,
    #[error("invalid price `{0}`")]
    Invalid(String),
    #[error("price `{0}` has more than three decimal places")]
    TooPrecise(String),
    #[error("price `{0}` is out of range")]
    OutOfRange(String),
}

impl FromStr for Price {
    type Err = ParsePriceError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParsePriceError::Empty);
        }

        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));

        let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !is_digits(whole) || !is_digits(frac) {
            return Err(ParsePriceError::Invalid(input.to_owned()));
        }
        if frac.len() > PRICE_DECIMALS {
            return Err(ParsePriceError::TooPrecise(input.to_owned()));
        }

        let out_of_range = || ParsePriceError::OutOfRange(input.to_owned());
        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| out_of_range())?
        };
        let frac: i64 = format!("{frac:0<width$}", width = PRICE_DECIMALS)
            .parse()
            .map_err(|_| ParsePriceError::Invalid(input.to_owned()))?;

        let raw = whole
            .checked_mul(PRICE_SCALE)
            .and_then(|w| w.checked_add(frac))
            .ok_or_else(out_of_range)?;

        Ok(Self(if negative { -raw } else { raw }))
    }
}

/// Integer square root: `floor(sqrt(value))`, or `0` for negative input.
#[inline]
#[must_use]
pub fn isqrt(value: i128) -> i128 {
    if value <= 0 { 0 } else { value.isqrt() }
}
