#![allow(dead_code)]

use kline_ta::{Bar, Ohlcv, Price, Timestamp};
use serde::{Deserialize, de::DeserializeOwned};

/// Hourly kline parsed from CSV. Prices and amount are raw thousandths.
#[derive(Debug, Clone, Deserialize)]
pub struct RefBar {
    pub timestamp: i64,
    pub open: i64,
    pub high: i64,
    pub low: i64,
    pub close: i64,
    pub volume: i64,
    pub amount: i64,
}

impl Ohlcv for RefBar {
    fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    fn open(&self) -> Price {
        Price::from_raw(self.open)
    }

    fn high(&self) -> Price {
        Price::from_raw(self.high)
    }

    fn low(&self) -> Price {
        Price::from_raw(self.low)
    }

    fn close(&self) -> Price {
        Price::from_raw(self.close)
    }

    fn volume(&self) -> i64 {
        self.volume
    }

    fn amount(&self) -> Price {
        Price::from_raw(self.amount)
    }
}

impl From<&RefBar> for Bar {
    fn from(bar: &RefBar) -> Self {
        Bar::new(bar.timestamp, bar.open(), bar.high(), bar.low(), bar.close())
            .with_volume(bar.volume)
            .with_amount(bar.amount())
    }
}

/// Reference value with timestamp.
#[derive(Debug, Deserialize)]
pub struct RefValue {
    pub timestamp: i64,
    pub expected: i64,
}

/// Reference BOLL bands with timestamp.
#[derive(Debug, Deserialize)]
pub struct RefBollValue {
    pub timestamp: i64,
    pub upper: i64,
    pub mid: i64,
    pub lower: i64,
}

/// Reference MACD lines with timestamp.
#[derive(Debug, Deserialize)]
pub struct RefMacdValue {
    pub timestamp: i64,
    pub dif: i64,
    pub dea: i64,
    pub hist: i64,
}

const KLINES_PATH: &str = "tests/fixtures/data/klines.csv";

/// Load the reference kline series.
pub fn load_reference_bars() -> Vec<RefBar> {
    load_records(KLINES_PATH, "invalid kline record")
}

/// Load single-value reference data (MA, EMA, RSI, ATR, VWAP).
pub fn load_ref_values(path: &str) -> Vec<RefValue> {
    load_records(path, "invalid reference record")
}

/// Load BOLL reference data (upper, mid, lower).
pub fn load_boll_ref(path: &str) -> Vec<RefBollValue> {
    load_records(path, "invalid BOLL reference record")
}

/// Load MACD reference data (dif, dea, hist).
pub fn load_macd_ref(path: &str) -> Vec<RefMacdValue> {
    load_records(path, "invalid MACD reference record")
}

/// Installs a `tracing` subscriber honouring `RUST_LOG`, once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Assert an indicator series equals the reference position by position.
pub fn assert_series_eq(name: &str, bars: &[RefBar], actual: &[i64], reference: &[RefValue]) {
    assert_eq!(actual.len(), bars.len(), "{name}: output length");
    assert_eq!(reference.len(), bars.len(), "{name}: reference length");

    for (i, ((value, expected), bar)) in actual.iter().zip(reference).zip(bars).enumerate() {
        assert_eq!(
            expected.timestamp, bar.timestamp,
            "{name}: reference out of step at bar {i}"
        );
        assert_eq!(
            *value, expected.expected,
            "{name} at bar {i} (t={})",
            bar.timestamp
        );
    }
}

/// Raw values of a price series.
pub fn raws(prices: &[Price]) -> Vec<i64> {
    prices.iter().map(|p| p.raw()).collect()
}

fn load_records<D>(path: &str, expect_msg: &str) -> Vec<D>
where
    D: DeserializeOwned,
{
    let mut rdr =
        csv::Reader::from_path(path).unwrap_or_else(|e| panic!("failed to open {path}: {e}"));

    rdr.deserialize().map(|r| r.expect(expect_msg)).collect()
}
