mod fixtures;

use fixtures::{assert_series_eq, load_ref_values, load_reference_bars, raws};
use kline_ta::{Ohlcv, Price, atr, true_range};

const REF_PATH: &str = "tests/fixtures/data/atr-14.csv";

#[test]
fn atr_14_matches_reference() {
    fixtures::init_tracing();
    let bars = load_reference_bars();
    let reference = load_ref_values(REF_PATH);

    let out = atr(&bars, 14).unwrap();

    assert_series_eq("ATR(14)", &bars, &raws(&out), &reference);
}

#[test]
fn atr_1_is_zero() {
    let bars = load_reference_bars();

    assert!(atr(&bars, 1).unwrap().iter().all(|p| p.is_zero()));
}

#[test]
fn atr_14_spans_thirteen_true_ranges() {
    let bars = load_reference_bars();
    let out = atr(&bars, 14).unwrap();

    for i in 14..bars.len() {
        let sum: i64 = (i - 12..=i)
            .map(|k| true_range(&bars[k], Some(bars[k - 1].close())).raw())
            .sum();
        assert_eq!(out[i], Price::from_raw(sum / 14), "bar {i}");
    }
}

#[test]
fn atr_is_non_negative() {
    let bars = load_reference_bars();

    assert!(atr(&bars, 14).unwrap().iter().all(|&p| p >= Price::ZERO));
}
