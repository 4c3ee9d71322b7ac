mod fixtures;

use fixtures::{assert_series_eq, load_ref_values, load_reference_bars, raws};
use kline_ta::ema;

const REF_PATH: &str = "tests/fixtures/data/ema-20.csv";

#[test]
fn ema_20_matches_reference() {
    let bars = load_reference_bars();
    let reference = load_ref_values(REF_PATH);

    let out = ema(&bars, 20).unwrap();

    assert_series_eq("EMA(20)", &bars, &raws(&out), &reference);
}

#[test]
fn ema_is_seeded_with_first_close() {
    let bars = load_reference_bars();
    let out = ema(&bars, 20).unwrap();

    assert_eq!(out[0].raw(), bars[0].close);
}

#[test]
fn ema_prefix_does_not_depend_on_later_bars() {
    let bars = load_reference_bars();
    let full = ema(&bars, 20).unwrap();
    let prefix = ema(&bars[..100], 20).unwrap();

    assert_eq!(full[..100], prefix[..]);
}
