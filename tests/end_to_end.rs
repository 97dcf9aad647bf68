//! Misprediction counts over fixed traces, for every predictor.

use bpred::*;
use bpred::sim::count_mispredictions;
use rstest::rstest;

/// Sixteen branches executed in a pseudo-random order. A quarter are always
/// taken, a quarter never taken, a quarter follow a period-3 pattern and the
/// rest are noise.
fn lcg_trace(n: usize) -> Vec<BranchRecord> {
    let mut x: u32 = 12345;
    (0..n).map(|i| {
        x = x.wrapping_mul(1664525).wrapping_add(1013904223);
        let slot = (x >> 24) % 16;
        let pc = 0x0040_0000 + slot * 0x1c;
        let taken = match slot % 4 {
            0 => true,
            1 => false,
            2 => i % 3 != 0,
            _ => (x >> 7) & 1 == 1,
        };
        BranchRecord::new(pc, Outcome::from(taken))
    }).collect()
}

/// An 8-iteration inner loop followed by two correlated branches and a
/// rarely-taken one.
fn loop_trace(n: usize) -> Vec<BranchRecord> {
    let mut res = Vec::new();
    for i in 0..n {
        for j in 0..8 {
            res.push(BranchRecord::new(0x0040_1000, Outcome::from(j < 7)));
        }
        let b = i % 2 == 1;
        res.push(BranchRecord::new(0x0040_1020, Outcome::from(b)));
        res.push(BranchRecord::new(0x0040_1048, Outcome::from(!b)));
        res.push(BranchRecord::new(0x0040_1064, Outcome::from(i % 5 == 0)));
    }
    res
}

fn misses(cfg: &str, records: &[BranchRecord]) -> usize {
    let mut p = cfg.parse::<PredictorConfig>().unwrap().build().unwrap();
    count_mispredictions(&mut p, records)
}

#[test]
fn trace_shapes() {
    let t = lcg_trace(5000);
    assert_eq!(t.len(), 5000);
    assert_eq!(t.iter().filter(|r| r.is_taken()).count(), 2684);
    assert_eq!(loop_trace(300).len(), 3300);
}

#[rstest]
#[case("static", 2316)]
#[case("gshare:4", 2375)]
#[case("gshare:10", 2480)]
#[case("gshare:13", 2623)]
#[case("tournament:9:10:10", 1826)]
#[case("tournament:4:3:2", 2429)]
#[case("tournament:12:8:6", 2335)]
#[case("custom:2", 2416)]
#[case("custom:6", 2525)]
#[case("custom:10", 2664)]
fn lcg_reference_counts(#[case] cfg: &str, #[case] expected: usize) {
    assert_eq!(misses(cfg, &lcg_trace(5000)), expected);
}

#[rstest]
#[case("static", 840)]
#[case("gshare:4", 790)]
#[case("gshare:10", 159)]
#[case("gshare:13", 104)]
#[case("tournament:9:10:10", 45)]
#[case("tournament:4:3:2", 670)]
#[case("tournament:12:8:6", 46)]
#[case("custom:2", 388)]
#[case("custom:6", 163)]
#[case("custom:10", 112)]
fn loop_reference_counts(#[case] cfg: &str, #[case] expected: usize) {
    assert_eq!(misses(cfg, &loop_trace(300)), expected);
}

#[rstest]
#[case("static")]
#[case("gshare:10")]
#[case("tournament:9:10:10")]
#[case("custom:6")]
fn reset_replays_identically(#[case] cfg: &str) {
    let records = loop_trace(50);
    let mut p = cfg.parse::<PredictorConfig>().unwrap().build().unwrap();
    let first = count_mispredictions(&mut p, &records);
    p.reset();
    assert_eq!(count_mispredictions(&mut p, &records), first);
}

#[rstest]
#[case("gshare:10")]
#[case("tournament:9:10:10")]
#[case("custom:6")]
fn predict_is_idempotent(#[case] cfg: &str) {
    let mut p = cfg.parse::<PredictorConfig>().unwrap().build().unwrap();
    for record in lcg_trace(2000) {
        let first = p.predict(record.pc);
        assert_eq!(p.predict(record.pc), first);
        p.train(record.pc, record.outcome);
    }
}
