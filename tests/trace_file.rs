//! Reading traces from disk and running them end to end.

use bpred::*;
use bpred::stats::BranchStats;
use pretty_assertions::assert_eq;
use std::io::Write;

fn write_trace(name: &str, text: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("bpred-{}-{}", std::process::id(), name));
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(text.as_bytes()).unwrap();
    path
}

#[test]
fn run_a_trace_file() {
    let mut text = String::new();
    for i in 0..40 {
        text.push_str(&format!("0x{:x} {}\n", 0x0040_1000, (i % 4 != 3) as u8));
    }
    let path = write_trace("loop.trace", &text);

    let trace = Trace::from_file(&path).unwrap();
    assert_eq!(trace.num_entries(), 40);
    assert!(trace.name().ends_with("loop.trace"));

    let mut p = PredictorConfig::new(PredictorKind::Static).build().unwrap();
    let mut stat = BranchStats::new();
    bpred::sim::run(&mut p, trace.as_slice(), &mut stat);
    let report = stat.report(p.name());
    assert_eq!(report.branches, 40);
    assert_eq!(report.incorrect, 10);
    assert_eq!(report.unique_branches, 1);
    assert_eq!(report.to_string().lines().last(), Some("Misprediction Rate:  25.000"));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["predictor"], "Static");
    assert_eq!(json["incorrect"], 10);

    std::fs::remove_file(path).unwrap();
}

#[test]
fn malformed_trace_file() {
    let path = write_trace("bad.trace", "0x10 1\n0x14 maybe\n");
    let err = Trace::from_file(&path).unwrap_err();
    assert_eq!(err.to_string(), "line 2: malformed branch record '0x14 maybe'");
    std::fs::remove_file(path).unwrap();
}

#[test]
fn missing_trace_file() {
    let err = Trace::from_file("/nonexistent/bpred.trace").unwrap_err();
    assert!(matches!(err, TraceError::Io(_)));
}
