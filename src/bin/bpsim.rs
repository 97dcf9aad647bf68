//! Evaluate one or more predictors against a branch trace.

use bpred::*;
use bpred::stats::*;
use bpred::sim;

use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a trace file (reads stdin when omitted)
    trace: Option<PathBuf>,

    /// Predictor configuration, e.g. 'static', 'gshare:13',
    /// 'tournament:9:10:10' or 'custom'. May be repeated.
    #[arg(short, long, default_value = "static")]
    predictor: Vec<PredictorConfig>,

    /// Only simulate the first N branches
    #[arg(short, long)]
    limit: Option<usize>,

    /// List the N most frequent branches with a low hit rate
    #[arg(short, long, default_value = "0")]
    worst: usize,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct RunSummary {
    config: PredictorConfig,
    report: Report,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let trace = match &args.trace {
        Some(path) => Trace::from_file(path)?,
        None => Trace::from_stdin()?,
    };
    let records = match args.limit {
        Some(limit) => trace.as_slice_trunc(limit),
        None => trace.as_slice(),
    };
    info!(name = trace.name(), records = records.len(), "simulating");

    let mut summaries = Vec::new();
    for cfg in args.predictor.iter() {
        let mut p = cfg.build()?;
        let mut stat = BranchStats::new();
        sim::run(&mut p, records, &mut stat);

        let report = stat.report(p.name());
        info!(config = %cfg, incorrect = report.incorrect, "finished");

        if !args.json {
            println!("[*] {} ({})", p.name(), cfg);
            println!("{}", report);
            if args.worst > 0 {
                println!("Low hit-rate branches:");
                for (pc, data) in stat.get_low_rate_branches(args.worst) {
                    println!("  {:08x} {:8}/{:8} ({:.4}) {}",
                        pc, data.hits, data.occ, data.hit_rate(),
                        data.recent_outcomes()
                    );
                }
            }
            println!();
        }
        summaries.push(RunSummary { config: *cfg, report });
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    }
    Ok(())
}
