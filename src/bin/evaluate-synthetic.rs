//! Evaluate every predictor against a randomly generated workload.

use bpred::*;
use bpred::stats::*;
use bpred::sim;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Seed for the workload generator
    #[arg(short, long, default_value = "0")]
    seed: u64,

    /// Number of distinct branches in the loop body
    #[arg(short, long, default_value = "256")]
    branches: usize,

    /// Number of loop iterations
    #[arg(short, long, default_value = "1000")]
    iters: usize,
}

fn run_test(records: &[BranchRecord], cfg: PredictorConfig)
    -> Result<(), ConfigError>
{
    let mut p = cfg.build()?;
    let mut stat = BranchStats::new();
    sim::run(&mut p, records, &mut stat);

    println!("  {:24} Global hit rate: {}/{} ({:.2}% correct) ({} misses)",
        cfg.to_string(),
        stat.global_hits(),
        stat.global_brns(),
        stat.hit_rate() * 100.0,
        stat.global_miss()
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut gen = TraceGenerator::new(args.seed);
    gen.add_random_branches(args.branches);
    let trace = gen.generate(format!("synthetic-{}", args.seed), args.iters);
    println!("[*] {}, {} records", trace.name(), trace.num_entries());

    let configs = [
        PredictorConfig::new(PredictorKind::Static),
        PredictorConfig::gshare(13),
        PredictorConfig::tournament(9, 10, 10),
        PredictorConfig::custom(10),
    ];
    for cfg in configs {
        run_test(trace.as_slice(), cfg)?;
    }
    Ok(())
}
