//! Cache Simulator CLI.
//!
//! The main executable for the simulator. It handles command-line argument
//! parsing, configuration loading, trace replay and summary output.
//!
//! # Usage
//!
//! ```text
//! csim [-v] -s <num> -E <num> -b <num> -t <file>
//! csim -c cache.toml [-t <file>]
//! ```
//!
//! Examples:
//!
//! ```text
//! csim -s 4 -E 1 -b 4 -t traces/yi.trace
//! csim -v -s 8 -E 2 -b 4 -t traces/yi.trace
//! ```

use cache_sim::common::{ConfigError, SimError};
use cache_sim::config::{CacheConfig, Config};
use cache_sim::sim::loader::load_trace;
use cache_sim::sim::{NullSink, Simulator, VerboseSink};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

/// Command-line arguments for the cache simulator.
#[derive(Parser, Debug)]
#[command(author, version, about = "Set-associative LRU cache simulator")]
struct Args {
    /// Number of set index bits (S = 2^s sets).
    #[arg(short = 's', allow_negative_numbers = true)]
    set_bits: Option<i64>,

    /// Number of lines per set (associativity).
    #[arg(short = 'E', allow_negative_numbers = true)]
    lines: Option<i64>,

    /// Number of block offset bits (B = 2^b bytes per block).
    #[arg(short = 'b', allow_negative_numbers = true)]
    block_bits: Option<i64>,

    /// Trace file to replay.
    #[arg(short = 't')]
    trace: Option<PathBuf>,

    /// Print the outcome of every access.
    #[arg(short = 'v')]
    verbose: bool,

    /// TOML configuration file; flags override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the totals as JSON instead of the summary line.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("[!] FATAL: {}", e);
        process::exit(1);
    }
}

/// Validates configuration, replays the trace and prints the result.
///
/// Configuration is fully validated before the trace file is opened.
fn run(args: Args) -> Result<(), SimError> {
    let file_config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let overrides = CacheConfig {
        set_bits: args.set_bits,
        lines_per_set: args.lines,
        block_bits: args.block_bits,
    };
    let geometry = file_config.cache.merge(overrides).validate()?;
    let verbose = args.verbose || file_config.general.verbose;

    let trace_path = args
        .trace
        .or_else(|| file_config.general.trace.map(PathBuf::from))
        .ok_or(ConfigError::Missing("trace"))?;
    let records = load_trace(&trace_path)?;

    let mut sim = Simulator::new(geometry);
    let stdout = io::stdout();
    let totals = if verbose {
        let mut sink = VerboseSink::new(stdout.lock());
        sim.run(&records, &mut sink)?
    } else {
        sim.run(&records, &mut NullSink)?
    };

    let mut out = stdout.lock();
    if args.json {
        let json = serde_json::to_string_pretty(&totals)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        writeln!(out, "{}", json)?;
    } else {
        writeln!(out, "{}", totals.summary())?;
    }
    out.flush()?;
    drop(out);

    if verbose && !args.json {
        totals.print();
    }
    Ok(())
}
