//! Command-line front end.
//!
//! Loads a process set (from a file or the workload generator), runs the
//! selected algorithms and prints one report per algorithm.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

use procsched::loader::load_file;
use procsched::models::SimulationConfig;
use procsched::report::{render_json, render_report};
use procsched::scheduler::{Algorithm, SimulationRequest, SimulationResult, Simulator};
use procsched::telemetry::init_tracing;
use procsched::workload::WorkloadGenerator;
use procsched::SimError;

/// Algorithm selection.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
enum AlgorithmArg {
    /// Run FCFS, SRT and RR in turn
    All,
    /// First-Come-First-Served
    Fcfs,
    /// Shortest-Remaining-Time
    Srt,
    /// Round-Robin
    Rr,
}

impl AlgorithmArg {
    fn algorithms(self) -> Vec<Algorithm> {
        match self {
            AlgorithmArg::All => Algorithm::ALL.to_vec(),
            AlgorithmArg::Fcfs => vec![Algorithm::Fcfs],
            AlgorithmArg::Srt => vec![Algorithm::Srt],
            AlgorithmArg::Rr => vec![Algorithm::RoundRobin],
        }
    }
}

/// Report format.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
enum Format {
    Text,
    Json,
}

/// Single-CPU scheduling simulator
#[derive(Parser, Debug)]
#[command(name = "procsched", version)]
#[command(about = "Simulate FCFS, SRT and Round-Robin CPU scheduling", long_about = None)]
struct Args {
    /// Input file: `<context_switch> <quantum>` then `<pid> <arrival> <burst>` triples
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// Algorithm(s) to simulate
    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::All)]
    algorithm: AlgorithmArg,

    /// Override the context-switch cost from the input
    #[arg(short = 'c', long)]
    context_switch: Option<i64>,

    /// Override the Round-Robin quantum from the input
    #[arg(short, long)]
    quantum: Option<i64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Simulate N generated processes instead of reading the input file
    #[arg(long, value_name = "N")]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Latest arrival time for --random
    #[arg(long, default_value_t = 20)]
    max_arrival: i64,

    /// Longest burst for --random (bursts start at 1)
    #[arg(long, default_value_t = 10)]
    max_burst: i64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "simulation failed");
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run(args: &Args) -> Result<String, SimError> {
    let request = build_request(args)?;
    let results = Simulator::new()
        .with_algorithms(args.algorithm.algorithms())
        .run(&request)?;

    match args.format {
        Format::Json => render_json(&results).map(|mut json| {
            json.push('\n');
            json
        }),
        Format::Text => render_text(&results),
    }
}

fn build_request(args: &Args) -> Result<SimulationRequest, SimError> {
    let request = match args.random {
        Some(count) => {
            info!(count, seed = args.seed, "generating workload");
            let processes = WorkloadGenerator::new(count)
                .with_max_arrival(args.max_arrival)
                .with_burst_range(1, args.max_burst)
                .with_seed(args.seed)
                .generate();
            SimulationRequest::new(processes, SimulationConfig::default())
        }
        None => {
            info!(path = %args.input.display(), "loading input");
            load_file(&args.input)?
        }
    };

    let mut config = request.config;
    if let Some(cs) = args.context_switch {
        config = config.with_context_switch_time(cs);
    }
    if let Some(q) = args.quantum {
        config = config.with_quantum(q);
    }
    Ok(request.with_config(config))
}

fn render_text(results: &[SimulationResult]) -> Result<String, SimError> {
    let mut out = String::new();
    for result in results {
        out.push_str(&render_report(result)?);
        out.push('\n');
    }
    Ok(out)
}

fn exit_code(err: &SimError) -> u8 {
    match err {
        SimError::Config(_) => 1,
        SimError::Invalid(_) => 2,
        SimError::EmptyProcessSet | SimError::Incomplete(_) | SimError::Serialize(_) => 3,
    }
}
