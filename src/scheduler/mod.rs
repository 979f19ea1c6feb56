//! Single-CPU schedulers and KPI evaluation.
//!
//! # Algorithms
//!
//! | Algorithm | Preemptive | Selection |
//! |-----------|-----------|-----------|
//! | FCFS | no | arrival order |
//! | SRT | every time unit | least remaining time, then earliest arrival |
//! | RR | after each quantum | FIFO ready queue |
//!
//! Each algorithm is a pure function over an arrival-sorted process slice:
//! it copies the input, resets its simulation state, and returns the
//! completed records together with the execution timeline.
//!
//! # KPI
//!
//! `ScheduleKpi` computes average waiting and turnaround time, makespan,
//! utilization, throughput and context-switch overhead.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod kpi;
mod round_robin;
mod srt;

pub use fcfs::{fcfs, Fcfs};
pub use kpi::ScheduleKpi;
pub use round_robin::{round_robin, RoundRobin};
pub use srt::{srt, Srt};

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

use crate::error::SimResult;
use crate::models::{Pid, ProcessRecord, SimulationConfig, Timeline};
use crate::validation::validate_input;

/// Supported scheduling disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Remaining-Time.
    Srt,
    /// Round-Robin.
    RoundRobin,
}

impl Algorithm {
    /// All algorithms in reporting order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Fcfs, Algorithm::Srt, Algorithm::RoundRobin];

    /// Short display name (e.g., "FCFS", "RR").
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Srt => "SRT",
            Algorithm::RoundRobin => "RR",
        }
    }

    /// Returns the scheduler implementing this algorithm.
    pub fn scheduler(&self) -> Box<dyn CpuScheduler> {
        match self {
            Algorithm::Fcfs => Box::new(Fcfs),
            Algorithm::Srt => Box::new(Srt),
            Algorithm::RoundRobin => Box::new(RoundRobin),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A CPU scheduling discipline.
///
/// Implementations must not mutate the caller's records: every run works on
/// its own fresh copy of `processes`, which is sorted by arrival time.
pub trait CpuScheduler: fmt::Debug {
    /// The discipline implemented.
    fn algorithm(&self) -> Algorithm;

    /// Simulates `processes` to completion.
    fn run(&self, processes: &[ProcessRecord], config: &SimulationConfig) -> SimulationResult;
}

/// Output of one algorithm run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// The discipline that produced this result.
    pub algorithm: Algorithm,
    /// Completed records, in input order.
    pub processes: Vec<ProcessRecord>,
    /// CPU occupancy over time.
    pub timeline: Timeline,
}

impl SimulationResult {
    /// Creates a result.
    pub fn new(algorithm: Algorithm, processes: Vec<ProcessRecord>, timeline: Timeline) -> Self {
        Self {
            algorithm,
            processes,
            timeline,
        }
    }

    /// Process ids in completion order.
    pub fn completion_order(&self) -> Vec<Pid> {
        let mut done: Vec<&ProcessRecord> = self.processes.iter().collect();
        done.sort_by_key(|p| p.finish_time);
        done.into_iter().map(|p| p.id).collect()
    }
}

/// Input container for a simulation.
#[derive(Debug, Clone)]
pub struct SimulationRequest {
    /// Processes, sorted by arrival time (stable on ties).
    pub processes: Vec<ProcessRecord>,
    /// Context-switch cost and quantum.
    pub config: SimulationConfig,
}

impl SimulationRequest {
    /// Creates a request. Processes are stably sorted by arrival time.
    pub fn new(mut processes: Vec<ProcessRecord>, config: SimulationConfig) -> Self {
        processes.sort_by_key(|p| p.arrival_time);
        Self { processes, config }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }
}

/// Runs a set of scheduling algorithms over the same input.
///
/// # Example
///
/// ```
/// use procsched::models::{ProcessRecord, SimulationConfig};
/// use procsched::scheduler::{Algorithm, SimulationRequest, Simulator};
///
/// let request = SimulationRequest::new(
///     vec![ProcessRecord::new(1, 0, 5), ProcessRecord::new(2, 1, 3)],
///     SimulationConfig::new(1, 2),
/// );
/// let results = Simulator::new().run(&request).unwrap();
/// assert_eq!(results.len(), 3);
/// assert_eq!(results[0].algorithm, Algorithm::Fcfs);
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    algorithms: Vec<Algorithm>,
}

impl Simulator {
    /// Creates a simulator running every algorithm.
    pub fn new() -> Self {
        Self {
            algorithms: Algorithm::ALL.to_vec(),
        }
    }

    /// Restricts the run to the given algorithms, in the given order.
    pub fn with_algorithms(mut self, algorithms: impl IntoIterator<Item = Algorithm>) -> Self {
        self.algorithms = algorithms.into_iter().collect();
        self
    }

    /// Validates the request, then runs each algorithm on a fresh copy.
    pub fn run(&self, request: &SimulationRequest) -> SimResult<Vec<SimulationResult>> {
        validate_input(&request.processes, &request.config)?;

        info!(
            processes = request.processes.len(),
            context_switch = request.config.context_switch_time,
            quantum = request.config.quantum,
            "starting simulation"
        );

        let results = self
            .algorithms
            .iter()
            .map(|alg| {
                let result = alg.scheduler().run(&request.processes, &request.config);
                info!(
                    algorithm = %alg,
                    end_time = result.timeline.end_time(),
                    switches = result.timeline.context_switch_count(),
                    "simulation finished"
                );
                result
            })
            .collect();

        Ok(results)
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}
