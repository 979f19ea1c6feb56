//! First-Come-First-Served (non-preemptive).
//!
//! # Algorithm
//!
//! 1. Walk processes in arrival order.
//! 2. Advance the clock to the arrival time if the CPU would otherwise idle.
//! 3. Run the process to completion.
//! 4. Charge one context switch before the next process (none after the last).
//!
//! # Complexity
//! O(n).

use tracing::debug;

use super::{Algorithm, CpuScheduler, SimulationResult};
use crate::models::{fresh_copies, ProcessRecord, SimulationConfig, Timeline};

/// First-Come-First-Served scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl CpuScheduler for Fcfs {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fcfs
    }

    fn run(&self, processes: &[ProcessRecord], config: &SimulationConfig) -> SimulationResult {
        fcfs(processes, config.context_switch_time)
    }
}

/// Runs FCFS over `processes`, which must be sorted by arrival time.
pub fn fcfs(processes: &[ProcessRecord], context_switch_time: i64) -> SimulationResult {
    let mut procs = fresh_copies(processes);
    let mut timeline = Timeline::new();
    let mut current_time = 0;
    let last = procs.len().saturating_sub(1);

    for (idx, p) in procs.iter_mut().enumerate() {
        current_time = current_time.max(p.arrival_time);

        debug!(pid = p.id, time = current_time, "dispatch");
        p.mark_started(current_time);
        timeline.push_run(p.id, current_time, p.burst_time);
        current_time += p.burst_time;
        p.complete(current_time);

        if idx != last {
            timeline.push_switch(current_time, context_switch_time);
            current_time += context_switch_time;
        }
    }

    SimulationResult::new(Algorithm::Fcfs, procs, timeline)
}
