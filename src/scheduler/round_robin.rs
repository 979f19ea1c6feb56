//! Round-Robin (preemptive, fixed quantum).
//!
//! # Algorithm
//!
//! 1. Admit every process with `arrival <= now` to the tail of a FIFO
//!    ready queue; its start time is the admission moment.
//! 2. Run the head for `min(quantum, remaining)`.
//! 3. If it finished, record completion. Otherwise charge a context switch
//!    (always, even with an empty queue), admit the arrivals up to the new
//!    clock, then re-enqueue the preempted process behind them.
//! 4. With nothing ready, jump the clock to the next arrival.
//!
//! # Complexity
//! O(W / q + n) where W = total burst time, q = quantum.

use std::collections::VecDeque;
use tracing::{debug, trace};

use super::{Algorithm, CpuScheduler, SimulationResult};
use crate::models::{fresh_copies, ProcessRecord, SimulationConfig, Timeline};

/// Round-Robin scheduler. The quantum comes from [`SimulationConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundRobin;

impl CpuScheduler for RoundRobin {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RoundRobin
    }

    fn run(&self, processes: &[ProcessRecord], config: &SimulationConfig) -> SimulationResult {
        round_robin(processes, config.context_switch_time, config.quantum)
    }
}

/// Arrival cursor over the arrival-sorted process arena.
struct Admission {
    next: usize,
}

impl Admission {
    fn admit(&mut self, procs: &mut [ProcessRecord], ready: &mut VecDeque<usize>, now: i64) {
        while self.next < procs.len() && procs[self.next].arrival_time <= now {
            trace!(pid = procs[self.next].id, time = now, "admit");
            procs[self.next].mark_started(now);
            ready.push_back(self.next);
            self.next += 1;
        }
    }

    fn exhausted(&self, procs: &[ProcessRecord]) -> bool {
        self.next >= procs.len()
    }
}

/// Runs Round-Robin over `processes`, which must be sorted by arrival time.
///
/// `quantum` must be positive.
pub fn round_robin(
    processes: &[ProcessRecord],
    context_switch_time: i64,
    quantum: i64,
) -> SimulationResult {
    let mut procs = fresh_copies(processes);
    let mut timeline = Timeline::new();
    let mut ready: VecDeque<usize> = VecDeque::new();
    let mut admission = Admission { next: 0 };
    let mut current_time = 0;

    while !admission.exhausted(&procs) || !ready.is_empty() {
        admission.admit(&mut procs, &mut ready, current_time);

        let Some(idx) = ready.pop_front() else {
            current_time = procs[admission.next].arrival_time;
            continue;
        };

        let p = &mut procs[idx];
        let slice = quantum.min(p.remaining_time);
        debug!(pid = p.id, slice, time = current_time, "dispatch");
        timeline.push_run(p.id, current_time, slice);
        p.remaining_time -= slice;
        current_time += slice;

        if p.remaining_time > 0 {
            timeline.push_switch(current_time, context_switch_time);
            current_time += context_switch_time;
            admission.admit(&mut procs, &mut ready, current_time);
            ready.push_back(idx);
        } else {
            p.complete(current_time);
        }
    }

    SimulationResult::new(Algorithm::RoundRobin, procs, timeline)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ProcessRecord> {
        vec![
            ProcessRecord::new(1, 0, 5),
            ProcessRecord::new(2, 1, 3),
            ProcessRecord::new(3, 2, 1),
        ]
    }

    fn labels(result: &SimulationResult) -> Vec<String> {
        result
            .timeline
            .segments()
            .iter()
            .map(|s| s.label.to_string())
            .collect()
    }

    #[test]
    fn test_rr_reference_input() {
        let result = round_robin(&sample(), 1, 2);
        let p = &result.processes;

        assert_eq!(p[0].start_time, Some(0));
        assert_eq!(p[0].finish_time, Some(12));
        assert_eq!(p[0].turnaround_time, Some(12));
        assert_eq!(p[0].waiting_time, Some(7));

        // P2 and P3 are admitted once P1's first slice and switch end.
        assert_eq!(p[1].start_time, Some(3));
        assert_eq!(p[1].finish_time, Some(11));
        assert_eq!(p[1].turnaround_time, Some(10));
        assert_eq!(p[1].waiting_time, Some(7));

        assert_eq!(p[2].start_time, Some(3));
        assert_eq!(p[2].finish_time, Some(7));
        assert_eq!(p[2].turnaround_time, Some(5));
        assert_eq!(p[2].waiting_time, Some(4));

        assert_eq!(
            labels(&result),
            vec!["P1", "CS", "P2", "CS", "P3", "P1", "CS", "P2", "P1"]
        );
        assert_eq!(result.timeline.end_time(), 12);
    }

    #[test]
    fn test_rr_switch_charged_when_alone() {
        let result = round_robin(&[ProcessRecord::new(1, 0, 5)], 1, 2);
        assert_eq!(labels(&result), vec!["P1", "CS", "P1", "CS", "P1"]);
        assert_eq!(result.processes[0].finish_time, Some(7));
    }

    #[test]
    fn test_rr_admits_before_requeue() {
        // P2 arrives exactly when P1's slice ends: it runs before P1 resumes.
        let processes = vec![ProcessRecord::new(1, 0, 4), ProcessRecord::new(2, 2, 2)];
        let result = round_robin(&processes, 0, 2);
        assert_eq!(labels(&result), vec!["P1", "P2", "P1"]);
        assert_eq!(result.processes[1].finish_time, Some(4));
        assert_eq!(result.processes[0].finish_time, Some(6));
    }

    #[test]
    fn test_rr_large_quantum_matches_fcfs_order() {
        let result = round_robin(&sample(), 1, 10);
        assert_eq!(labels(&result), vec!["P1", "P2", "P3"]);
        let finish: Vec<_> = result.processes.iter().map(|p| p.finish_time).collect();
        assert_eq!(finish, vec![Some(5), Some(8), Some(9)]);
    }

    #[test]
    fn test_rr_idle_until_arrival() {
        let processes = vec![ProcessRecord::new(1, 0, 1), ProcessRecord::new(2, 5, 1)];
        let result = round_robin(&processes, 1, 2);
        assert_eq!(result.processes[1].start_time, Some(5));
        assert_eq!(result.processes[1].finish_time, Some(6));
    }

    #[test]
    fn test_rr_empty() {
        let result = round_robin(&[], 1, 2);
        assert!(result.processes.is_empty());
        assert!(result.timeline.is_empty());
    }
}
