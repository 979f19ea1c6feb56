//! Shortest-Remaining-Time (preemptive).
//!
//! # Algorithm
//!
//! The CPU is reassigned every time unit. Arrived, unfinished processes sit
//! in a min-heap keyed by `(remaining, arrival, input index)`:
//!
//! 1. Admit every process with `arrival <= now`; its start time is the
//!    admission moment.
//! 2. Pop the best candidate and run it for one unit.
//! 3. If it finished, record completion. Otherwise put it back, and if other
//!    candidates were waiting charge one context switch.
//! 4. With nothing ready, jump the clock to the next arrival.
//!
//! # Complexity
//! O(W log n) where W = total burst time.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tracing::{debug, trace};

use super::{Algorithm, CpuScheduler, SimulationResult};
use crate::models::{fresh_copies, ProcessRecord, SimulationConfig, Timeline};

/// Shortest-Remaining-Time scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Srt;

impl CpuScheduler for Srt {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Srt
    }

    fn run(&self, processes: &[ProcessRecord], config: &SimulationConfig) -> SimulationResult {
        srt(processes, config.context_switch_time)
    }
}

/// Heap entry: (remaining, arrival, index into the process arena).
type Candidate = Reverse<(i64, i64, usize)>;

fn candidate(procs: &[ProcessRecord], idx: usize) -> Candidate {
    Reverse((procs[idx].remaining_time, procs[idx].arrival_time, idx))
}

/// Runs SRT over `processes`, which must be sorted by arrival time.
pub fn srt(processes: &[ProcessRecord], context_switch_time: i64) -> SimulationResult {
    let mut procs = fresh_copies(processes);
    let mut timeline = Timeline::new();
    let mut ready: BinaryHeap<Candidate> = BinaryHeap::new();
    let mut current_time = 0;
    let mut next_arrival = 0;

    while next_arrival < procs.len() || !ready.is_empty() {
        while next_arrival < procs.len() && procs[next_arrival].arrival_time <= current_time {
            trace!(pid = procs[next_arrival].id, time = current_time, "admit");
            procs[next_arrival].mark_started(current_time);
            ready.push(candidate(&procs, next_arrival));
            next_arrival += 1;
        }

        let Some(Reverse((_, _, idx))) = ready.pop() else {
            current_time = procs[next_arrival].arrival_time;
            continue;
        };

        let p = &mut procs[idx];
        debug!(pid = p.id, remaining = p.remaining_time, time = current_time, "dispatch");
        timeline.push_run(p.id, current_time, 1);
        p.remaining_time -= 1;
        current_time += 1;

        if p.remaining_time > 0 {
            let others_waiting = !ready.is_empty();
            ready.push(candidate(&procs, idx));
            if others_waiting {
                timeline.push_switch(current_time, context_switch_time);
                current_time += context_switch_time;
            }
        } else {
            p.complete(current_time);
        }
    }

    SimulationResult::new(Algorithm::Srt, procs, timeline)
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
    fn test_srt_reference_input() {
        let result = srt(&sample(), 1);
        let p = &result.processes;

        assert_eq!(p[0].start_time, Some(0));
        assert_eq!(p[0].finish_time, Some(11));
        assert_eq!(p[0].turnaround_time, Some(11));
        assert_eq!(p[0].waiting_time, Some(6));

        assert_eq!(p[1].start_time, Some(1));
        assert_eq!(p[1].finish_time, Some(7));
        assert_eq!(p[1].turnaround_time, Some(6));
        assert_eq!(p[1].waiting_time, Some(3));

        // P3 arrives during the switch at t=2..3 and is admitted at t=3.
        assert_eq!(p[2].start_time, Some(3));
        assert_eq!(p[2].finish_time, Some(4));
        assert_eq!(p[2].turnaround_time, Some(2));
        assert_eq!(p[2].waiting_time, Some(1));

        assert_eq!(
            labels(&result),
            vec!["P1", "P2", "CS", "P3", "P2", "CS", "P2", "P1", "P1", "P1", "P1"]
        );
    }

    #[test]
    fn test_srt_tie_breaks_on_arrival() {
        // At t=1, P1 has 2 left and P2 has 2: P1 arrived first and wins.
        let processes = vec![ProcessRecord::new(1, 0, 3), ProcessRecord::new(2, 1, 2)];
        let result = srt(&processes, 0);
        assert_eq!(labels(&result), vec!["P1", "P1", "P1", "P2", "P2"]);
        assert_eq!(result.processes[0].finish_time, Some(3));
        assert_eq!(result.processes[1].finish_time, Some(5));
    }

    #[test]
    fn test_srt_equal_keys_keep_input_order() {
        let processes = vec![ProcessRecord::new(9, 0, 1), ProcessRecord::new(4, 0, 1)];
        let result = srt(&processes, 0);
        assert_eq!(labels(&result), vec!["P9", "P4"]);
    }

    #[test]
    fn test_srt_lone_process_pays_no_switch() {
        let result = srt(&[ProcessRecord::new(1, 0, 4)], 5);
        assert_eq!(result.timeline.context_switch_count(), 0);
        assert_eq!(result.processes[0].finish_time, Some(4));
    }

    #[test]
    fn test_srt_idle_until_arrival() {
        let processes = vec![ProcessRecord::new(1, 3, 2)];
        let result = srt(&processes, 1);
        assert_eq!(result.processes[0].start_time, Some(3));
        assert_eq!(result.processes[0].finish_time, Some(5));
        assert_eq!(result.timeline.start_time(), 3);
    }

    #[test]
    fn test_srt_preempts_for_shorter_arrival() {
        let processes = vec![ProcessRecord::new(1, 0, 4), ProcessRecord::new(2, 1, 1)];
        let result = srt(&processes, 0);
        assert_eq!(labels(&result), vec!["P1", "P2", "P1", "P1", "P1"]);
        assert_eq!(result.processes[1].finish_time, Some(2));
        assert_eq!(result.processes[0].finish_time, Some(5));
    }

    #[test]
    fn test_srt_empty() {
        let result = srt(&[], 1);
        assert!(result.timeline.is_empty());
    }
}
