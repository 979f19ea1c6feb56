//! Process model.
//!
//! A process is a CPU-bound unit of work with an arrival time and a total
//! burst (CPU demand). Static inputs never change; the remaining-time
//! counter and the derived timing fields are filled in by a scheduler run.
//!
//! # Time Representation
//! All times are integral time units relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// Process identifier.
pub type Pid = u32;

/// One process and its timing statistics.
///
/// Derived fields are `None` until a scheduler computes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Unique process identifier (stable across algorithms).
    pub id: Pid,
    /// Time the process becomes ready.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// CPU time still owed. Starts at `burst_time`, ends at 0.
    pub remaining_time: i64,
    /// Time the process was first made ready (SRT/RR) or dispatched (FCFS).
    pub start_time: Option<i64>,
    /// Time `remaining_time` reached 0.
    pub finish_time: Option<i64>,
    /// `turnaround_time - burst_time`.
    pub waiting_time: Option<i64>,
    /// `finish_time - arrival_time`.
    pub turnaround_time: Option<i64>,
}

impl ProcessRecord {
    /// Creates a process with fresh simulation state.
    pub fn new(id: Pid, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            start_time: None,
            finish_time: None,
            waiting_time: None,
            turnaround_time: None,
        }
    }

    /// Returns a copy with the same inputs and all simulation state reset.
    pub fn fresh_copy(&self) -> Self {
        Self::new(self.id, self.arrival_time, self.burst_time)
    }

    /// Records the start time unless one is already set.
    pub(crate) fn mark_started(&mut self, time: i64) {
        if self.start_time.is_none() {
            self.start_time = Some(time);
        }
    }

    /// Records completion at `time` and derives turnaround and waiting time.
    pub(crate) fn complete(&mut self, time: i64) {
        let turnaround = time - self.arrival_time;
        self.remaining_time = 0;
        self.finish_time = Some(time);
        self.turnaround_time = Some(turnaround);
        self.waiting_time = Some(turnaround - self.burst_time);
    }
}

/// Copies a process set with fresh simulation state.
pub fn fresh_copies(processes: &[ProcessRecord]) -> Vec<ProcessRecord> {
    processes.iter().map(ProcessRecord::fresh_copy).collect()
}
