//! Execution timeline (Gantt chart data).
//!
//! A timeline is the ordered, append-only record of what occupied the CPU
//! during a simulation: either a process running or context-switch overhead.
//! Idle gaps are implicit (the next segment simply starts later).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Pid;

/// What occupied the CPU during a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentLabel {
    /// The given process was executing.
    Process(Pid),
    /// Context-switch overhead.
    ContextSwitch,
}

impl fmt::Display for SegmentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentLabel::Process(pid) => write!(f, "P{pid}"),
            SegmentLabel::ContextSwitch => write!(f, "CS"),
        }
    }
}

/// One contiguous interval on the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSegment {
    /// Absolute start time.
    pub start: i64,
    /// Length of the interval (always > 0).
    pub duration: i64,
    /// Occupant.
    pub label: SegmentLabel,
}

impl TimelineSegment {
    /// End time (exclusive).
    #[inline]
    pub fn end(&self) -> i64 {
        self.start + self.duration
    }

    /// Whether this segment is context-switch overhead.
    #[inline]
    pub fn is_context_switch(&self) -> bool {
        self.label == SegmentLabel::ContextSwitch
    }
}

/// Ordered sequence of timeline segments built up during a simulation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    segments: Vec<TimelineSegment>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a run of `pid` for `duration` units starting at `start`.
    pub fn push_run(&mut self, pid: Pid, start: i64, duration: i64) {
        self.push(start, duration, SegmentLabel::Process(pid));
    }

    /// Appends context-switch overhead of `duration` units starting at `start`.
    pub fn push_switch(&mut self, start: i64, duration: i64) {
        self.push(start, duration, SegmentLabel::ContextSwitch);
    }

    // Zero-length segments carry no information and are dropped.
    fn push(&mut self, start: i64, duration: i64, label: SegmentLabel) {
        if duration <= 0 {
            return;
        }
        self.segments.push(TimelineSegment {
            start,
            duration,
            label,
        });
    }

    /// The segments in execution order.
    pub fn segments(&self) -> &[TimelineSegment] {
        &self.segments
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether no segment has been recorded.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Start of the first segment (0 when empty).
    pub fn start_time(&self) -> i64 {
        self.segments.first().map(|s| s.start).unwrap_or(0)
    }

    /// End of the last segment (0 when empty).
    pub fn end_time(&self) -> i64 {
        self.segments.last().map(|s| s.end()).unwrap_or(0)
    }

    /// Total time the given process spent executing.
    pub fn busy_time_for(&self, pid: Pid) -> i64 {
        self.segments
            .iter()
            .filter(|s| s.label == SegmentLabel::Process(pid))
            .map(|s| s.duration)
            .sum()
    }

    /// Total time spent executing any process.
    pub fn process_time(&self) -> i64 {
        self.segments
            .iter()
            .filter(|s| !s.is_context_switch())
            .map(|s| s.duration)
            .sum()
    }

    /// Number of context switches charged.
    pub fn context_switch_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_context_switch()).count()
    }

    /// Total context-switch overhead.
    pub fn context_switch_time(&self) -> i64 {
        self.segments
            .iter()
            .filter(|s| s.is_context_switch())
            .map(|s| s.duration)
            .sum()
    }
}
