//! Simulation quality metrics (KPIs).
//!
//! Computes standard CPU-scheduling performance indicators from a
//! completed simulation result.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | Mean of `turnaround - burst` |
//! | Avg Turnaround | Mean of `finish - arrival` |
//! | Makespan | Latest finish time |
//! | CPU Busy | Time spent executing processes |
//! | Utilization | CPU busy / makespan |
//! | Throughput | Processes completed per time unit |
//! | Context Switches | Count and total overhead |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use super::SimulationResult;
use crate::error::{SimError, SimResult};

/// Simulation performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Latest finish time.
    pub makespan: i64,
    /// Time spent executing processes.
    pub cpu_busy_time: i64,
    /// CPU busy / makespan (0.0..1.0).
    pub cpu_utilization: f64,
    /// Processes completed per time unit.
    pub throughput: f64,
    /// Number of context switches charged.
    pub context_switches: usize,
    /// Total context-switch overhead.
    pub context_switch_time: i64,
}

impl ScheduleKpi {
    /// Computes KPIs from a completed simulation.
    ///
    /// # Errors
    /// - [`SimError::EmptyProcessSet`] when there is nothing to average over.
    /// - [`SimError::Incomplete`] when a process has no finish time.
    pub fn calculate(result: &SimulationResult) -> SimResult<Self> {
        if result.processes.is_empty() {
            return Err(SimError::EmptyProcessSet);
        }

        let mut total_waiting: f64 = 0.0;
        let mut total_turnaround: f64 = 0.0;
        let mut makespan: i64 = 0;

        for p in &result.processes {
            let (Some(finish), Some(waiting), Some(turnaround)) =
                (p.finish_time, p.waiting_time, p.turnaround_time)
            else {
                return Err(SimError::Incomplete(p.id));
            };
            total_waiting += waiting as f64;
            total_turnaround += turnaround as f64;
            makespan = makespan.max(finish);
        }

        let count = result.processes.len() as f64;
        let cpu_busy_time = result.timeline.process_time();

        let (cpu_utilization, throughput) = if makespan > 0 {
            (
                cpu_busy_time as f64 / makespan as f64,
                count / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Ok(Self {
            avg_waiting_time: total_waiting / count,
            avg_turnaround_time: total_turnaround / count,
            makespan,
            cpu_busy_time,
            cpu_utilization,
            throughput,
            context_switches: result.timeline.context_switch_count(),
            context_switch_time: result.timeline.context_switch_time(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProcessRecord, Timeline};
    use crate::scheduler::{fcfs, round_robin, srt, Algorithm};

    fn sample() -> Vec<ProcessRecord> {
        vec![
            ProcessRecord::new(1, 0, 5),
            ProcessRecord::new(2, 1, 3),
            ProcessRecord::new(3, 2, 1),
        ]
    }

    #[test]
    fn test_kpi_fcfs() {
        let kpi = ScheduleKpi::calculate(&fcfs(&sample(), 1)).unwrap();
        // Waiting 0,5,8; turnaround 5,8,9.
        assert!((kpi.avg_waiting_time - 13.0 / 3.0).abs() < 1e-10);
        assert!((kpi.avg_turnaround_time - 22.0 / 3.0).abs() < 1e-10);
        assert_eq!(kpi.makespan, 11);
        assert_eq!(kpi.cpu_busy_time, 9);
        assert_eq!(kpi.context_switches, 2);
        assert_eq!(kpi.context_switch_time, 2);
        assert!((kpi.cpu_utilization - 9.0 / 11.0).abs() < 1e-10);
        assert!((kpi.throughput - 3.0 / 11.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_srt() {
        let kpi = ScheduleKpi::calculate(&srt(&sample(), 1)).unwrap();
        // Waiting 6,3,1; turnaround 11,6,2.
        assert!((kpi.avg_waiting_time - 10.0 / 3.0).abs() < 1e-10);
        assert!((kpi.avg_turnaround_time - 19.0 / 3.0).abs() < 1e-10);
        assert_eq!(kpi.makespan, 11);
        assert_eq!(kpi.context_switches, 2);
    }

    #[test]
    fn test_kpi_round_robin() {
        let kpi = ScheduleKpi::calculate(&round_robin(&sample(), 1, 2)).unwrap();
        // Waiting 7,7,4; turnaround 12,10,5.
        assert!((kpi.avg_waiting_time - 6.0).abs() < 1e-10);
        assert!((kpi.avg_turnaround_time - 9.0).abs() < 1e-10);
        assert_eq!(kpi.makespan, 12);
        assert_eq!(kpi.context_switches, 3);
    }

    #[test]
    fn test_kpi_averages_match_fields() {
        let result = round_robin(&sample(), 0, 1);
        let kpi = ScheduleKpi::calculate(&result).unwrap();
        let n = result.processes.len() as f64;
        let waiting: i64 = result.processes.iter().filter_map(|p| p.waiting_time).sum();
        let turnaround: i64 = result
            .processes
            .iter()
            .filter_map(|p| p.turnaround_time)
            .sum();
        assert!((kpi.avg_waiting_time - waiting as f64 / n).abs() < 1e-10);
        assert!((kpi.avg_turnaround_time - turnaround as f64 / n).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty() {
        let result = SimulationResult::new(Algorithm::Fcfs, vec![], Timeline::new());
        assert!(matches!(
            ScheduleKpi::calculate(&result),
            Err(SimError::EmptyProcessSet)
        ));
    }

    #[test]
    fn test_kpi_incomplete() {
        let result = SimulationResult::new(
            Algorithm::Srt,
            vec![ProcessRecord::new(4, 0, 2)],
            Timeline::new(),
        );
        assert!(matches!(
            ScheduleKpi::calculate(&result),
            Err(SimError::Incomplete(4))
        ));
    }

    #[test]
    fn test_kpi_full_utilization_without_switches() {
        let kpi = ScheduleKpi::calculate(&fcfs(&sample(), 0)).unwrap();
        assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
        assert_eq!(kpi.context_switches, 0);
    }
}
