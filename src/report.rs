//! Text and JSON rendering of simulation results.
//!
//! The text report mirrors a classic OS-course layout:
//!
//! ```text
//! Gantt Chart for FCFS:
//! -------------------------------------------
//! | P1 | CS | P2 |
//! -------------------------------------------
//! 0 5 6 9
//! ```
//!
//! followed by a per-process results table and the two averages.

use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::error::SimResult;
use crate::models::{ProcessRecord, Timeline, TimelineSegment};
use crate::scheduler::{Algorithm, ScheduleKpi, SimulationResult};

const RULE: &str = "-------------------------------------------";

/// Serializable bundle of one algorithm's output and metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    /// The discipline reported.
    pub algorithm: Algorithm,
    /// Completed records.
    pub processes: Vec<ProcessRecord>,
    /// Execution segments.
    pub timeline: Vec<TimelineSegment>,
    /// Aggregate metrics.
    pub kpi: ScheduleKpi,
}

impl SimulationReport {
    /// Builds a report, computing KPIs.
    pub fn from_result(result: &SimulationResult) -> SimResult<Self> {
        Ok(Self {
            algorithm: result.algorithm,
            processes: result.processes.clone(),
            timeline: result.timeline.segments().to_vec(),
            kpi: ScheduleKpi::calculate(result)?,
        })
    }
}

/// Renders the Gantt chart: a bar of labels over a time ruler.
pub fn render_gantt(timeline: &Timeline, algorithm: Algorithm) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Gantt Chart for {algorithm}:");
    let _ = writeln!(out, "{RULE}");
    for seg in timeline.segments() {
        let _ = write!(out, "| {} ", seg.label);
    }
    let _ = writeln!(out, "|");
    let _ = writeln!(out, "{RULE}");

    let mut ruler = vec![timeline.start_time().to_string()];
    ruler.extend(timeline.segments().iter().map(|s| s.end().to_string()));
    let _ = writeln!(out, "{}", ruler.join(" "));
    out
}

/// Renders the per-process table followed by the averages.
pub fn render_table(
    processes: &[ProcessRecord],
    kpi: &ScheduleKpi,
    algorithm: Algorithm,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Results for {algorithm}:");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "PID\tStart\tFinish\tWaiting\tTurnaround");
    let _ = writeln!(out, "{RULE}");
    for p in processes {
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}",
            p.id,
            field(p.start_time),
            field(p.finish_time),
            field(p.waiting_time),
            field(p.turnaround_time)
        );
    }
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Average Waiting Time: {:.2}", kpi.avg_waiting_time);
    let _ = writeln!(out, "Average Turnaround Time: {:.2}", kpi.avg_turnaround_time);
    let _ = writeln!(out, "{RULE}");
    out
}

fn field(value: Option<i64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Renders the full text report for one algorithm.
///
/// Fails when the process set is empty or incomplete.
pub fn render_report(result: &SimulationResult) -> SimResult<String> {
    let kpi = ScheduleKpi::calculate(result)?;
    let mut out = render_gantt(&result.timeline, result.algorithm);
    out.push('\n');
    out.push_str(&render_table(&result.processes, &kpi, result.algorithm));
    Ok(out)
}

/// Renders every result as one pretty-printed JSON array.
pub fn render_json(results: &[SimulationResult]) -> SimResult<String> {
    let reports = results
        .iter()
        .map(SimulationReport::from_result)
        .collect::<SimResult<Vec<_>>>()?;
    Ok(serde_json::to_string_pretty(&reports)?)
}
