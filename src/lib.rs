//! Single-CPU process scheduling simulator.
//!
//! Simulates a fixed, known-in-advance process set under three classic
//! disciplines and reports a Gantt chart plus per-process timing metrics
//! for each.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessRecord`, `Timeline`, `SimulationConfig`
//! - **`scheduler`**: FCFS, SRT and Round-Robin, the `Simulator` driver, and `ScheduleKpi`
//! - **`validation`**: Input invariant checks (duplicate IDs, non-positive bursts, bad config)
//! - **`loader`**: Input text parser
//! - **`report`**: Gantt chart, results table and JSON rendering
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use procsched::loader::parse_input;
//! use procsched::report::render_report;
//! use procsched::scheduler::Simulator;
//!
//! let request = parse_input("1 2\n1 0 5\n2 1 3\n3 2 1\n").unwrap();
//! for result in Simulator::new().run(&request).unwrap() {
//!     println!("{}", render_report(&result).unwrap());
//! }
//! ```

pub mod error;
pub mod loader;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod telemetry;
pub mod validation;
pub mod workload;

pub use error::{ConfigError, SimError, SimResult};
