//! Simulation domain models.
//!
//! Provides the data types handed between the loader, the schedulers and
//! the reporter.
//!
//! | Type | Role |
//! |------|------|
//! | `ProcessRecord` | One process: inputs plus derived timing fields |
//! | `Timeline` | Ordered CPU occupancy segments (Gantt chart data) |
//! | `SimulationConfig` | Context-switch cost and Round-Robin quantum |

mod config;
mod process;
mod timeline;

pub use config::SimulationConfig;
pub use process::{fresh_copies, Pid, ProcessRecord};
pub use timeline::{SegmentLabel, Timeline, TimelineSegment};
