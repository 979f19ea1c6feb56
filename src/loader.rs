//! Simulation input loader.
//!
//! # Format
//!
//! Whitespace-separated integers (line breaks are not significant):
//!
//! ```text
//! <context_switch> <quantum>
//! <pid> <arrival> <burst>
//! <pid> <arrival> <burst>
//! ...
//! ```
//!
//! Processes are returned stably sorted by arrival time.

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::ConfigError;
use crate::models::{ProcessRecord, SimulationConfig};
use crate::scheduler::SimulationRequest;

/// Parses simulation input text.
pub fn parse_input(text: &str) -> Result<SimulationRequest, ConfigError> {
    let values = text
        .split_whitespace()
        .enumerate()
        .map(|(position, token)| {
            token
                .parse::<i64>()
                .map_err(|_| ConfigError::MalformedToken {
                    position: position + 1,
                    token: token.to_string(),
                })
        })
        .collect::<Result<Vec<i64>, _>>()?;

    let [context_switch, quantum, rest @ ..] = values.as_slice() else {
        return Err(ConfigError::MissingHeader);
    };

    let records = rest.chunks(3);
    let mut processes = Vec::with_capacity(records.len());
    for (i, record) in records.enumerate() {
        let &[pid, arrival, burst] = record else {
            return Err(ConfigError::TruncatedRecord {
                found: record.len(),
            });
        };
        // Header occupies tokens 1 and 2.
        let pid = u32::try_from(pid).map_err(|_| ConfigError::MalformedToken {
            position: 3 + 3 * i,
            token: pid.to_string(),
        })?;
        processes.push(ProcessRecord::new(pid, arrival, burst));
    }

    debug!(processes = processes.len(), "parsed input");
    Ok(SimulationRequest::new(
        processes,
        SimulationConfig::new(*context_switch, *quantum),
    ))
}

/// Reads and parses an input file.
pub fn load_file(path: impl AsRef<Path>) -> Result<SimulationRequest, ConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_input(&text)
}
