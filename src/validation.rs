//! Input validation for simulation runs.
//!
//! Checks process and configuration invariants before any process is
//! admitted to a scheduler. Detects:
//! - Duplicate process IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Negative context-switch cost
//! - Non-positive Round-Robin quantum
//! - Inputs whose simulated clock would not fit in `i64`

use std::collections::HashSet;
use thiserror::Error;

use crate::models::{ProcessRecord, SimulationConfig};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process requires no CPU time (or negative time).
    NonPositiveBurst,
    /// Context-switch cost is negative.
    NegativeContextSwitch,
    /// Round-Robin quantum is zero or negative.
    NonPositiveQuantum,
    /// The latest reachable simulation time exceeds `i64::MAX`.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input of a simulation run.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(processes: &[ProcessRecord], config: &SimulationConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.context_switch_time < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeContextSwitch,
            format!(
                "Context-switch time must be >= 0, got {}",
                config.context_switch_time
            ),
        ));
    }

    if config.quantum <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Quantum must be > 0, got {}", config.quantum),
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {} arrives at {}", p.id, p.arrival_time),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {} has burst {}", p.id, p.burst_time),
            ));
        }
    }

    if time_horizon(processes, config).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Simulation time would exceed the representable range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on any clock value a scheduler can reach.
///
/// `max(arrival) + sum(burst) + (sum(burst) + n) * context_switch`: every
/// run unit may be followed by at most one switch. `None` on overflow.
fn time_horizon(processes: &[ProcessRecord], config: &SimulationConfig) -> Option<i64> {
    let total_burst = processes
        .iter()
        .try_fold(0i64, |acc, p| acc.checked_add(p.burst_time.max(0)))?;
    let max_arrival = processes
        .iter()
        .map(|p| p.arrival_time)
        .max()
        .unwrap_or(0)
        .max(0);
    let switches = total_burst.checked_add(i64::try_from(processes.len()).ok()?)?;
    let overhead = switches.checked_mul(config.context_switch_time.max(0))?;
    max_arrival.checked_add(total_burst)?.checked_add(overhead)
}
