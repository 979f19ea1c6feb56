//! Simulation configuration.

use serde::{Deserialize, Serialize};

/// Process-wide simulation parameters, read once and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Overhead charged per context switch (>= 0).
    pub context_switch_time: i64,
    /// Round-Robin time slice (> 0).
    pub quantum: i64,
}

impl SimulationConfig {
    /// Creates a configuration.
    pub fn new(context_switch_time: i64, quantum: i64) -> Self {
        Self {
            context_switch_time,
            quantum,
        }
    }

    /// Replaces the context-switch cost.
    pub fn with_context_switch_time(mut self, context_switch_time: i64) -> Self {
        self.context_switch_time = context_switch_time;
        self
    }

    /// Replaces the Round-Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(0, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let cfg = SimulationConfig::default()
            .with_context_switch_time(2)
            .with_quantum(4);
        assert_eq!(cfg, SimulationConfig::new(2, 4));
    }

    #[test]
    fn test_config_serde() {
        let cfg = SimulationConfig::new(1, 3);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
