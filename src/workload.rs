//! Random workload generation.
//!
//! Produces reproducible process sets for experiments and property checks.
//! The same seed always yields the same workload.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{Pid, ProcessRecord};

/// Seeded generator of random process sets.
///
/// # Example
/// ```
/// use procsched::workload::WorkloadGenerator;
///
/// let procs = WorkloadGenerator::new(5).with_seed(7).generate();
/// assert_eq!(procs.len(), 5);
/// assert!(procs.windows(2).all(|w| w[0].arrival_time <= w[1].arrival_time));
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    count: usize,
    max_arrival: i64,
    min_burst: i64,
    max_burst: i64,
    seed: u64,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 20,
            min_burst: 1,
            max_burst: 10,
            seed: 0,
        }
    }

    /// Sets the latest possible arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the inclusive burst range. Bursts are always at least 1.
    pub fn with_burst_range(mut self, min_burst: i64, max_burst: i64) -> Self {
        self.min_burst = min_burst.max(1);
        self.max_burst = max_burst.max(self.min_burst);
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generates processes with ids `1..=count`, sorted by arrival time.
    pub fn generate(&self) -> Vec<ProcessRecord> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut processes: Vec<ProcessRecord> = (1..=self.count)
            .map(|id| {
                let arrival = rng.random_range(0..=self.max_arrival);
                let burst = rng.random_range(self.min_burst..=self.max_burst);
                ProcessRecord::new(id as Pid, arrival, burst)
            })
            .collect();
        processes.sort_by_key(|p| p.arrival_time);
        processes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_deterministic() {
        let a = WorkloadGenerator::new(12).with_seed(42).generate();
        let b = WorkloadGenerator::new(12).with_seed(42).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_respects_bounds() {
        let procs = WorkloadGenerator::new(100)
            .with_max_arrival(5)
            .with_burst_range(2, 4)
            .with_seed(1)
            .generate();
        assert_eq!(procs.len(), 100);
        for p in &procs {
            assert!((0..=5).contains(&p.arrival_time));
            assert!((2..=4).contains(&p.burst_time));
            assert_eq!(p.remaining_time, p.burst_time);
        }
    }

    #[test]
    fn test_generate_unique_ids() {
        let procs = WorkloadGenerator::new(30).with_seed(3).generate();
        let mut ids: Vec<Pid> = procs.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 30);
    }

    #[test]
    fn test_burst_range_clamped() {
        let procs = WorkloadGenerator::new(10)
            .with_burst_range(-5, 0)
            .generate();
        assert!(procs.iter().all(|p| p.burst_time == 1));
    }

    #[test]
    fn test_generate_empty() {
        assert!(WorkloadGenerator::new(0).generate().is_empty());
    }
}
