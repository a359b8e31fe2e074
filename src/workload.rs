//! Random workload generation.
//!
//! Produces small process sets with uniformly drawn arrival and burst
//! times. Driven by a caller-supplied RNG so runs are reproducible from a
//! seed.

use rand::Rng;

use crate::models::{ProcessSpec, Ticks};
use crate::validation::MAX_PROCESSES;

/// Generator of random process sets.
///
/// # Example
/// ```
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use u_cpu_schedule::workload::WorkloadGenerator;
///
/// let mut rng = SmallRng::seed_from_u64(1);
/// let specs = WorkloadGenerator::new().with_process_count(4).generate(&mut rng);
/// assert_eq!(specs.len(), 4);
/// assert!(specs.iter().all(|s| s.burst_time > 0));
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    process_count: Option<usize>,
    max_arrival: Ticks,
    max_burst: Ticks,
}

impl WorkloadGenerator {
    /// Creates a generator with a random count of 1..=`MAX_PROCESSES`,
    /// arrivals in 0..=10 and bursts in 1..=10.
    pub fn new() -> Self {
        Self {
            process_count: None,
            max_arrival: 10,
            max_burst: 10,
        }
    }

    /// Fixes the number of processes (clamped to 1..=`MAX_PROCESSES`).
    pub fn with_process_count(mut self, count: usize) -> Self {
        self.process_count = Some(count.clamp(1, MAX_PROCESSES));
        self
    }

    /// Sets the latest possible arrival tick.
    pub fn with_max_arrival(mut self, max_arrival: Ticks) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the largest possible burst (at least 1).
    pub fn with_max_burst(mut self, max_burst: Ticks) -> Self {
        self.max_burst = max_burst.max(1);
        self
    }

    /// Draws one process set.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<ProcessSpec> {
        let count = self
            .process_count
            .unwrap_or_else(|| rng.random_range(1..=MAX_PROCESSES));

        (0..count)
            .map(|_| {
                ProcessSpec::new(
                    rng.random_range(0..=self.max_arrival),
                    rng.random_range(1..=self.max_burst),
                )
            })
            .collect()
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_bounds_respected() {
        let mut rng = SmallRng::seed_from_u64(3);
        let generator = WorkloadGenerator::new().with_max_arrival(4).with_max_burst(2);

        for _ in 0..100 {
            let specs = generator.generate(&mut rng);
            assert!((1..=MAX_PROCESSES).contains(&specs.len()));
            for s in &specs {
                assert!(s.arrival_time <= 4);
                assert!((1..=2).contains(&s.burst_time));
            }
        }
    }

    #[test]
    fn test_same_seed_same_workload() {
        let generator = WorkloadGenerator::new();
        let a = generator.generate(&mut SmallRng::seed_from_u64(11));
        let b = generator.generate(&mut SmallRng::seed_from_u64(11));
        assert_eq!(a, b);
    }

    #[test]
    fn test_count_clamped() {
        let mut rng = SmallRng::seed_from_u64(5);
        let specs = WorkloadGenerator::new().with_process_count(50).generate(&mut rng);
        assert_eq!(specs.len(), MAX_PROCESSES);

        let specs = WorkloadGenerator::new()
            .with_max_burst(0)
            .with_process_count(1)
            .generate(&mut rng);
        assert_eq!(specs[0].burst_time, 1);
    }
}
