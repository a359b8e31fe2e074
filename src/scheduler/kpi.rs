//! Run quality metrics (KPIs).
//!
//! Computes aggregate performance indicators from the per-process outcomes
//! of a completed simulation run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | mean(waiting) |
//! | Avg Turnaround | mean(turnaround) |
//! | Makespan | max(completion) - min(arrival) |
//! | Throughput | processes / makespan |
//! | CPU Efficiency | sum(burst) / makespan * 100 |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::{ProcessOutcome, Ticks};

/// Aggregate performance indicators of one run.
///
/// Values are kept at full precision; use [`Metrics::rounded`] for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Mean waiting time (ticks).
    pub avg_waiting_time: f64,
    /// Mean turnaround time (ticks).
    pub avg_turnaround_time: f64,
    /// Span from earliest arrival to latest completion (ticks).
    pub makespan: Ticks,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Share of the makespan spent running processes (0..100).
    pub cpu_efficiency: f64,
}

impl Metrics {
    /// Computes metrics from per-process outcomes.
    ///
    /// Rates are 0.0 when there is nothing to measure (no outcomes or a
    /// zero makespan), which cannot happen for a workload with a positive
    /// burst.
    pub fn calculate(outcomes: &[ProcessOutcome]) -> Self {
        let count = outcomes.len();
        let mean = |total: Ticks| {
            if count == 0 {
                0.0
            } else {
                total as f64 / count as f64
            }
        };

        let total_waiting: Ticks = outcomes.iter().map(|o| o.waiting_time).sum();
        let total_turnaround: Ticks = outcomes.iter().map(|o| o.turnaround_time).sum();
        let total_burst: Ticks = outcomes.iter().map(|o| o.burst_time).sum();

        let last_completion = outcomes.iter().map(|o| o.completion_time).max();
        let first_arrival = outcomes.iter().map(|o| o.arrival_time).min();
        let makespan = match (last_completion, first_arrival) {
            (Some(end), Some(start)) => end.saturating_sub(start),
            _ => 0,
        };

        let (throughput, cpu_efficiency) = if makespan == 0 {
            (0.0, 0.0)
        } else {
            (
                count as f64 / makespan as f64,
                total_burst as f64 / makespan as f64 * 100.0,
            )
        };

        Self {
            avg_waiting_time: mean(total_waiting),
            avg_turnaround_time: mean(total_turnaround),
            makespan,
            throughput,
            cpu_efficiency,
        }
    }

    /// Copy with every rate rounded to two decimal places.
    pub fn rounded(&self) -> Self {
        Self {
            avg_waiting_time: round2(self.avg_waiting_time),
            avg_turnaround_time: round2(self.avg_turnaround_time),
            makespan: self.makespan,
            throughput: round2(self.throughput),
            cpu_efficiency: round2(self.cpu_efficiency),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(id: usize, arrival: Ticks, burst: Ticks, completion: Ticks) -> ProcessOutcome {
        ProcessOutcome {
            id,
            arrival_time: arrival,
            burst_time: burst,
            completion_time: completion,
            waiting_time: completion - arrival - burst,
            turnaround_time: completion - arrival,
        }
    }

    #[test]
    fn test_metrics_basic() {
        // Round Robin q=2 over arrivals [0,1,2], bursts [5,3,1].
        let outcomes = vec![outcome(1, 0, 5, 9), outcome(2, 1, 3, 8), outcome(3, 2, 1, 5)];
        let m = Metrics::calculate(&outcomes);

        assert_eq!(m.makespan, 9);
        assert!((m.avg_waiting_time - 10.0 / 3.0).abs() < 1e-10);
        assert!((m.avg_turnaround_time - 19.0 / 3.0).abs() < 1e-10);
        assert!((m.throughput - 3.0 / 9.0).abs() < 1e-10);
        assert!((m.cpu_efficiency - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_with_idle_time() {
        // Busy 4 of 6 ticks.
        let outcomes = vec![outcome(1, 0, 2, 2), outcome(2, 4, 2, 6)];
        let m = Metrics::calculate(&outcomes);
        assert_eq!(m.makespan, 6);
        assert!((m.cpu_efficiency - 400.0 / 6.0).abs() < 1e-10);
        assert!((m.avg_waiting_time - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_makespan_starts_at_first_arrival() {
        let outcomes = vec![outcome(1, 3, 2, 5)];
        let m = Metrics::calculate(&outcomes);
        assert_eq!(m.makespan, 2);
        assert!((m.throughput - 0.5).abs() < 1e-10);
        assert!((m.cpu_efficiency - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_empty() {
        let m = Metrics::calculate(&[]);
        assert_eq!(m.makespan, 0);
        assert!((m.throughput - 0.0).abs() < 1e-10);
        assert!((m.avg_waiting_time - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_rounded() {
        let outcomes = vec![outcome(1, 0, 5, 9), outcome(2, 1, 3, 8), outcome(3, 2, 1, 5)];
        let m = Metrics::calculate(&outcomes).rounded();
        assert!((m.avg_waiting_time - 3.33).abs() < 1e-10);
        assert!((m.avg_turnaround_time - 6.33).abs() < 1e-10);
        assert!((m.throughput - 0.33).abs() < 1e-10);
        assert!((m.cpu_efficiency - 100.0).abs() < 1e-10);
    }
}
