//! Simulation result model.
//!
//! A result is created fresh by one simulator run and is immutable
//! afterwards: the full timeline, one outcome per process (in id order) and
//! the aggregate metrics derived from those outcomes.

use serde::{Deserialize, Serialize};

use super::{ProcessId, Ticks, TimelineEvent};
use crate::scheduler::{Discipline, Metrics};

/// Final timing of one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOutcome {
    /// 1-based process identifier.
    pub id: ProcessId,
    /// Arrival tick.
    pub arrival_time: Ticks,
    /// Total CPU demand.
    pub burst_time: Ticks,
    /// Tick at which the last unit of service finished.
    pub completion_time: Ticks,
    /// Ticks spent eligible but not running.
    pub waiting_time: Ticks,
    /// Ticks from arrival to completion.
    pub turnaround_time: Ticks,
}

/// Everything one simulation run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Discipline that produced this result.
    pub discipline: Discipline,
    /// One event per tick, starting at tick 0.
    pub timeline: Vec<TimelineEvent>,
    /// Per-process outcomes, ordered by id.
    pub outcomes: Vec<ProcessOutcome>,
    /// Aggregate metrics over `outcomes`.
    pub metrics: Metrics,
}

impl SimulationResult {
    /// Bundles a finished run and derives its metrics.
    pub fn new(
        discipline: Discipline,
        timeline: Vec<TimelineEvent>,
        outcomes: Vec<ProcessOutcome>,
    ) -> Self {
        let metrics = Metrics::calculate(&outcomes);
        Self {
            discipline,
            timeline,
            outcomes,
            metrics,
        }
    }

    /// Outcome for a process id.
    pub fn outcome(&self, id: ProcessId) -> Option<&ProcessOutcome> {
        id.checked_sub(1).and_then(|i| self.outcomes.get(i))
    }

    /// Number of simulated ticks, idle ones included.
    pub fn total_ticks(&self) -> Ticks {
        self.timeline.len() as Ticks
    }

    /// Number of idle ticks.
    pub fn idle_ticks(&self) -> usize {
        self.timeline.iter().filter(|e| e.is_idle()).count()
    }

    /// Ticks during which `id` held the CPU.
    pub fn ticks_for(&self, id: ProcessId) -> Vec<Ticks> {
        self.timeline
            .iter()
            .filter(|e| e.process() == Some(id))
            .map(|e| e.tick())
            .collect()
    }

    /// Process ids in the order they finished.
    pub fn completion_order(&self) -> Vec<ProcessId> {
        let mut order: Vec<&ProcessOutcome> = self.outcomes.iter().collect();
        order.sort_by_key(|o| (o.completion_time, o.id));
        order.into_iter().map(|o| o.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(id: ProcessId, arrival: Ticks, burst: Ticks, completion: Ticks) -> ProcessOutcome {
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
    fn test_result_accessors() {
        let timeline = vec![
            TimelineEvent::Run { process: 2, tick: 0 },
            TimelineEvent::Idle { sequence: 1, tick: 1 },
            TimelineEvent::Run { process: 1, tick: 2 },
        ];
        let result = SimulationResult::new(
            Discipline::Srtf,
            timeline,
            vec![outcome(1, 0, 1, 3), outcome(2, 0, 1, 1)],
        );

        assert_eq!(result.total_ticks(), 3);
        assert_eq!(result.idle_ticks(), 1);
        assert_eq!(result.ticks_for(1), vec![2]);
        assert_eq!(result.outcome(2).map(|o| o.completion_time), Some(1));
        assert!(result.outcome(0).is_none());
        assert!(result.outcome(3).is_none());
        assert_eq!(result.completion_order(), vec![2, 1]);
    }
}
