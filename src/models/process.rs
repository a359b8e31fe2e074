//! Process model.
//!
//! A process is described by when it becomes eligible to run (arrival) and
//! how much CPU service it needs in total (burst). During a simulation it
//! also carries its remaining demand and, once finished, its completion tick.

use serde::{Deserialize, Serialize};

/// Simulated time, in ticks.
pub type Ticks = u64;

/// 1-based process identifier: the position of the process in the input list.
pub type ProcessId = usize;

/// Caller-supplied description of one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: Ticks,
    /// Total CPU service required. Must be positive.
    pub burst_time: Ticks,
}

impl ProcessSpec {
    /// Creates a process description.
    pub fn new(arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self {
            arrival_time,
            burst_time,
        }
    }

    /// Zips parallel arrival and burst lists into specs.
    ///
    /// Extra elements of the longer list are ignored; length agreement is
    /// checked by [`crate::validation::validate_input`].
    pub fn from_lists(arrivals: &[Ticks], bursts: &[Ticks]) -> Vec<Self> {
        arrivals
            .iter()
            .zip(bursts)
            .map(|(&a, &b)| Self::new(a, b))
            .collect()
    }
}

/// A process under simulation.
///
/// Invariant: `0 <= remaining_time <= burst_time`, and `completion_time`
/// is set exactly once, at the tick `remaining_time` first reaches 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    /// Stable 1-based identifier.
    pub id: ProcessId,
    /// Arrival tick.
    pub arrival_time: Ticks,
    /// Total CPU demand.
    pub burst_time: Ticks,
    remaining_time: Ticks,
    completion_time: Option<Ticks>,
}

impl Process {
    /// Creates a process with full remaining demand and no completion.
    pub fn new(id: ProcessId, spec: ProcessSpec) -> Self {
        Self {
            id,
            arrival_time: spec.arrival_time,
            burst_time: spec.burst_time,
            remaining_time: spec.burst_time,
            completion_time: None,
        }
    }

    /// Builds the process table for a run, numbering processes from 1.
    pub fn from_specs(specs: &[ProcessSpec]) -> Vec<Self> {
        specs
            .iter()
            .enumerate()
            .map(|(i, &spec)| Self::new(i + 1, spec))
            .collect()
    }

    /// CPU service still owed.
    #[inline]
    pub fn remaining_time(&self) -> Ticks {
        self.remaining_time
    }

    /// Tick at which the process finished, if it has.
    #[inline]
    pub fn completion_time(&self) -> Option<Ticks> {
        self.completion_time
    }

    /// Whether the process has received its full burst.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining_time == 0
    }

    /// Whether the process may be scheduled at tick `now`.
    #[inline]
    pub fn is_ready_at(&self, now: Ticks) -> bool {
        self.arrival_time <= now && !self.is_complete()
    }

    /// Consumes one tick of service.
    ///
    /// Returns `true` if this tick finished the process.
    pub(crate) fn run_tick(&mut self) -> bool {
        debug_assert!(self.remaining_time > 0, "process {} already complete", self.id);
        self.remaining_time -= 1;
        self.remaining_time == 0
    }

    /// Records the completion tick. Only the first call has any effect.
    pub(crate) fn mark_complete(&mut self, at: Ticks) {
        debug_assert!(self.is_complete());
        if self.completion_time.is_none() {
            self.completion_time = Some(at);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_initial_state() {
        let p = Process::new(1, ProcessSpec::new(2, 5));
        assert_eq!(p.id, 1);
        assert_eq!(p.remaining_time(), 5);
        assert_eq!(p.completion_time(), None);
        assert!(!p.is_complete());
    }

    #[test]
    fn test_from_specs_numbers_from_one() {
        let specs = ProcessSpec::from_lists(&[0, 1, 2], &[5, 3, 1]);
        let table = Process::from_specs(&specs);
        let ids: Vec<_> = table.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(table[2].burst_time, 1);
    }

    #[test]
    fn test_ready_at() {
        let p = Process::new(1, ProcessSpec::new(3, 1));
        assert!(!p.is_ready_at(2));
        assert!(p.is_ready_at(3));
        assert!(p.is_ready_at(10));
    }

    #[test]
    fn test_run_to_completion() {
        let mut p = Process::new(1, ProcessSpec::new(0, 2));
        assert!(!p.run_tick());
        assert!(p.run_tick());
        assert!(p.is_complete());
        assert!(!p.is_ready_at(5));

        p.mark_complete(2);
        p.mark_complete(7);
        assert_eq!(p.completion_time(), Some(2));
    }
}
