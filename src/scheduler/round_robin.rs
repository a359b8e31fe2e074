//! Round Robin simulator.
//!
//! # Algorithm
//!
//! 1. Admit every arrived, unfinished, not-yet-queued process in id order.
//! 2. If the queue is empty, record an idle tick and retry.
//! 3. Dequeue the head and run it for `min(quantum, remaining)` ticks.
//! 4. Admit processes that arrived during the slice, then requeue the
//!    just-run process behind them if it still has work left.
//!
//! Step 4 ordering puts new arrivals ahead of the preempted process.
//!
//! # Complexity
//! O(T * n) where T = total ticks, n = processes.

use std::collections::VecDeque;

use tracing::{debug, info, instrument};

use super::{check_workload, finished_outcome, Discipline};
use crate::error::SimulationError;
use crate::models::{Process, ProcessSpec, SimulationResult, Ticks, Timeline};

/// FIFO of process-table indices that never holds the same index twice.
#[derive(Debug)]
struct ReadyQueue {
    order: VecDeque<usize>,
    queued: Vec<bool>,
}

impl ReadyQueue {
    fn new(len: usize) -> Self {
        Self {
            order: VecDeque::with_capacity(len),
            queued: vec![false; len],
        }
    }

    fn push(&mut self, index: usize) {
        if !self.queued[index] {
            self.queued[index] = true;
            self.order.push_back(index);
        }
    }

    fn pop(&mut self) -> Option<usize> {
        let index = self.order.pop_front()?;
        self.queued[index] = false;
        Some(index)
    }

    /// Queues every process ready at `now`, in id order, except `skip`.
    fn admit(&mut self, processes: &[Process], now: Ticks, skip: Option<usize>) {
        for (i, p) in processes.iter().enumerate() {
            if Some(i) != skip && p.is_ready_at(now) {
                self.push(i);
            }
        }
    }
}

/// Simulates preemptive Round Robin with the given time quantum.
///
/// # Errors
/// `ZeroQuantum` if `quantum == 0`; `NoProcesses` or `ZeroBurst` if the
/// workload could not terminate.
///
/// # Example
/// ```
/// use u_cpu_schedule::models::ProcessSpec;
/// use u_cpu_schedule::scheduler::run_round_robin;
///
/// let specs = ProcessSpec::from_lists(&[0, 1, 2], &[5, 3, 1]);
/// let result = run_round_robin(&specs, 2).unwrap();
/// assert_eq!(result.metrics.makespan, 9);
/// ```
#[instrument(skip_all, fields(processes = specs.len(), quantum = quantum))]
pub fn run_round_robin(
    specs: &[ProcessSpec],
    quantum: Ticks,
) -> Result<SimulationResult, SimulationError> {
    if quantum == 0 {
        return Err(SimulationError::ZeroQuantum);
    }
    check_workload(specs)?;

    let mut processes = Process::from_specs(specs);
    let mut timeline = Timeline::new();
    let mut queue = ReadyQueue::new(processes.len());
    let mut outcomes = Vec::with_capacity(processes.len());

    while outcomes.len() < processes.len() {
        queue.admit(&processes, timeline.now(), None);

        let Some(current) = queue.pop() else {
            debug!(tick = timeline.now(), "cpu idle");
            timeline.record_idle();
            continue;
        };

        let process = &mut processes[current];
        let slice = quantum.min(process.remaining_time());
        debug!(tick = timeline.now(), process = process.id, slice, "dispatch");

        for _ in 0..slice {
            process.run_tick();
            timeline.record_run(process.id);
        }

        if process.is_complete() {
            let completion = timeline.now();
            process.mark_complete(completion);
            let waiting = completion - process.burst_time - process.arrival_time;
            debug!(process = process.id, completion, waiting, "completed");
            outcomes.push(finished_outcome(process, completion, waiting));
        }

        queue.admit(&processes, timeline.now(), Some(current));
        if !processes[current].is_complete() {
            queue.push(current);
        }
    }

    outcomes.sort_by_key(|o| o.id);
    let result = SimulationResult::new(
        Discipline::round_robin(quantum),
        timeline.into_events(),
        outcomes,
    );
    info!(
        makespan = result.metrics.makespan,
        avg_waiting = result.metrics.avg_waiting_time,
        avg_turnaround = result.metrics.avg_turnaround_time,
        "round robin finished"
    );
    Ok(result)
}
