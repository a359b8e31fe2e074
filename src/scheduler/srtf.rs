//! Shortest Remaining Time First simulator.
//!
//! # Algorithm
//!
//! Each tick, scan processes in id order and pick the first eligible one
//! whose remaining time is strictly below the current threshold, lowering
//! the threshold as candidates are found. The threshold carries over from
//! the previous tick (set to the running process's remaining time), so the
//! running process keeps the CPU unless a strictly shorter one appears, and
//! equal remaining times resolve to the lower id. When the running process
//! completes the threshold resets and the next tick does a fresh scan.
//!
//! # Complexity
//! O(T * n) where T = total ticks, n = processes.

use tracing::{debug, info, instrument};

use super::{check_workload, finished_outcome, Discipline};
use crate::error::SimulationError;
use crate::models::{Process, ProcessSpec, SimulationResult, Ticks, Timeline};

/// Selection state carried across ticks.
#[derive(Debug, Clone, Copy)]
struct Selection {
    /// Process-table index of the favored process.
    current: Option<usize>,
    /// Remaining time a challenger must strictly beat.
    threshold: Ticks,
}

impl Selection {
    const fn fresh() -> Self {
        Self {
            current: None,
            threshold: Ticks::MAX,
        }
    }

    /// Scans for a strictly shorter eligible process; keeps the current one otherwise.
    fn rescan(&mut self, processes: &[Process], now: Ticks) {
        for (i, p) in processes.iter().enumerate() {
            if p.is_ready_at(now) && p.remaining_time() < self.threshold {
                self.threshold = p.remaining_time();
                self.current = Some(i);
            }
        }
    }
}

/// Simulates preemptive Shortest Remaining Time First.
///
/// # Errors
/// `NoProcesses` or `ZeroBurst` if the workload could not terminate.
///
/// # Example
/// ```
/// use u_cpu_schedule::models::ProcessSpec;
/// use u_cpu_schedule::scheduler::run_srtf;
///
/// let specs = ProcessSpec::from_lists(&[0, 0], &[4, 2]);
/// let result = run_srtf(&specs).unwrap();
/// assert_eq!(result.outcome(2).unwrap().completion_time, 2);
/// ```
#[instrument(skip_all, fields(processes = specs.len()))]
pub fn run_srtf(specs: &[ProcessSpec]) -> Result<SimulationResult, SimulationError> {
    check_workload(specs)?;

    let mut processes = Process::from_specs(specs);
    let mut timeline = Timeline::new();
    let mut selection = Selection::fresh();
    let mut outcomes = Vec::with_capacity(processes.len());

    while outcomes.len() < processes.len() {
        let previous = selection.current;
        selection.rescan(&processes, timeline.now());

        let Some(current) = selection.current else {
            debug!(tick = timeline.now(), "cpu idle");
            timeline.record_idle();
            continue;
        };

        if let Some(prev) = previous.filter(|&prev| prev != current) {
            debug!(
                tick = timeline.now(),
                preempted = processes[prev].id,
                by = processes[current].id,
                "preemption"
            );
        }

        let process = &mut processes[current];
        let finished = process.run_tick();
        timeline.record_run(process.id);
        selection.threshold = process.remaining_time();

        if finished {
            selection = Selection::fresh();
            let completion = timeline.now();
            process.mark_complete(completion);
            let waiting = completion.saturating_sub(process.burst_time + process.arrival_time);
            debug!(process = process.id, completion, waiting, "completed");
            outcomes.push(finished_outcome(process, completion, waiting));
        }
    }

    outcomes.sort_by_key(|o| o.id);
    let result = SimulationResult::new(Discipline::Srtf, timeline.into_events(), outcomes);
    info!(
        makespan = result.metrics.makespan,
        avg_waiting = result.metrics.avg_waiting_time,
        avg_turnaround = result.metrics.avg_turnaround_time,
        "srtf finished"
    );
    Ok(result)
}
