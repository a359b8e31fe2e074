//! CPU scheduling simulators and run metrics.
//!
//! Two preemptive disciplines over a single CPU, simulated one tick at a
//! time:
//!
//! - **Round Robin**: FIFO ready queue, fixed time quantum. Processes that
//!   arrive during a slice are queued ahead of the preempted process.
//! - **SRTF** (Shortest Remaining Time First): each tick runs the eligible
//!   process with the least remaining demand; ties go to the lower id and
//!   the running process is only displaced by a strictly shorter one.
//!
//! Each run owns its process table and timeline, so independent runs share
//! no state and may execute in parallel.
//!
//! # KPI
//!
//! `Metrics` derives average waiting and turnaround time, throughput and
//! CPU efficiency from the per-process outcomes of a run.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod kpi;
mod round_robin;
mod srtf;

pub use kpi::Metrics;
pub use round_robin::run_round_robin;
pub use srtf::run_srtf;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SimulationError;
use crate::models::{Process, ProcessOutcome, ProcessSpec, SimulationResult, Ticks};

/// Scheduling discipline selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discipline {
    /// Preemptive Round Robin with a fixed time quantum.
    RoundRobin {
        /// Maximum consecutive ticks per turn. Must be positive.
        quantum: Ticks,
    },
    /// Preemptive Shortest Remaining Time First.
    Srtf,
}

impl Discipline {
    /// Creates a Round Robin selector.
    pub fn round_robin(quantum: Ticks) -> Self {
        Self::RoundRobin { quantum }
    }

    /// Short name ("RR", "SRTF").
    pub fn name(&self) -> &'static str {
        match self {
            Self::RoundRobin { .. } => "RR",
            Self::Srtf => "SRTF",
        }
    }

    /// Time quantum for Round Robin, `None` for SRTF.
    pub fn quantum(&self) -> Option<Ticks> {
        match self {
            Self::RoundRobin { quantum } => Some(*quantum),
            Self::Srtf => None,
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundRobin { quantum } => write!(f, "Round Robin (quantum {quantum})"),
            Self::Srtf => write!(f, "Shortest Remaining Time First"),
        }
    }
}

/// Runs the selected discipline to completion.
pub fn simulate(
    discipline: Discipline,
    specs: &[ProcessSpec],
) -> Result<SimulationResult, SimulationError> {
    match discipline {
        Discipline::RoundRobin { quantum } => run_round_robin(specs, quantum),
        Discipline::Srtf => run_srtf(specs),
    }
}

/// Rejects workloads that could never terminate.
fn check_workload(specs: &[ProcessSpec]) -> Result<(), SimulationError> {
    if specs.is_empty() {
        return Err(SimulationError::NoProcesses);
    }
    if let Some(i) = specs.iter().position(|s| s.burst_time == 0) {
        return Err(SimulationError::ZeroBurst { id: i + 1 });
    }
    Ok(())
}

/// Builds the outcome of a finished process from its waiting time.
fn finished_outcome(process: &Process, completion_time: Ticks, waiting_time: Ticks) -> ProcessOutcome {
    ProcessOutcome {
        id: process.id,
        arrival_time: process.arrival_time,
        burst_time: process.burst_time,
        completion_time,
        waiting_time,
        turnaround_time: process.burst_time + waiting_time,
    }
}
