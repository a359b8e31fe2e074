//! Timeline recorder.
//!
//! Accumulates exactly one event per simulated tick, in tick order. The
//! recorder owns the clock: recording an event is the only way to advance
//! it, so a tick can never be skipped or revisited.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ProcessId, Ticks};

/// What occupied the CPU during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimelineEvent {
    /// `process` ran during `[tick, tick + 1)`.
    Run {
        /// Process that held the CPU.
        process: ProcessId,
        /// Tick index.
        tick: Ticks,
    },
    /// No process was eligible during `[tick, tick + 1)`.
    Idle {
        /// 1-based counter of idle ticks within the run.
        sequence: usize,
        /// Tick index.
        tick: Ticks,
    },
}

impl TimelineEvent {
    /// Tick this event covers.
    pub fn tick(&self) -> Ticks {
        match *self {
            Self::Run { tick, .. } | Self::Idle { tick, .. } => tick,
        }
    }

    /// The running process, or `None` for an idle tick.
    pub fn process(&self) -> Option<ProcessId> {
        match *self {
            Self::Run { process, .. } => Some(process),
            Self::Idle { .. } => None,
        }
    }

    /// Whether the CPU was idle.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle { .. })
    }
}

impl fmt::Display for TimelineEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Run { process, tick } => write!(f, "P{process} ({tick}ms)"),
            Self::Idle { sequence, tick } => write!(f, "IDLE{sequence} ({tick}ms)"),
        }
    }
}

/// Append-only per-tick event log with its own clock.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    events: Vec<TimelineEvent>,
    idle_count: usize,
}

impl Timeline {
    /// Creates an empty timeline at tick 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current tick: the next tick to be recorded.
    #[inline]
    pub fn now(&self) -> Ticks {
        self.events.len() as Ticks
    }

    /// Records `process` running at the current tick and advances the clock.
    pub fn record_run(&mut self, process: ProcessId) {
        let tick = self.now();
        self.events.push(TimelineEvent::Run { process, tick });
    }

    /// Records an idle tick and advances the clock.
    pub fn record_idle(&mut self) {
        let tick = self.now();
        self.idle_count += 1;
        self.events.push(TimelineEvent::Idle {
            sequence: self.idle_count,
            tick,
        });
    }

    /// Number of idle ticks recorded so far.
    pub fn idle_count(&self) -> usize {
        self.idle_count
    }

    /// Recorded events, in tick order.
    pub fn events(&self) -> &[TimelineEvent] {
        &self.events
    }

    /// Finishes recording.
    pub fn into_events(self) -> Vec<TimelineEvent> {
        self.events
    }
}
