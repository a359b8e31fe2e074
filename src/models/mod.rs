//! CPU scheduling domain models.
//!
//! Provides the data types shared by every discipline: the process being
//! scheduled, the per-tick timeline, and the result bundle of one run.
//!
//! # Time Representation
//! Time is discrete. One tick is the smallest unit of CPU service; tick `t`
//! covers the half-open interval `[t, t + 1)`. The clock starts at 0.
//!
//! | Type | Role |
//! |------|------|
//! | `ProcessSpec` | Caller input (arrival, burst) |
//! | `Process` | Input plus mutable simulation state |
//! | `Timeline` | Append-only per-tick event recorder |
//! | `SimulationResult` | Timeline, per-process outcomes, aggregate metrics |

mod process;
mod result;
mod timeline;

pub use process::{Process, ProcessId, ProcessSpec, Ticks};
pub use result::{ProcessOutcome, SimulationResult};
pub use timeline::{Timeline, TimelineEvent};
