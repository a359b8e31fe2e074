//! Tick-level CPU scheduling simulator.
//!
//! Simulates a single CPU under two preemptive disciplines, Round Robin and
//! Shortest Remaining Time First, and reports which process held the CPU at
//! every tick along with per-process and aggregate timing metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessSpec`, `Process`, `Timeline`,
//!   `TimelineEvent`, `ProcessOutcome`, `SimulationResult`
//! - **`scheduler`**: `run_round_robin`, `run_srtf`, `simulate`, `Metrics`
//! - **`validation`**: User-input checks (process bound, list lengths, zero times)
//! - **`config`**: `SimulationRequest`, loadable from JSON
//! - **`report`**: Plain-text Gantt line, details table and metrics
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use u_cpu_schedule::models::ProcessSpec;
//! use u_cpu_schedule::scheduler::{simulate, Discipline};
//!
//! let specs = ProcessSpec::from_lists(&[0, 1, 2], &[5, 3, 1]);
//! let result = simulate(Discipline::round_robin(2), &specs).unwrap();
//! assert_eq!(result.total_ticks(), 9);
//! assert_eq!(result.completion_order(), vec![3, 2, 1]);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
mod error;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use config::SimulationRequest;
pub use error::SimulationError;
pub use models::{ProcessSpec, SimulationResult};
pub use scheduler::{run_round_robin, run_srtf, simulate, Discipline, Metrics};
