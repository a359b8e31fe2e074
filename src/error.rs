//! Error types for simulation entry points.

use crate::models::ProcessId;
use crate::validation::ValidationError;

/// Input-contract violations that stop a simulation before it starts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    /// The process list is empty.
    #[error("no processes to schedule")]
    NoProcesses,

    /// A process requires no CPU time and could never complete.
    #[error("process P{id} has a zero burst time")]
    ZeroBurst {
        /// Offending process.
        id: ProcessId,
    },

    /// Round Robin was configured with a zero time quantum.
    #[error("time quantum must be positive")]
    ZeroQuantum,

    /// Raw input failed validation.
    #[error("invalid input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),

    /// A simulation request could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}
