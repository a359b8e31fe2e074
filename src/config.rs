//! Simulation requests.
//!
//! A request bundles everything one run needs: the discipline and the
//! process list. It replaces any ambient state the caller might hold, and
//! can be loaded from JSON:
//!
//! ```json
//! {
//!   "discipline": { "round_robin": { "quantum": 2 } },
//!   "processes": [
//!     { "arrival_time": 0, "burst_time": 5 },
//!     { "arrival_time": 1, "burst_time": 3 }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::SimulationError;
use crate::models::{ProcessSpec, SimulationResult};
use crate::scheduler::{simulate, Discipline};
use crate::validation::validate_specs;

/// Input container for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Discipline to simulate.
    pub discipline: Discipline,
    /// Processes, numbered from 1 in list order.
    pub processes: Vec<ProcessSpec>,
}

impl SimulationRequest {
    /// Creates a request.
    pub fn new(discipline: Discipline, processes: Vec<ProcessSpec>) -> Self {
        Self {
            discipline,
            processes,
        }
    }

    /// Parses a request from JSON text.
    pub fn from_json(json: &str) -> Result<Self, SimulationError> {
        serde_json::from_str(json).map_err(|e| SimulationError::Config(e.to_string()))
    }

    /// Reads and parses a JSON request file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SimulationError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| SimulationError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json(&text)
    }

    /// Applies the user-input checks (process bound, positive times).
    pub fn validate(&self) -> Result<(), SimulationError> {
        validate_specs(&self.processes, self.discipline.quantum())?;
        Ok(())
    }

    /// Validates and runs the request.
    pub fn run(&self) -> Result<SimulationResult, SimulationError> {
        self.validate()?;
        simulate(self.discipline, &self.processes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    const RR_REQUEST: &str = r#"{
        "discipline": { "round_robin": { "quantum": 2 } },
        "processes": [
            { "arrival_time": 0, "burst_time": 5 },
            { "arrival_time": 1, "burst_time": 3 },
            { "arrival_time": 2, "burst_time": 1 }
        ]
    }"#;

    #[test]
    fn test_parse_and_run() {
        let request = SimulationRequest::from_json(RR_REQUEST).unwrap();
        assert_eq!(request.discipline, Discipline::round_robin(2));
        assert_eq!(request.processes.len(), 3);

        let result = request.run().unwrap();
        assert_eq!(result.metrics.makespan, 9);
        assert_eq!(result.discipline, request.discipline);
    }

    #[test]
    fn test_serde_roundtrip() {
        let request = SimulationRequest::new(
            Discipline::Srtf,
            ProcessSpec::from_lists(&[0, 0], &[4, 2]),
        );
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(SimulationRequest::from_json(&json).unwrap(), request);
    }

    #[test]
    fn test_malformed_json() {
        let err = SimulationRequest::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SimulationError::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = SimulationRequest::from_path("/nonexistent/request.json").unwrap_err();
        assert!(matches!(err, SimulationError::Config(msg) if msg.contains("request.json")));
    }

    #[test]
    fn test_run_rejects_oversized_request() {
        let request = SimulationRequest::new(Discipline::Srtf, vec![ProcessSpec::new(0, 1); 8]);
        match request.run() {
            Err(SimulationError::InvalidInput(errors)) => {
                assert_eq!(errors[0].kind, ValidationErrorKind::TooManyProcesses);
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }
}
