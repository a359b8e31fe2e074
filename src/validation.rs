//! Input validation for simulation requests.
//!
//! The simulators assume well-formed input. These checks are applied by
//! callers that take raw user input (form fields, CLI flags, config files)
//! before anything reaches a simulator. Detects:
//! - Too many processes, or none
//! - Arrival/burst lists that disagree with the declared count
//! - Zero burst times
//! - A zero Round Robin quantum
//! - Unparsable time lists

use crate::models::{ProcessSpec, Ticks};

/// Largest process set accepted from user input.
pub const MAX_PROCESSES: usize = 7;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were declared.
    EmptyInput,
    /// More than `MAX_PROCESSES` processes.
    TooManyProcesses,
    /// A time list's length differs from the declared process count.
    CountMismatch,
    /// A process has a zero burst time.
    ZeroBurst,
    /// Round Robin quantum is zero.
    ZeroQuantum,
    /// A time list contains something other than non-negative integers.
    Unparsable,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Parses a whitespace-separated list of tick values.
///
/// `field` names the list in the error message.
pub fn parse_times(field: &str, raw: &str) -> Result<Vec<Ticks>, ValidationError> {
    raw.split_whitespace()
        .map(|token| {
            token.parse::<Ticks>().map_err(|_| {
                ValidationError::new(
                    ValidationErrorKind::Unparsable,
                    format!("{field}: '{token}' is not a non-negative integer"),
                )
            })
        })
        .collect()
}

/// Validates raw per-field input.
///
/// Checks:
/// 1. `1 <= count <= MAX_PROCESSES`
/// 2. `arrivals.len() == count` and `bursts.len() == count`
/// 3. Every burst is positive
/// 4. `quantum`, when given, is positive
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    count: usize,
    arrivals: &[Ticks],
    bursts: &[Ticks],
    quantum: Option<Ticks>,
) -> ValidationResult {
    let mut errors = Vec::new();

    if count == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "at least one process is required",
        ));
    } else if count > MAX_PROCESSES {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooManyProcesses,
            format!("{count} processes requested, at most {MAX_PROCESSES} allowed"),
        ));
    }

    for (field, len) in [("arrival times", arrivals.len()), ("burst times", bursts.len())] {
        if len != count {
            errors.push(ValidationError::new(
                ValidationErrorKind::CountMismatch,
                format!("expected {count} {field}, got {len}"),
            ));
        }
    }

    check_bursts(bursts, &mut errors);
    check_quantum(quantum, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates an already-assembled process list (e.g. from a config file).
pub fn validate_specs(specs: &[ProcessSpec], quantum: Option<Ticks>) -> ValidationResult {
    let arrivals: Vec<Ticks> = specs.iter().map(|s| s.arrival_time).collect();
    let bursts: Vec<Ticks> = specs.iter().map(|s| s.burst_time).collect();
    validate_input(specs.len(), &arrivals, &bursts, quantum)
}

fn check_bursts(bursts: &[Ticks], errors: &mut Vec<ValidationError>) {
    for (i, &burst) in bursts.iter().enumerate() {
        if burst != 0 {
            continue;
        }
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroBurst,
            format!("process P{} has a zero burst time", i + 1),
        ));
    }
}

fn check_quantum(quantum: Option<Ticks>, errors: &mut Vec<ValidationError>) {
    if quantum == Some(0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroQuantum,
            "time quantum must be positive",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        assert!(validate_input(3, &[0, 1, 2], &[5, 3, 1], Some(2)).is_ok());
        assert!(validate_input(1, &[0], &[5], None).is_ok());
    }

    #[test]
    fn test_too_many_processes() {
        let arrivals = vec![0; 8];
        let bursts = vec![1; 8];
        let errors = validate_input(8, &arrivals, &bursts, None).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::TooManyProcesses));
    }

    #[test]
    fn test_empty_input() {
        let errors = validate_input(0, &[], &[], None).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyInput);
    }

    #[test]
    fn test_count_mismatch() {
        let errors = validate_input(3, &[0, 1], &[5, 3, 1], None).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::CountMismatch);
        assert!(errors[0].message.contains("arrival"));
    }

    #[test]
    fn test_zero_burst_and_quantum() {
        let errors = validate_input(2, &[0, 1], &[0, 3], Some(0)).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroBurst && e.message.contains("P1")));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroQuantum));
    }

    #[test]
    fn test_multiple_errors() {
        let errors = validate_input(9, &[0], &[0], Some(0)).unwrap_err();
        assert!(errors.len() >= 4);
    }

    #[test]
    fn test_validate_specs() {
        let specs = ProcessSpec::from_lists(&[0, 2], &[3, 0]);
        let errors = validate_specs(&specs, None).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::ZeroBurst);
    }

    #[test]
    fn test_parse_times() {
        assert_eq!(parse_times("bursts", "5 3  1").unwrap(), vec![5, 3, 1]);
        assert!(parse_times("bursts", "").unwrap().is_empty());

        let err = parse_times("arrivals", "0 x 2").unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::Unparsable);
        assert!(err.message.contains("'x'"));
        assert!(parse_times("arrivals", "-1").is_err());
    }
}
