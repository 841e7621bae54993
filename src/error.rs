//! Crate error type.
//!
//! Both solvers validate their input up front and surface every detected
//! problem at once. There are no transient failures: a rejected input is
//! rejected deterministically.

use thiserror::Error;

use crate::validation::{ValidationError, ValidationErrorKind};

/// Result alias used by the solver entry points.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the max-flow solver and the completion scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed capacity matrix, edge, labels, or terminal indices.
    #[error("invalid graph: {}", join(.0))]
    InvalidGraph(Vec<ValidationError>),
    /// Malformed job list.
    #[error("invalid input: {}", join(.0))]
    InvalidInput(Vec<ValidationError>),
}

impl Error {
    /// The individual validation errors behind this error.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Error::InvalidGraph(errors) | Error::InvalidInput(errors) => errors,
        }
    }

    /// Whether any underlying validation error has the given kind.
    pub fn has_kind(&self, kind: ValidationErrorKind) -> bool {
        self.errors().iter().any(|e| e.kind == kind)
    }
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_messages() {
        let err = Error::InvalidGraph(vec![
            ValidationError::new(ValidationErrorKind::SelfLoop, "a"),
            ValidationError::new(ValidationErrorKind::NegativeCapacity, "b"),
        ]);
        assert_eq!(err.to_string(), "invalid graph: a; b");
        assert!(err.has_kind(ValidationErrorKind::SelfLoop));
        assert!(!err.has_kind(ValidationErrorKind::CapacityOverflow));
    }

    #[test]
    fn test_invalid_input_errors() {
        let err = Error::InvalidInput(vec![ValidationError::new(
            ValidationErrorKind::NegativeDuration,
            "Job 1 has negative stage 1 duration -2",
        )]);
        assert_eq!(err.errors().len(), 1);
        assert!(err.to_string().starts_with("invalid input: Job 1"));
    }
}
