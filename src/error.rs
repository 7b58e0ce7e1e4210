//! Errors surfaced by cycle time computation and balancing.

use thiserror::Error;

use crate::validation::{ValidationError, ValidationErrorKind};

/// Errors that can occur before or during balancing.
///
/// All of them are raised before any station is returned; a failed call
/// never yields a partial line.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BalanceError {
    #[error("Production goal must be positive and finite, got {0}")]
    InvalidGoal(f64),
    #[error("Total available time must be non-negative and finite, got {0}")]
    InvalidAvailableTime(f64),
    #[error("Cycle time must be positive and finite, got {0}")]
    InvalidCycleTime(f64),
    #[error("Invalid task list: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),
    #[error("Tasks can never be assigned: {}", .0.join(", "))]
    Unassignable(Vec<String>),
}

impl BalanceError {
    /// Whether this is a validation failure containing the given kind.
    pub fn has_kind(&self, kind: ValidationErrorKind) -> bool {
        match self {
            BalanceError::Validation(errors) => errors.iter().any(|e| e.kind == kind),
            _ => false,
        }
    }
}

impl From<Vec<ValidationError>> for BalanceError {
    fn from(errors: Vec<ValidationError>) -> Self {
        BalanceError::Validation(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
