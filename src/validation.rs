//! Input validation for line balancing problems.
//!
//! Checks structural integrity of the task list before balancing.
//! Detects:
//! - Duplicate task names
//! - Precedence entries naming unknown tasks
//! - Circular precedence dependencies (DAG validation)
//! - Negative or non-finite durations
//! - Tasks that cannot fit into any station
//!
//! Every one of these would otherwise leave a task permanently
//! unassignable, so they are rejected up front.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::models::Task;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// Two tasks share the same name.
    DuplicateTaskName,
    /// A task lists a prerequisite that doesn't exist.
    UnknownPrecedence,
    /// Precedence graph contains a cycle.
    CyclicPrecedence,
    /// A duration is negative, NaN, or infinite.
    InvalidDuration,
    /// A single task is longer than the cycle time.
    ExceedsCycleTime,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the task list of a line balancing problem.
///
/// Checks:
/// 1. No duplicate task names
/// 2. All durations are finite and non-negative
/// 3. All precedence entries name existing tasks
/// 4. No circular precedence dependencies
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_tasks(tasks: &[Task]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut names = HashSet::new();
    for task in tasks {
        if !names.insert(task.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateTaskName,
                format!("Duplicate task name: {}", task.name),
            ));
        }

        if !task.duration.is_finite() || task.duration < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDuration,
                format!("Task '{}' has invalid duration {}", task.name, task.duration),
            ));
        }
    }

    for task in tasks {
        for pred in &task.precedence {
            if !names.contains(pred.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownPrecedence,
                    format!(
                        "Task '{}' references unknown predecessor '{}'",
                        task.name, pred
                    ),
                ));
            }
        }
    }

    if let Some(cycle_err) = detect_cycles(tasks) {
        errors.push(cycle_err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Rejects tasks whose duration alone exceeds the cycle time.
///
/// Such a task does not fit even an empty station.
pub fn validate_against_cycle_time(tasks: &[Task], cycle_time: f64) -> ValidationResult {
    let errors: Vec<ValidationError> = tasks
        .iter()
        .filter(|t| t.duration > cycle_time)
        .map(|t| {
            ValidationError::new(
                ValidationErrorKind::ExceedsCycleTime,
                format!(
                    "Task '{}' takes {} which exceeds the cycle time {}",
                    t.name, t.duration, cycle_time
                ),
            )
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Detects cycles in the precedence graph using DFS.
///
/// Roots are visited in input order so the reported task is stable
/// across runs.
///
/// # Algorithm
/// Topological sort via DFS. If a back-edge is found (visiting a node
/// currently in the recursion stack), a cycle exists.
///
/// # Reference
/// Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4
fn detect_cycles(tasks: &[Task]) -> Option<ValidationError> {
    // prerequisite → dependents
    let mut adj: HashMap<&str, Vec<&str>> = HashMap::new();
    for task in tasks {
        for pred in &task.precedence {
            adj.entry(pred.as_str()).or_default().push(task.name.as_str());
        }
    }

    let mut visited = HashSet::new();
    let mut in_stack = HashSet::new();

    for task in tasks {
        let node = task.name.as_str();
        if !visited.contains(node) && has_cycle_dfs(node, &adj, &mut visited, &mut in_stack) {
            return Some(ValidationError::new(
                ValidationErrorKind::CyclicPrecedence,
                format!("Circular precedence detected involving task '{node}'"),
            ));
        }
    }

    None
}

fn has_cycle_dfs<'a>(
    node: &'a str,
    adj: &HashMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
    in_stack: &mut HashSet<&'a str>,
) -> bool {
    visited.insert(node);
    in_stack.insert(node);

    if let Some(neighbors) = adj.get(node) {
        for &next in neighbors {
            if in_stack.contains(next) {
                return true; // Back edge → cycle
            }
            if !visited.contains(next) && has_cycle_dfs(next, adj, visited, in_stack) {
                return true;
            }
        }
    }

    in_stack.remove(node);
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task::new("A", 5.0),
            Task::new("B", 3.0),
            Task::new("C", 2.0).with_predecessor("A"),
            Task::new("D", 4.0).with_precedence(["B", "C"]),
        ]
    }

    fn has_kind(errors: &[ValidationError], kind: ValidationErrorKind) -> bool {
        errors.iter().any(|e| e.kind == kind)
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_tasks(&sample_tasks()).is_ok());
    }

    #[test]
    fn test_empty_input() {
        assert!(validate_tasks(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_task_name() {
        let tasks = vec![Task::new("A", 1.0), Task::new("A", 2.0)];
        let errors = validate_tasks(&tasks).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::DuplicateTaskName));
        assert_eq!(errors[0].message, "Duplicate task name: A");
    }

    #[test]
    fn test_unknown_precedence() {
        let tasks = vec![Task::new("A", 1.0).with_predecessor("NONEXISTENT")];
        let errors = validate_tasks(&tasks).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::UnknownPrecedence));
        assert!(errors[0].message.contains("NONEXISTENT"));
    }

    #[test]
    fn test_invalid_duration() {
        let tasks = vec![
            Task::new("neg", -1.0),
            Task::new("nan", f64::NAN),
            Task::new("inf", f64::INFINITY),
            Task::new("zero", 0.0),
        ];
        let errors = validate_tasks(&tasks).unwrap_err();
        let count = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::InvalidDuration)
            .count();
        assert_eq!(count, 3);
    }

    #[test]
    fn test_cyclic_precedence() {
        // A → B → C → A
        let tasks = vec![
            Task::new("A", 1.0).with_predecessor("C"),
            Task::new("B", 1.0).with_predecessor("A"),
            Task::new("C", 1.0).with_predecessor("B"),
        ];
        let errors = validate_tasks(&tasks).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::CyclicPrecedence));
    }

    #[test]
    fn test_self_precedence_is_cycle() {
        let tasks = vec![Task::new("A", 1.0).with_predecessor("A")];
        let errors = validate_tasks(&tasks).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::CyclicPrecedence));
    }

    #[test]
    fn test_no_cycle_in_diamond() {
        // A → B, A → C, B → D, C → D
        let tasks = vec![
            Task::new("A", 1.0),
            Task::new("B", 1.0).with_predecessor("A"),
            Task::new("C", 1.0).with_predecessor("A"),
            Task::new("D", 1.0).with_precedence(["B", "C"]),
        ];
        assert!(validate_tasks(&tasks).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let tasks = vec![
            Task::new("A", 1.0),
            Task::new("A", 1.0),
            Task::new("B", -2.0).with_predecessor("Z"),
        ];
        let errors = validate_tasks(&tasks).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_exceeds_cycle_time() {
        let tasks = vec![Task::new("A", 5.0), Task::new("B", 9.0)];
        assert!(validate_against_cycle_time(&tasks, 9.0).is_ok());

        let errors = validate_against_cycle_time(&tasks, 8.0).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::ExceedsCycleTime);
        assert!(errors[0].message.contains("'B'"));
    }

    #[test]
    fn test_error_display_is_message() {
        let tasks = vec![Task::new("A", 1.0).with_predecessor("Q")];
        let errors = validate_tasks(&tasks).unwrap_err();
        assert_eq!(errors[0].to_string(), errors[0].message);
    }
}
