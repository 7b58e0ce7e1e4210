//! Task (work element) model.
//!
//! A task is the smallest unit of work assigned to a station. It has a
//! duration and a set of prerequisite tasks that must be completed first,
//! either earlier in the same station or in a preceding station.
//!
//! # Reference
//! Scholl (1999), "Balancing and Sequencing of Assembly Lines", Ch. 2

use serde::{Deserialize, Serialize};

/// A task (work element) to be assigned to a station.
///
/// The name acts as the primary key: precedence entries refer to other
/// tasks by name.
///
/// # Time Representation
/// Durations share the unit of the cycle time (seconds, minutes, ...).
/// The consumer decides the unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task name.
    pub name: String,
    /// Time required to perform the task.
    #[serde(alias = "time")]
    pub duration: f64,
    /// Names of tasks that must be completed before this one.
    #[serde(default)]
    pub precedence: Vec<String>,
}

impl Task {
    /// Creates a task with no prerequisites.
    pub fn new(name: impl Into<String>, duration: f64) -> Self {
        Self {
            name: name.into(),
            duration,
            precedence: Vec::new(),
        }
    }

    /// Adds a prerequisite task name.
    pub fn with_predecessor(mut self, name: impl Into<String>) -> Self {
        self.precedence.push(name.into());
        self
    }

    /// Replaces the prerequisite list.
    pub fn with_precedence<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.precedence = names.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the task has no prerequisites.
    #[inline]
    pub fn is_initial(&self) -> bool {
        self.precedence.is_empty()
    }

    /// Whether every prerequisite satisfies `is_done`.
    pub fn precedence_met<F>(&self, mut is_done: F) -> bool
    where
        F: FnMut(&str) -> bool,
    {
        self.precedence.iter().all(|p| is_done(p))
    }
}
