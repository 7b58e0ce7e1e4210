//! Station (solution) model.
//!
//! A station is one sequential stage of the line. Balancing produces an
//! ordered list of stations, each holding the tasks assigned to it in
//! assignment order together with the selection diagnostics recorded at
//! the moment each task was placed.
//!
//! # Reference
//! Scholl (1999), "Balancing and Sequencing of Assembly Lines", Ch. 2.2

use serde::{Deserialize, Serialize};

use super::Task;

/// Selection diagnostics recorded right after a task was placed.
///
/// Purely informational: annotations never influence which task the
/// balancer places next.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    /// Tasks immediately assignable after this one was placed.
    pub feasible_next: Vec<String>,
    /// Subset of `feasible_next` sharing the largest duration.
    pub max_duration_candidates: Vec<String>,
    /// First of `max_duration_candidates`; `None` when nothing was feasible.
    ///
    /// Serialized as the string `"none"` when absent.
    #[serde(with = "selected_next")]
    pub selected_next: Option<String>,
}

/// A task together with the diagnostics recorded when it was placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedTask {
    /// The placed task.
    #[serde(flatten)]
    pub task: Task,
    /// Diagnostics at placement time.
    #[serde(flatten)]
    pub annotation: Annotation,
}

/// A closed station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    /// 1-based position on the line.
    pub id: usize,
    /// Tasks in assignment order.
    pub tasks: Vec<AnnotatedTask>,
    /// Sum of task durations.
    pub total_time: f64,
}

impl AnnotatedTask {
    /// Joins a task with its annotation.
    pub fn new(task: Task, annotation: Annotation) -> Self {
        Self { task, annotation }
    }

    /// Task name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.task.name
    }

    /// Task duration.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.task.duration
    }
}

impl Station {
    /// Creates a station from its assigned tasks, summing their durations.
    pub fn new(id: usize, tasks: Vec<AnnotatedTask>) -> Self {
        let total_time = tasks.iter().map(AnnotatedTask::duration).sum();
        Self {
            id,
            tasks,
            total_time,
        }
    }

    /// Names of the assigned tasks, in assignment order.
    pub fn task_names(&self) -> Vec<&str> {
        self.tasks.iter().map(AnnotatedTask::name).collect()
    }

    /// Whether the named task is assigned here.
    pub fn contains(&self, name: &str) -> bool {
        self.tasks.iter().any(|t| t.name() == name)
    }

    /// Position of the named task within the station.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.name() == name)
    }

    /// Unused capacity against the given cycle time.
    #[inline]
    pub fn idle_time(&self, cycle_time: f64) -> f64 {
        cycle_time - self.total_time
    }

    /// Number of assigned tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Whether no task is assigned.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

mod selected_next {
    use serde::{Deserialize, Deserializer, Serializer};

    const NONE: &str = "none";

    pub fn serialize<S: Serializer>(value: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(value.as_deref().unwrap_or(NONE))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let value = String::deserialize(d)?;
        Ok((value != NONE).then_some(value))
    }
}
