//! Greedy precedence-aware line balancer.
//!
//! # Algorithm
//!
//! 1. Split tasks into initial (no precedence) and dependent groups.
//! 2. Stable-sort each group by duration, longest first.
//! 3. Queue = initial group followed by dependent group. The queue is
//!    never re-sorted.
//! 4. Scan the queue; place the first task whose precedence is completed
//!    and which fits the open station, then rescan from the top.
//! 5. When a full scan places nothing, close the station and open a new one.
//! 6. Close the last station if it holds any task.
//!
//! After every placement the feasible alternatives are recorded as an
//! [`Annotation`]. Annotations are kept apart from the queue and joined onto
//! the stations at the end.
//!
//! # Complexity
//! O(n² · p) where n = tasks, p = average precedence list length.
//!
//! # Reference
//! Helgeson & Birnie (1961), "Assembly Line Balancing Using the Ranked
//! Positional Weight Technique"

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use super::{cycle_time, feasibility, LineKpi};
use crate::error::BalanceError;
use crate::models::{AnnotatedTask, Annotation, Station, Task};
use crate::validation::{validate_against_cycle_time, validate_tasks};

/// Input container for balancing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceRequest {
    /// Tasks to assign.
    pub tasks: Vec<Task>,
    /// Production time available in the period.
    pub total_available_time: f64,
    /// Units to produce in the period.
    pub production_goal: f64,
}

impl BalanceRequest {
    /// Creates a new balance request.
    pub fn new(tasks: Vec<Task>, total_available_time: f64, production_goal: f64) -> Self {
        Self {
            tasks,
            total_available_time,
            production_goal,
        }
    }

    /// Adds a task.
    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Cycle time derived from available time and goal.
    pub fn cycle_time(&self) -> Result<f64, BalanceError> {
        cycle_time(self.total_available_time, self.production_goal)
    }
}

/// A balanced line: the cycle time used and the resulting stations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineBalance {
    /// Cycle time the stations were packed against.
    pub cycle_time: f64,
    /// Stations in line order.
    pub stations: Vec<Station>,
}

impl LineBalance {
    /// Number of stations.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of assigned tasks.
    pub fn task_count(&self) -> usize {
        self.stations.iter().map(Station::task_count).sum()
    }

    /// The station holding the named task.
    pub fn station_of(&self, name: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.contains(name))
    }

    /// Line quality metrics.
    pub fn kpi(&self) -> LineKpi {
        LineKpi::calculate(&self.stations, self.cycle_time)
    }
}

/// Greedy largest-task-time line balancer.
///
/// Validates the task list, then packs tasks into stations in a fixed
/// scan order, recording selection diagnostics after every placement.
///
/// # Example
///
/// ```
/// use u_linebalance::balancer::LineBalancer;
/// use u_linebalance::models::Task;
///
/// let tasks = vec![
///     Task::new("A", 5.0),
///     Task::new("B", 3.0),
///     Task::new("C", 2.0).with_predecessor("A"),
/// ];
///
/// let stations = LineBalancer::new().balance(&tasks, 8.0).unwrap();
/// assert_eq!(stations.len(), 2);
/// assert_eq!(stations[0].task_names(), vec!["A", "B"]);
/// assert_eq!(stations[1].task_names(), vec!["C"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LineBalancer;

impl LineBalancer {
    /// Creates a new balancer.
    pub fn new() -> Self {
        Self
    }

    /// Assigns tasks to stations so no station exceeds `cycle_time`.
    ///
    /// # Errors
    /// - [`BalanceError::InvalidCycleTime`] if `cycle_time` is not positive and finite.
    /// - [`BalanceError::Validation`] for duplicate names, unknown or cyclic
    ///   precedence, invalid durations, or tasks longer than `cycle_time`.
    #[instrument(level = "debug", skip_all, fields(task_count = tasks.len(), cycle_time = cycle_time))]
    pub fn balance(&self, tasks: &[Task], cycle_time: f64) -> Result<Vec<Station>, BalanceError> {
        if !cycle_time.is_finite() || cycle_time <= 0.0 {
            return Err(BalanceError::InvalidCycleTime(cycle_time));
        }
        validate_tasks(tasks)?;
        validate_against_cycle_time(tasks, cycle_time)?;

        let stations = assign(tasks, cycle_time)?;
        debug!(station_count = stations.len(), "line balanced");
        Ok(stations)
    }

    /// Balances a request, deriving the cycle time from it.
    pub fn balance_request(&self, request: &BalanceRequest) -> Result<LineBalance, BalanceError> {
        let cycle_time = request.cycle_time()?;
        let stations = self.balance(&request.tasks, cycle_time)?;
        Ok(LineBalance {
            cycle_time,
            stations,
        })
    }
}

/// Initial tasks first, each group longest first; ties keep input order.
fn initial_queue(tasks: &[Task]) -> Vec<&Task> {
    let (mut initial, mut dependent): (Vec<&Task>, Vec<&Task>) =
        tasks.iter().partition(|t| t.is_initial());
    initial.sort_by(|a, b| longest_first(a, b));
    dependent.sort_by(|a, b| longest_first(a, b));
    initial.extend(dependent);
    initial
}

fn longest_first(a: &Task, b: &Task) -> Ordering {
    b.duration.total_cmp(&a.duration)
}

/// Runs the assignment loop on validated input.
fn assign(tasks: &[Task], cycle_time: f64) -> Result<Vec<Station>, BalanceError> {
    let mut queue = initial_queue(tasks);
    let mut completed: HashSet<&str> = HashSet::with_capacity(tasks.len());
    let mut annotations: HashMap<&str, Annotation> = HashMap::with_capacity(tasks.len());

    let mut closed: Vec<(Vec<&Task>, f64)> = Vec::new();
    let mut open: Vec<&Task> = Vec::new();
    let mut open_time = 0.0;

    while !queue.is_empty() {
        let next = queue.iter().position(|t| {
            t.precedence_met(|p| completed.contains(p)) && open_time + t.duration <= cycle_time
        });

        match next {
            Some(idx) => {
                let task = queue.remove(idx);
                open.push(task);
                open_time += task.duration;
                completed.insert(task.name.as_str());

                let annotation =
                    feasibility::annotate(task, &queue, cycle_time, open_time, &completed);
                trace!(
                    task = %task.name,
                    station = closed.len() + 1,
                    station_time = open_time,
                    selected_next = annotation.selected_next.as_deref().unwrap_or("none"),
                    "task placed"
                );
                annotations.insert(task.name.as_str(), annotation);
            }
            None if open.is_empty() => {
                // Nothing fits an empty station: no later scan can differ.
                let names: Vec<String> = queue.iter().map(|t| t.name.clone()).collect();
                return Err(BalanceError::Unassignable(names));
            }
            None => {
                debug!(
                    station = closed.len() + 1,
                    total_time = open_time,
                    "station closed"
                );
                closed.push((std::mem::take(&mut open), open_time));
                open_time = 0.0;
            }
        }
    }

    if !open.is_empty() {
        closed.push((open, open_time));
    }

    let stations = closed
        .into_iter()
        .enumerate()
        .map(|(idx, (placed, total_time))| Station {
            id: idx + 1,
            tasks: placed
                .into_iter()
                .map(|t| {
                    let annotation = annotations.remove(t.name.as_str()).unwrap_or_default();
                    AnnotatedTask::new(t.clone(), annotation)
                })
                .collect(),
            total_time,
        })
        .collect();

    Ok(stations)
}
