//! Feasible-candidate analysis.
//!
//! After every placement the balancer records which tasks could have been
//! placed next and which one a largest-duration rule would pick. The
//! result is diagnostic only and never feeds back into placement.

use std::collections::HashSet;

use crate::models::{Annotation, Task};

/// Tasks in `remaining` that could be placed into the open station now.
///
/// A candidate is not `just_placed`, has all of its precedence in
/// `completed`, and fits: `station_time + duration <= cycle_time`.
/// Candidates keep their order in `remaining`.
pub fn feasible_candidates<'a>(
    just_placed: &Task,
    remaining: &[&'a Task],
    cycle_time: f64,
    station_time: f64,
    completed: &HashSet<&str>,
) -> Vec<&'a Task> {
    remaining
        .iter()
        .copied()
        .filter(|t| t.name != just_placed.name)
        .filter(|t| t.precedence_met(|p| completed.contains(p)))
        .filter(|t| station_time + t.duration <= cycle_time)
        .collect()
}

/// Candidates sharing the largest duration, ties included, in order.
pub fn max_duration_candidates<'a>(candidates: &[&'a Task]) -> Vec<&'a Task> {
    let Some(max) = max_duration(candidates) else {
        return Vec::new();
    };
    candidates
        .iter()
        .copied()
        .filter(|t| t.duration == max)
        .collect()
}

/// The first candidate with the largest duration, or `None` if empty.
pub fn select_next<'a>(candidates: &[&'a Task]) -> Option<&'a Task> {
    let max = max_duration(candidates)?;
    candidates.iter().copied().find(|t| t.duration == max)
}

/// Builds the annotation recorded for `just_placed`.
pub(crate) fn annotate(
    just_placed: &Task,
    remaining: &[&Task],
    cycle_time: f64,
    station_time: f64,
    completed: &HashSet<&str>,
) -> Annotation {
    let feasible = feasible_candidates(just_placed, remaining, cycle_time, station_time, completed);
    let largest = max_duration_candidates(&feasible);

    Annotation {
        feasible_next: names(&feasible),
        max_duration_candidates: names(&largest),
        selected_next: select_next(&feasible).map(|t| t.name.clone()),
    }
}

fn max_duration(candidates: &[&Task]) -> Option<f64> {
    candidates
        .iter()
        .map(|t| t.duration)
        .reduce(f64::max)
}

fn names(tasks: &[&Task]) -> Vec<String> {
    tasks.iter().map(|t| t.name.clone()).collect()
}
