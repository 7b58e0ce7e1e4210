//! Precedence graph view of a task list.
//!
//! Converts tasks into nodes and directed edges (prerequisite → dependent)
//! for display. Independent of station assignment.

use serde::{Deserialize, Serialize};

use super::Task;

/// A graph node, one per task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskNode {
    /// Node key (the task name).
    pub id: String,
    /// Display label (the task name).
    pub name: String,
}

/// A directed precedence edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Prerequisite task name.
    pub from: String,
    /// Dependent task name.
    pub to: String,
}

/// Node/edge representation of the precedence relation.
///
/// Nodes follow input order; edges follow input order of the dependent
/// task, then the order of its precedence list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecedenceGraph {
    /// One node per task.
    pub nodes: Vec<TaskNode>,
    /// One edge per precedence entry.
    pub edges: Vec<Edge>,
}

impl PrecedenceGraph {
    /// Builds the graph from a task list.
    ///
    /// Edges are emitted for every precedence entry, including entries
    /// naming tasks absent from the list.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let nodes = tasks
            .iter()
            .map(|t| TaskNode {
                id: t.name.clone(),
                name: t.name.clone(),
            })
            .collect();

        let edges = tasks
            .iter()
            .flat_map(|t| {
                t.precedence.iter().map(move |p| Edge {
                    from: p.clone(),
                    to: t.name.clone(),
                })
            })
            .collect();

        Self { nodes, edges }
    }

    /// Direct prerequisites of a task.
    pub fn predecessors_of(&self, name: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|e| e.to == name)
            .map(|e| e.from.as_str())
            .collect()
    }

    /// Direct dependents of a task.
    pub fn successors_of(&self, name: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|e| e.from == name)
            .map(|e| e.to.as_str())
            .collect()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
