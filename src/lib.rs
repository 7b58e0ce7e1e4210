//! Assembly line balancing for the U-Engine ecosystem.
//!
//! Assigns precedence-constrained tasks to sequential stations so that no
//! station's work exceeds the cycle time, using a greedy largest-task-time
//! heuristic that records, after every placement, which tasks were feasible
//! alternatives and which one a largest-duration rule would pick.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Task`, `Station`, `AnnotatedTask`,
//!   `Annotation`, `PrecedenceGraph`
//! - **`balancer`**: Cycle time, `LineBalancer`, feasibility diagnostics, `LineKpi`
//! - **`validation`**: Input integrity checks (duplicate names, unknown
//!   references, DAG cycles, durations)
//!
//! # Example
//!
//! ```
//! use u_linebalance::models::Task;
//!
//! let cycle = u_linebalance::cycle_time(480.0, 60.0).unwrap();
//! let tasks = vec![
//!     Task::new("frame", 5.0),
//!     Task::new("wheels", 3.0).with_predecessor("frame"),
//!     Task::new("seat", 2.0),
//! ];
//!
//! let stations = u_linebalance::balance(&tasks, cycle).unwrap();
//! assert_eq!(stations.len(), 2);
//! assert!(stations.iter().all(|s| s.total_time <= cycle));
//! ```
//!
//! # References
//!
//! - Scholl (1999), "Balancing and Sequencing of Assembly Lines"
//! - Groover (2015), "Automation, Production Systems, and Computer-Integrated
//!   Manufacturing", Ch. 15

pub mod balancer;
pub mod error;
pub mod models;
pub mod validation;

pub use balancer::cycle_time;
pub use error::BalanceError;

use models::{Station, Task};

/// Balances `tasks` against `cycle_time` with the default [`balancer::LineBalancer`].
pub fn balance(tasks: &[Task], cycle_time: f64) -> Result<Vec<Station>, BalanceError> {
    balancer::LineBalancer::new().balance(tasks, cycle_time)
}
