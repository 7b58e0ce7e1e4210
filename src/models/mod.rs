//! Line balancing domain models.
//!
//! Provides the input and output data types of a line balancing problem.
//!
//! # Domain Mappings
//!
//! | u-linebalance | Assembly | Packaging | Kitting |
//! |---------------|----------|-----------|---------|
//! | Task | Work Element | Packing Step | Pick |
//! | Station | Workstation | Cell | Cart |
//! | Cycle Time | Takt Time | Line Rate | Wave Time |

mod graph;
mod station;
mod task;

pub use graph::{Edge, PrecedenceGraph, TaskNode};
pub use station::{AnnotatedTask, Annotation, Station};
pub use task::Task;
