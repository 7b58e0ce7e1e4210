//! Greedy line balancing and line quality metrics.
//!
//! Provides cycle time computation, the precedence-aware station
//! assignment loop, the feasibility diagnostics recorded along the way,
//! and line quality metrics.
//!
//! # Algorithm
//!
//! `LineBalancer` is a greedy largest-task-time heuristic over a fixed scan
//! order. It is not optimal, but it is fast and fully deterministic.
//!
//! # KPI
//!
//! `LineKpi` computes standard line metrics: efficiency, balance delay,
//! idle time, smoothness index, and the theoretical minimum station count.
//!
//! # References
//!
//! - Scholl (1999), "Balancing and Sequencing of Assembly Lines"
//! - Helgeson & Birnie (1961), "Assembly Line Balancing Using the Ranked
//!   Positional Weight Technique"

mod cycle_time;
pub mod feasibility;
mod greedy;
mod kpi;

pub use cycle_time::cycle_time;
pub use feasibility::{feasible_candidates, max_duration_candidates, select_next};
pub use greedy::{BalanceRequest, LineBalance, LineBalancer};
pub use kpi::LineKpi;
