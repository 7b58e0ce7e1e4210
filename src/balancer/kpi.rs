//! Line quality metrics (KPIs).
//!
//! Computes standard line balancing performance indicators from a
//! balanced line and its cycle time.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Work Content | Sum of all task durations |
//! | Theoretical Minimum | ceil(work content / cycle time) |
//! | Idle Time | stations × cycle time − work content |
//! | Line Efficiency | work content / (stations × cycle time) |
//! | Balance Delay | 1 − line efficiency |
//! | Smoothness Index | sqrt(Σ (max station time − station time)²) |
//!
//! # Reference
//! Groover (2015), "Automation, Production Systems, and Computer-Integrated
//! Manufacturing", Ch. 15.2: Line Balancing

use std::collections::HashMap;

use crate::models::Station;

/// Line performance indicators.
///
/// Times share the unit of the cycle time.
#[derive(Debug, Clone)]
pub struct LineKpi {
    /// Number of stations.
    pub station_count: usize,
    /// Sum of task durations over all stations.
    pub total_work_content: f64,
    /// Lower bound on the station count.
    pub theoretical_min_stations: usize,
    /// Unused capacity summed over all stations.
    pub total_idle_time: f64,
    /// Fraction of station capacity spent working (0.0..1.0).
    pub line_efficiency: f64,
    /// Fraction of station capacity left idle (0.0..1.0).
    pub balance_delay: f64,
    /// Spread of station loads around the busiest station.
    pub smoothness_index: f64,
    /// Per-station idle time (station id → idle).
    pub idle_by_station: HashMap<usize, f64>,
}

impl LineKpi {
    /// Computes KPIs from stations and the cycle time they were packed against.
    pub fn calculate(stations: &[Station], cycle_time: f64) -> Self {
        let station_count = stations.len();
        let total_work_content: f64 = stations.iter().map(|s| s.total_time).sum();

        let theoretical_min_stations = if cycle_time > 0.0 {
            (total_work_content / cycle_time).ceil() as usize
        } else {
            0
        };

        let capacity = station_count as f64 * cycle_time;
        let total_idle_time = capacity - total_work_content;

        let (line_efficiency, balance_delay) = if capacity > 0.0 {
            let efficiency = total_work_content / capacity;
            (efficiency, 1.0 - efficiency)
        } else {
            (0.0, 0.0)
        };

        let busiest = stations
            .iter()
            .map(|s| s.total_time)
            .fold(0.0_f64, f64::max);
        let smoothness_index = stations
            .iter()
            .map(|s| (busiest - s.total_time).powi(2))
            .sum::<f64>()
            .sqrt();

        let idle_by_station = stations
            .iter()
            .map(|s| (s.id, s.idle_time(cycle_time)))
            .collect();

        Self {
            station_count,
            total_work_content,
            theoretical_min_stations,
            total_idle_time,
            line_efficiency,
            balance_delay,
            smoothness_index,
            idle_by_station,
        }
    }

    /// Whether the line meets the given quality thresholds.
    ///
    /// `max_extra_stations` is the allowed excess over the theoretical minimum.
    pub fn meets_thresholds(&self, min_efficiency: f64, max_extra_stations: usize) -> bool {
        self.line_efficiency >= min_efficiency
            && self.station_count <= self.theoretical_min_stations + max_extra_stations
    }
}
