//! Cycle time computation.
//!
//! The cycle time is the longest a station may work on one unit so the
//! line still reaches its production goal within the available time.

use crate::error::BalanceError;

/// Computes the cycle time: `total_available_time / production_goal`.
///
/// # Errors
/// - [`BalanceError::InvalidGoal`] if the goal is zero, negative, or not finite.
/// - [`BalanceError::InvalidAvailableTime`] if the available time is negative
///   or not finite.
///
/// # Example
/// ```
/// use u_linebalance::balancer::cycle_time;
///
/// assert!((cycle_time(480.0, 100.0).unwrap() - 4.8).abs() < 1e-12);
/// assert!(cycle_time(480.0, 0.0).is_err());
/// ```
pub fn cycle_time(total_available_time: f64, production_goal: f64) -> Result<f64, BalanceError> {
    if !production_goal.is_finite() || production_goal <= 0.0 {
        return Err(BalanceError::InvalidGoal(production_goal));
    }
    if !total_available_time.is_finite() || total_available_time < 0.0 {
        return Err(BalanceError::InvalidAvailableTime(total_available_time));
    }
    Ok(total_available_time / production_goal)
}
