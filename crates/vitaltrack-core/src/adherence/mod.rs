//! Adherence tracking.
//!
//! - [`AdherenceTracker`]: persisted percentage per disease or suggestion
//! - [`NutritionPlanner`]: daily completion of plan suggestions

mod planner;
mod tracker;

pub use planner::*;
pub use tracker::*;
