//! Network optimization planning
//!
//! Builds advisory task-redistribution plans from stored node metrics.
//! Plans describe suggested movements; applying them is out of scope.

pub mod engine;
pub mod plan;

pub use engine::OptimizationEngine;
pub use plan::{RedistributionPlan, TaskMove};
