//! Performance analysis over stored node metrics

pub mod analyzer;

pub use analyzer::{AverageMetrics, PerformanceAnalyzer};
