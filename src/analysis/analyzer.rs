//! Load classification and aggregate statistics

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::metrics::MetricsStore;

/// Arithmetic means of each metric across all known nodes.
///
/// An empty store yields all zeros. That is a defined sentinel, not a
/// division artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AverageMetrics {
    /// Mean CPU usage percentage
    pub average_cpu_usage: f64,
    /// Mean memory usage percentage
    pub average_memory_usage: f64,
    /// Mean bandwidth in Mbps
    pub average_bandwidth: f64,
}

impl AverageMetrics {
    fn zero() -> Self {
        Self {
            average_cpu_usage: 0.0,
            average_memory_usage: 0.0,
            average_bandwidth: 0.0,
        }
    }
}

/// Read-only analysis over a [`MetricsStore`] snapshot.
///
/// Every operation takes an independent snapshot via
/// [`MetricsStore::list_all`] and is safe to run concurrently with updates.
pub struct PerformanceAnalyzer {
    store: Arc<MetricsStore>,
}

impl PerformanceAnalyzer {
    /// Creates an analyzer over a shared store
    pub fn new(store: Arc<MetricsStore>) -> Self {
        Self { store }
    }

    /// Returns the ids of all nodes whose CPU usage is strictly above the
    /// threshold, in store iteration order.
    ///
    /// A node exactly at the threshold is not high-load.
    pub fn find_high_load_nodes(&self, cpu_threshold: f64) -> Vec<String> {
        self.store
            .list_all()
            .into_iter()
            .filter(|m| m.cpu_usage > cpu_threshold)
            .map(|m| m.node_id)
            .collect()
    }

    /// Calculates average metrics across all known nodes
    pub fn calculate_average_metrics(&self) -> AverageMetrics {
        let snapshot = self.store.list_all();
        if snapshot.is_empty() {
            return AverageMetrics::zero();
        }

        let count = snapshot.len() as f64;
        let mut total_cpu = 0.0;
        let mut total_memory = 0.0;
        let mut total_bandwidth = 0.0;
        for metrics in &snapshot {
            total_cpu += metrics.cpu_usage;
            total_memory += metrics.memory_usage;
            total_bandwidth += metrics.bandwidth;
        }

        AverageMetrics {
            average_cpu_usage: total_cpu / count,
            average_memory_usage: total_memory / count,
            average_bandwidth: total_bandwidth / count,
        }
    }

    /// Renders a redistribution suggestion for nodes above the threshold.
    ///
    /// Reporting only: this does not build or apply a plan. The returned
    /// text is stable for unchanged store state.
    pub fn suggest_task_redistribution(&self, cpu_threshold: f64) -> String {
        let high_load_nodes = self.find_high_load_nodes(cpu_threshold);
        if high_load_nodes.is_empty() {
            return "[INFO] All nodes are operating within acceptable CPU usage limits."
                .to_string();
        }

        let mut report = String::from("[SUGGESTION] Task redistribution needed for high load nodes: \n");
        report.push_str(
            &high_load_nodes
                .iter()
                .map(|node| format!("- Node ID: {}", node))
                .collect::<Vec<_>>()
                .join("\n"),
        );
        report
    }
}
