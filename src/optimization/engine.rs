//! Task redistribution planning

use std::sync::Arc;

use crate::analysis::PerformanceAnalyzer;
use crate::metrics::MetricsStore;

use super::plan::{RedistributionPlan, TaskMove};

/// Classifies underutilized nodes and builds advisory redistribution plans.
///
/// High-load classification is delegated to [`PerformanceAnalyzer`] so both
/// components apply the same policy: strict inequality against the supplied
/// threshold, snapshot iteration order preserved. Plans are never executed.
pub struct OptimizationEngine {
    store: Arc<MetricsStore>,
    analyzer: PerformanceAnalyzer,
}

impl OptimizationEngine {
    /// Creates an engine over a shared store
    pub fn new(store: Arc<MetricsStore>) -> Self {
        let analyzer = PerformanceAnalyzer::new(Arc::clone(&store));
        Self { store, analyzer }
    }

    /// Returns the ids of all nodes whose CPU usage is strictly below the
    /// threshold, in store iteration order.
    ///
    /// A node exactly at the threshold is not underutilized. With equal
    /// high and low thresholds a node at that value therefore lands in
    /// neither class.
    pub fn find_underutilized_nodes(&self, cpu_threshold: f64) -> Vec<String> {
        self.store
            .list_all()
            .into_iter()
            .filter(|m| m.cpu_usage < cpu_threshold)
            .map(|m| m.node_id)
            .collect()
    }

    /// Pairs high-load nodes with underutilized nodes positionally.
    ///
    /// The i-th high-load node is paired with the i-th underutilized node
    /// until the shorter list runs out; excess entries on either side are
    /// left unpaired. The plan preserves the order of `high_load_nodes`.
    /// The inputs are taken as given — no disjointness check.
    pub fn generate_redistribution_plan(
        &self,
        high_load_nodes: &[String],
        underutilized_nodes: &[String],
    ) -> RedistributionPlan {
        let moves = high_load_nodes
            .iter()
            .zip(underutilized_nodes.iter())
            .map(|(source, destination)| TaskMove::new(source, destination))
            .collect();
        RedistributionPlan::new(moves)
    }

    /// Classifies against both thresholds, builds a plan, and renders the
    /// optimization report.
    ///
    /// Read-only: the store is never mutated and the plan is advisory text.
    pub fn optimize_network(&self, cpu_high_threshold: f64, cpu_low_threshold: f64) -> String {
        let high_load_nodes = self.analyzer.find_high_load_nodes(cpu_high_threshold);
        let underutilized_nodes = self.find_underutilized_nodes(cpu_low_threshold);

        let plan = self.generate_redistribution_plan(&high_load_nodes, &underutilized_nodes);
        tracing::debug!(
            high_load = high_load_nodes.len(),
            underutilized = underutilized_nodes.len(),
            planned_moves = plan.len(),
            "redistribution plan built"
        );

        if plan.is_empty() {
            return "[INFO] No optimization needed. All nodes are operating efficiently."
                .to_string();
        }

        let mut report = String::from("[OPTIMIZATION REPORT]\nTask redistribution plan:\n");
        for task_move in plan.moves() {
            report.push_str(&format!(
                "Move tasks from {} to {}\n",
                task_move.source, task_move.destination
            ));
        }
        report
    }
}
