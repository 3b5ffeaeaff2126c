//! In-memory metrics store

use indexmap::IndexMap;
use parking_lot::RwLock;

use super::node::NodeMetrics;

/// Authoritative record of the most recent metrics per node.
///
/// Records are keyed by node id and iterate in first-insertion order, so
/// classification results and redistribution plans derived from a snapshot
/// are reproducible across runs. A single lock guards the whole map: a
/// snapshot never observes a partially-applied update. Nodes are never
/// removed; once known, a node persists for the lifetime of the store.
#[derive(Debug, Default)]
pub struct MetricsStore {
    nodes: RwLock<IndexMap<String, NodeMetrics>>,
}

impl MetricsStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            nodes: RwLock::new(IndexMap::new()),
        }
    }

    /// Records a metric sample for a node.
    ///
    /// Creates the record on first sight of the id, otherwise replaces all
    /// metric fields at once. Values are accepted as-is, including negative
    /// or out-of-range numbers.
    pub fn update(&self, node_id: &str, cpu_usage: f64, memory_usage: f64, bandwidth: f64) {
        let record = NodeMetrics::new(node_id, cpu_usage, memory_usage, bandwidth);
        // IndexMap::insert keeps the original insertion position on replace.
        self.nodes.write().insert(node_id.to_string(), record);
        tracing::debug!(
            node_id,
            cpu_usage,
            memory_usage,
            bandwidth,
            "metrics updated"
        );
    }

    /// Returns the current record for a node, or `None` if it has never
    /// been updated.
    pub fn get(&self, node_id: &str) -> Option<NodeMetrics> {
        self.nodes.read().get(node_id).cloned()
    }

    /// Returns a snapshot of all current records in insertion order.
    ///
    /// The snapshot reflects the store at call time; it is not a live view.
    pub fn list_all(&self) -> Vec<NodeMetrics> {
        self.nodes.read().values().cloned().collect()
    }

    /// Number of known nodes
    pub fn len(&self) -> usize {
        self.nodes.read().len()
    }

    /// Whether any node has been recorded
    pub fn is_empty(&self) -> bool {
        self.nodes.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_and_get_round_trip() {
        let store = MetricsStore::new();
        store.update("Node1", 75.5, 60.2, 100.0);

        let metrics = store.get("Node1").unwrap();
        assert_eq!(metrics.cpu_usage, 75.5);
        assert_eq!(metrics.memory_usage, 60.2);
        assert_eq!(metrics.bandwidth, 100.0);
    }

    #[test]
    fn test_get_unknown_node() {
        let store = MetricsStore::new();
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn test_update_overwrites_whole_record() {
        let store = MetricsStore::new();
        store.update("Node1", 1.0, 1.0, 1.0);
        store.update("Node1", 2.0, 2.0, 2.0);

        let metrics = store.get("Node1").unwrap();
        assert_eq!(metrics.cpu_usage, 2.0);
        assert_eq!(metrics.memory_usage, 2.0);
        assert_eq!(metrics.bandwidth, 2.0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_list_all_preserves_insertion_order() {
        let store = MetricsStore::new();
        store.update("Node1", 75.5, 60.2, 100.0);
        store.update("Node2", 45.3, 80.0, 120.0);
        store.update("Node3", 90.1, 70.5, 150.0);

        let ids: Vec<String> = store.list_all().into_iter().map(|m| m.node_id).collect();
        assert_eq!(ids, vec!["Node1", "Node2", "Node3"]);
    }

    #[test]
    fn test_overwrite_keeps_insertion_position() {
        let store = MetricsStore::new();
        store.update("Node1", 10.0, 10.0, 10.0);
        store.update("Node2", 20.0, 20.0, 20.0);
        store.update("Node1", 30.0, 30.0, 30.0);

        let ids: Vec<String> = store.list_all().into_iter().map(|m| m.node_id).collect();
        assert_eq!(ids, vec!["Node1", "Node2"]);
    }

    #[test]
    fn test_empty_store() {
        let store = MetricsStore::new();
        assert!(store.is_empty());
        assert!(store.list_all().is_empty());
    }
}
