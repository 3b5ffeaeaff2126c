//! Per-node metric records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Last-known resource state of one network node.
///
/// `cpu_usage` and `memory_usage` are percentages (0-100 by convention),
/// `bandwidth` is a rate in Mbps. Values are stored as supplied; the store
/// performs no range enforcement, so callers that need clamping do it at
/// their own boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeMetrics {
    /// Unique node identifier, assigned by the caller
    pub node_id: String,
    /// CPU usage percentage
    pub cpu_usage: f64,
    /// Memory usage percentage
    pub memory_usage: f64,
    /// Bandwidth usage in Mbps
    pub bandwidth: f64,
    /// Timestamp of the last update
    pub updated_at: DateTime<Utc>,
}

impl NodeMetrics {
    /// Creates a record from one metric sample
    pub fn new(
        node_id: impl Into<String>,
        cpu_usage: f64,
        memory_usage: f64,
        bandwidth: f64,
    ) -> Self {
        Self {
            node_id: node_id.into(),
            cpu_usage,
            memory_usage,
            bandwidth,
            updated_at: Utc::now(),
        }
    }
}

impl std::fmt::Display for NodeMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Node ID: {}, CPU Usage: {:.2}%, Memory Usage: {:.2}%, Bandwidth: {:.2} Mbps",
            self.node_id, self.cpu_usage, self.memory_usage, self.bandwidth
        )
    }
}
