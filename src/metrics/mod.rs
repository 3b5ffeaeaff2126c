//! Node metrics collection and storage
//!
//! This module holds the latest known resource metrics per network node.
//! Callers push samples in; analysis components read insertion-ordered
//! snapshots back out.

pub mod node;
pub mod store;

pub use node::NodeMetrics;
pub use store::MetricsStore;
