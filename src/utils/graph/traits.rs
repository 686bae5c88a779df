//! Trait definitions for graph abstractions.
//!
//! The traversal and postdominator algorithms are written against these traits
//! rather than against [`CompleteCfg`](crate::cfg::CompleteCfg) directly, which lets
//! them run unchanged on the reversed view of a graph ([`Reversed`](crate::utils::graph::Reversed))
//! and on the small adjacency graphs used in tests.
//!
//! - [`GraphBase`] - Core properties: node count and node iteration
//! - [`Successors`] - Forward edge traversal (outgoing edges)
//! - [`Predecessors`] - Backward edge traversal (incoming edges)
//! - [`RootedGraph`] - Graphs with a designated entry node
//! - [`ExitGraph`] - Graphs with a designated exit node (for postdominator computation)

use crate::utils::graph::NodeId;

/// Base trait providing core graph properties.
pub trait GraphBase {
    /// Returns the number of nodes in the graph.
    fn node_count(&self) -> usize;

    /// Returns an iterator over all node identifiers in the graph, by ascending index.
    fn node_ids(&self) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs that support forward edge traversal.
pub trait Successors: GraphBase {
    /// Returns an iterator over the successor nodes of the given node.
    ///
    /// For a directed edge `(u, v)`, node `v` is a successor of `u`.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a valid node in the graph.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs that support backward edge traversal.
pub trait Predecessors: GraphBase {
    /// Returns an iterator over the predecessor nodes of the given node.
    ///
    /// For a directed edge `(u, v)`, node `u` is a predecessor of `v`.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a valid node in the graph.
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs with a designated entry (root) node.
///
/// For a control flow graph this is the synthetic start node; every statement is
/// expected to be reachable from it.
pub trait RootedGraph: Successors + Predecessors {
    /// Returns the entry node of the graph.
    fn entry(&self) -> NodeId;
}

/// Trait for graphs with a single designated exit node.
///
/// The exit is the root of the postdominator tree: every node that can reach it
/// is postdominated by it.
pub trait ExitGraph: Successors + Predecessors {
    /// Returns the exit node of the graph.
    fn exit(&self) -> NodeId;
}
