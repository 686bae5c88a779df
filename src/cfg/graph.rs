//! The immutable control flow graph consumed by every analysis.

use crate::{
    cfg::Node,
    utils::graph::{
        algorithms, ExitGraph, GraphBase, NodeId, Predecessors, Reversed, RootedGraph, Successors,
    },
    Result,
};

/// A complete control flow graph of one function.
///
/// The graph has exactly one start node and one end node, its edge set is frozen and
/// both edge directions are stored, so successor and predecessor lookups are slice
/// accesses. Instances are produced by [`CfgBuilder::build`](crate::cfg::CfgBuilder::build).
///
/// Every node is expected to be reachable from start and to reach end; use
/// [`CompleteCfg::validate`] to check this for graphs coming from an untrusted
/// producer. The analyses tolerate violations: nodes that can not reach end simply have
/// no postdominator.
#[derive(Debug, Clone)]
pub struct CompleteCfg {
    nodes: Vec<Node>,
    successors: Vec<Vec<NodeId>>,
    predecessors: Vec<Vec<NodeId>>,
    start: NodeId,
    end: NodeId,
}

impl CompleteCfg {
    pub(crate) fn from_parts(
        nodes: Vec<Node>,
        successors: Vec<Vec<NodeId>>,
        predecessors: Vec<Vec<NodeId>>,
        start: NodeId,
        end: NodeId,
    ) -> Self {
        Self {
            nodes,
            successors,
            predecessors,
            start,
            end,
        }
    }

    /// Returns the node behind a handle, or `None` if the handle is out of range.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Returns an iterator over all nodes with their handles, by ascending handle.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId::new(index), node))
    }

    /// Returns the control flow successors of a node.
    ///
    /// Out-of-range handles have no successors.
    #[must_use]
    pub fn successors(&self, id: NodeId) -> &[NodeId] {
        self.successors.get(id.index()).map_or(&[], Vec::as_slice)
    }

    /// Returns the control flow predecessors of a node.
    ///
    /// Out-of-range handles have no predecessors.
    #[must_use]
    pub fn predecessors(&self, id: NodeId) -> &[NodeId] {
        self.predecessors.get(id.index()).map_or(&[], Vec::as_slice)
    }

    /// Returns the start node.
    #[must_use]
    pub fn start(&self) -> NodeId {
        self.start
    }

    /// Returns the end node.
    #[must_use]
    pub fn end(&self) -> NodeId {
        self.end
    }

    /// Returns the number of nodes, start and end included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of distinct edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.successors.iter().map(Vec::len).sum()
    }

    /// Checks that every node is reachable from start and that end is reachable from
    /// every node.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvariantViolated`] naming the first offending node.
    pub fn validate(&self) -> Result<()> {
        let mut forward = vec![false; self.node_count()];
        let entry = self.entry();
        for node in algorithms::dfs(self, entry) {
            forward[node.index()] = true;
        }
        if let Some(index) = forward.iter().position(|seen| !seen) {
            return Err(invariant_error!(
                "node {} is not reachable from start {}",
                NodeId::new(index),
                entry
            ));
        }

        let mut backward = vec![false; self.node_count()];
        let exit = self.exit();
        for node in algorithms::dfs(&Reversed(self), exit) {
            backward[node.index()] = true;
        }
        if let Some(index) = backward.iter().position(|seen| !seen) {
            return Err(invariant_error!(
                "end {} is not reachable from node {}",
                exit,
                NodeId::new(index)
            ));
        }

        Ok(())
    }
}

impl GraphBase for CompleteCfg {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId::new)
    }
}

impl Successors for CompleteCfg {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        CompleteCfg::successors(self, node).iter().copied()
    }
}

impl Predecessors for CompleteCfg {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        CompleteCfg::predecessors(self, node).iter().copied()
    }
}

impl RootedGraph for CompleteCfg {
    fn entry(&self) -> NodeId {
        self.start
    }
}

impl ExitGraph for CompleteCfg {
    fn exit(&self) -> NodeId {
        self.end
    }
}
