//! Incremental construction of [`CompleteCfg`] instances.

use rustc_hash::FxHashSet;

use crate::{
    cfg::{CompleteCfg, Node, NodeKind},
    utils::graph::NodeId,
    Error, Result,
};

/// Builder for [`CompleteCfg`].
///
/// Nodes are numbered in insertion order. Edge endpoints are only checked when the
/// graph is built, so nodes and edges can be added in any order.
///
/// Start and end are the nodes whose [`NodeKind`] is `Start` and `End`, unless they
/// were designated explicitly with [`CfgBuilder::set_start`] and [`CfgBuilder::set_end`].
///
/// # Examples
///
/// ```rust
/// use pdgslice::cfg::{CfgBuilder, Node};
///
/// let mut builder = CfgBuilder::new();
/// let start = builder.add_node(Node::start());
/// let stmt = builder.add_node(Node::statement(1, 1, 1, 6).with_definitions(["x"]));
/// let end = builder.add_node(Node::end());
/// builder.add_edge(start, stmt);
/// builder.add_edge(stmt, end);
/// builder.add_edge(stmt, end); // duplicates collapse
///
/// let cfg = builder.build()?;
/// assert_eq!(cfg.start(), start);
/// assert_eq!(cfg.end(), end);
/// assert_eq!(cfg.edge_count(), 2);
/// # Ok::<(), pdgslice::Error>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct CfgBuilder {
    nodes: Vec<Node>,
    edges: Vec<(NodeId, NodeId)>,
    start: Option<NodeId>,
    end: Option<NodeId>,
}

impl CfgBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder with room for `nodes` nodes.
    #[must_use]
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(nodes + nodes / 2),
            start: None,
            end: None,
        }
    }

    /// Adds a node and returns its handle.
    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Adds a control flow edge from `from` to `to`.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) {
        self.edges.push((from, to));
    }

    /// Designates `node` as the start node regardless of its kind.
    pub fn set_start(&mut self, node: NodeId) {
        self.start = Some(node);
    }

    /// Designates `node` as the end node regardless of its kind.
    pub fn set_end(&mut self, node: NodeId) {
        self.end = Some(node);
    }

    /// Returns the number of nodes added so far.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Freezes the graph.
    ///
    /// Duplicate edges are collapsed; successor lists keep the order in which edges were
    /// first added.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphError`] if:
    /// - there is not exactly one start node or exactly one end node, or a designated
    ///   start or end is outside the graph
    /// - start and end are the same node
    /// - an edge refers to a node that was never added
    /// - the end node has an outgoing edge
    pub fn build(self) -> Result<CompleteCfg> {
        let start = self.terminal(self.start, NodeKind::Start)?;
        let end = self.terminal(self.end, NodeKind::End)?;
        if start == end {
            return Err(Error::GraphError(format!(
                "start and end must be distinct nodes (both are {start})"
            )));
        }

        let node_count = self.nodes.len();
        let mut successors = vec![Vec::new(); node_count];
        let mut predecessors = vec![Vec::new(); node_count];
        let mut seen = FxHashSet::default();

        for (from, to) in self.edges {
            if from.index() >= node_count || to.index() >= node_count {
                return Err(Error::GraphError(format!(
                    "edge {from} -> {to} refers to a node outside the graph ({node_count} nodes)"
                )));
            }
            if from == end {
                return Err(Error::GraphError(format!(
                    "end node {end} can not have successors (edge {from} -> {to})"
                )));
            }
            if seen.insert((from, to)) {
                successors[from.index()].push(to);
                predecessors[to.index()].push(from);
            }
        }

        Ok(CompleteCfg::from_parts(
            self.nodes,
            successors,
            predecessors,
            start,
            end,
        ))
    }

    fn terminal(&self, designated: Option<NodeId>, kind: NodeKind) -> Result<NodeId> {
        match designated {
            Some(id) if id.index() < self.nodes.len() => Ok(id),
            Some(id) => Err(Error::GraphError(format!(
                "designated {kind} node {id} is outside the graph ({} nodes)",
                self.nodes.len()
            ))),
            None => self.unique_node(kind),
        }
    }

    fn unique_node(&self, kind: NodeKind) -> Result<NodeId> {
        let mut found = self
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.kind() == kind)
            .map(|(index, _)| NodeId::new(index));

        match (found.next(), found.next()) {
            (Some(id), None) => Ok(id),
            (None, _) => Err(Error::GraphError(format!("graph has no {kind} node"))),
            (Some(first), Some(second)) => Err(Error::GraphError(format!(
                "graph has more than one {kind} node ({first} and {second})"
            ))),
        }
    }
}
