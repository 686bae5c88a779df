//! Edge-reversed view of a graph.

use crate::utils::graph::{GraphBase, NodeId, Predecessors, Successors};

/// A borrowed view of a graph with every edge reversed.
///
/// Successors of the view are the predecessors of the underlying graph and vice
/// versa. Running a forward algorithm (DFS, postorder) on `Reversed(&cfg)` from
/// the exit node walks the CFG backward, which is what postdominance needs.
///
/// # Examples
///
/// ```rust
/// use pdgslice::cfg::{CfgBuilder, Node};
/// use pdgslice::utils::graph::{algorithms::postorder, Reversed};
///
/// let mut builder = CfgBuilder::new();
/// let start = builder.add_node(Node::start());
/// let end = builder.add_node(Node::end());
/// builder.add_edge(start, end);
/// let cfg = builder.build()?;
///
/// // Backward postorder from the exit finishes the exit last.
/// let order = postorder(&Reversed(&cfg), cfg.end());
/// assert_eq!(order, vec![start, end]);
/// # Ok::<(), pdgslice::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Reversed<'g, G>(pub &'g G);

impl<G: GraphBase> GraphBase for Reversed<'_, G> {
    fn node_count(&self) -> usize {
        self.0.node_count()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        self.0.node_ids()
    }
}

impl<G: Predecessors> Successors for Reversed<'_, G> {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.0.predecessors(node)
    }
}

impl<G: Successors> Predecessors for Reversed<'_, G> {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.0.successors(node)
    }
}
