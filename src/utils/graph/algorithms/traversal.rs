//! Depth-first walks used by the CFG checks and the postdominator numbering.
//!
//! [`dfs`] is lazy and only answers reachability; [`postorder`] materializes the
//! finishing order because the postdominator fixed point needs all of it.

use crate::utils::graph::{NodeId, Successors};

/// Lazy pre-order walk returned by [`dfs`].
pub struct DfsIterator<'g, G: Successors> {
    graph: &'g G,
    pending: Vec<NodeId>,
    seen: Vec<bool>,
}

impl<G: Successors> Iterator for DfsIterator<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let node = self.pending.pop()?;
        let graph = self.graph;
        let mark = self.pending.len();
        for succ in graph.successors(node) {
            if !std::mem::replace(&mut self.seen[succ.index()], true) {
                self.pending.push(succ);
            }
        }
        // First successor on top of the stack
        self.pending[mark..].reverse();
        Some(node)
    }
}

/// Walks every node reachable from `start`, each exactly once.
///
/// An out-of-range `start` yields nothing.
pub fn dfs<G: Successors>(graph: &G, start: NodeId) -> DfsIterator<'_, G> {
    let mut seen = vec![false; graph.node_count()];
    let pending = match seen.get_mut(start.index()) {
        Some(slot) => {
            *slot = true;
            vec![start]
        }
        None => Vec::new(),
    };
    DfsIterator {
        graph,
        pending,
        seen,
    }
}

/// Returns the nodes reachable from `start` in depth-first finishing order.
///
/// `start` is always last. Run over [`Reversed`](crate::utils::graph::Reversed)
/// from the exit node, a node's postdominators always finish after it, which is
/// the numbering [`compute_postdominators`](super::compute_postdominators) relies on.
pub fn postorder<G: Successors>(graph: &G, start: NodeId) -> Vec<NodeId> {
    let count = graph.node_count();
    if start.index() >= count {
        return Vec::new();
    }

    let mut seen = vec![false; count];
    let mut finished = Vec::with_capacity(count);
    seen[start.index()] = true;
    let mut stack = vec![(start, graph.successors(start))];

    while let Some((_, successors)) = stack.last_mut() {
        match successors.find(|succ| !seen[succ.index()]) {
            Some(next) => {
                seen[next.index()] = true;
                stack.push((next, graph.successors(next)));
            }
            None => {
                if let Some((node, _)) = stack.pop() {
                    finished.push(node);
                }
            }
        }
    }

    finished
}

#[cfg(test)]
mod tests {
    use crate::utils::graph::{
        algorithms::traversal::{dfs, postorder},
        testing::AdjacencyGraph,
        NodeId, Reversed,
    };

    fn ids(raw: &[usize]) -> Vec<NodeId> {
        raw.iter().copied().map(NodeId::new).collect()
    }

    #[test]
    fn test_dfs_linear() {
        let graph = AdjacencyGraph::new(3, &[(0, 1), (1, 2)]);
        let order: Vec<NodeId> = dfs(&graph, NodeId::new(0)).collect();
        assert_eq!(order, ids(&[0, 1, 2]));
    }

    #[test]
    fn test_dfs_visits_each_node_once_in_cycle() {
        let graph = AdjacencyGraph::new(3, &[(0, 1), (1, 2), (2, 0), (1, 0)]);
        let order: Vec<NodeId> = dfs(&graph, NodeId::new(0)).collect();
        assert_eq!(order.len(), 3);
    }

    #[test]
    fn test_dfs_skips_unreachable() {
        let graph = AdjacencyGraph::new(4, &[(0, 1), (2, 3)]);
        let order: Vec<NodeId> = dfs(&graph, NodeId::new(0)).collect();
        assert_eq!(order, ids(&[0, 1]));
    }

    #[test]
    fn test_dfs_invalid_start() {
        let graph = AdjacencyGraph::new(2, &[(0, 1)]);
        assert_eq!(dfs(&graph, NodeId::new(9)).count(), 0);
    }

    #[test]
    fn test_postorder_diamond() {
        // 0 -> 1 -> 3, 0 -> 2 -> 3
        let graph = AdjacencyGraph::new(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        let order = postorder(&graph, NodeId::new(0));
        assert_eq!(order, ids(&[3, 1, 2, 0]));
    }

    #[test]
    fn test_postorder_reversed_from_exit_finishes_exit_last() {
        // if/else diamond with a loop back edge into the header
        let graph = AdjacencyGraph::new(5, &[(0, 1), (1, 2), (1, 3), (2, 1), (3, 4)]);
        let order = postorder(&Reversed(&graph), NodeId::new(4));

        assert_eq!(order.last(), Some(&NodeId::new(4)));
        assert_eq!(order.len(), 5);
    }

    #[test]
    fn test_postorder_invalid_start() {
        let graph = AdjacencyGraph::new(1, &[]);
        assert!(postorder(&graph, NodeId::new(3)).is_empty());
    }
}
