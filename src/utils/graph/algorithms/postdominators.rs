//! Postdominator tree computation using the Cooper-Harvey-Kennedy iterative algorithm.
//!
//! # Theory
//!
//! A node `p` **postdominates** a node `n` if every path from `n` to the exit node
//! passes through `p`. The **immediate postdominator** of `n` (ipdom(n)) is the
//! closest strict postdominator. Making each node's ipdom its parent yields a tree
//! rooted at the exit node; by convention the exit is its own immediate postdominator.
//!
//! # Algorithm
//!
//! Cooper, Harvey & Kennedy, "A Simple, Fast Dominance Algorithm", applied to the
//! reversed graph:
//!
//! 1. Number the nodes by a postorder DFS of the reversed graph started at the exit.
//!    The exit finishes last and receives the highest number; every postdominator of a
//!    node has a higher number than the node itself.
//! 2. Seed `ipdom(exit) = exit`.
//! 3. Sweep the remaining numbered nodes by decreasing number until a sweep changes
//!    nothing. A node's new estimate is the intersection of the current estimates of
//!    all its successors that already have one. Intersecting walks the finger with the
//!    smaller number up the (possibly stale) estimates until both fingers meet.
//!
//! Nodes from which the exit can not be reached are never numbered and have no
//! immediate postdominator.
//!
//! The worst case is quadratic, but structured control flow converges in two or three
//! sweeps.

use std::cmp::Ordering;

use rustc_hash::FxHashSet;

use crate::{
    utils::graph::{algorithms::postorder, ExitGraph, NodeId, Reversed},
    Result,
};

/// Result of postdominator computation.
///
/// # Examples
///
/// ```rust
/// use pdgslice::cfg::{CfgBuilder, Node};
/// use pdgslice::utils::graph::algorithms::compute_postdominators;
///
/// // start -> cond -> (then | else) -> end
/// let mut builder = CfgBuilder::new();
/// let start = builder.add_node(Node::start());
/// let cond = builder.add_node(Node::statement(1, 1, 1, 10));
/// let then = builder.add_node(Node::statement(2, 5, 2, 12));
/// let other = builder.add_node(Node::statement(4, 5, 4, 12));
/// let end = builder.add_node(Node::end());
/// builder.add_edge(start, cond);
/// builder.add_edge(cond, then);
/// builder.add_edge(cond, other);
/// builder.add_edge(then, end);
/// builder.add_edge(other, end);
/// let cfg = builder.build()?;
///
/// let tree = compute_postdominators(&cfg)?;
/// assert_eq!(tree.immediate_postdominator(start), Some(cond));
/// assert_eq!(tree.immediate_postdominator(cond), Some(end));
/// assert!(!tree.postdominates(then, cond));
/// # Ok::<(), pdgslice::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDominatorTree {
    /// The exit (root) node of the tree
    exit: NodeId,
    /// Immediate postdominator for each node (indexed by node ID), `None` if the node
    /// can not reach the exit. The exit maps to itself.
    ipdom: Vec<Option<NodeId>>,
    /// Number of sweeps the fixed point needed, including the final unchanged one
    passes: usize,
}

impl PostDominatorTree {
    /// Returns the exit (root) node of the tree.
    #[inline]
    #[must_use]
    pub fn exit(&self) -> NodeId {
        self.exit
    }

    /// Returns the immediate postdominator of a node.
    ///
    /// The exit node is its own immediate postdominator. Returns `None` for nodes that
    /// can not reach the exit and for out-of-range handles.
    #[inline]
    #[must_use]
    pub fn immediate_postdominator(&self, node: NodeId) -> Option<NodeId> {
        self.ipdom.get(node.index()).copied().flatten()
    }

    /// Returns `true` if the node is part of the tree, i.e. it can reach the exit.
    #[inline]
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.immediate_postdominator(node).is_some()
    }

    /// Checks if node `a` postdominates node `b`.
    ///
    /// A node postdominates itself. The exit postdominates every node in the tree.
    ///
    /// # Complexity
    ///
    /// O(depth) where depth is the depth of `b` in the tree.
    #[must_use]
    pub fn postdominates(&self, a: NodeId, b: NodeId) -> bool {
        self.postdominators(b).any(|p| p == a)
    }

    /// Checks if node `a` strictly postdominates node `b` (`a` postdominates `b` and `a != b`).
    #[inline]
    #[must_use]
    pub fn strictly_postdominates(&self, a: NodeId, b: NodeId) -> bool {
        a != b && self.postdominates(a, b)
    }

    /// Returns an iterator over the postdominator chain of a node, from the node itself
    /// up to (and including) the exit node.
    ///
    /// A node outside the tree yields only itself.
    pub fn postdominators(&self, node: NodeId) -> PostDominatorIterator<'_> {
        PostDominatorIterator {
            tree: self,
            current: Some(node),
        }
    }

    /// Returns the postdominator chain of a node as a set.
    #[must_use]
    pub fn path_to_exit(&self, node: NodeId) -> FxHashSet<NodeId> {
        self.postdominators(node).collect()
    }

    /// Returns the number of node slots in the tree (the node count of the graph).
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.ipdom.len()
    }

    /// Returns the number of sweeps the fixed point performed.
    #[inline]
    #[must_use]
    pub fn passes(&self) -> usize {
        self.passes
    }
}

/// Iterator over the postdominators of a node, from the node up to the exit.
pub struct PostDominatorIterator<'a> {
    tree: &'a PostDominatorTree,
    current: Option<NodeId>,
}

impl Iterator for PostDominatorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = match self.tree.immediate_postdominator(current) {
            Some(next) if next != current => Some(next),
            _ => None,
        };
        Some(current)
    }
}

/// Computes the postdominator tree of a graph with a designated exit node.
///
/// # Errors
///
/// Returns [`crate::Error::InvariantViolated`] if the exit node is not part of the
/// graph, or if a node that reaches the exit ends up without any successor carrying
/// a postdominator estimate. Neither can happen when successors and predecessors of
/// the graph are exact inverses.
pub fn compute_postdominators<G>(graph: &G) -> Result<PostDominatorTree>
where
    G: ExitGraph,
{
    const UNNUMBERED: usize = usize::MAX;

    let exit = graph.exit();
    let node_count = graph.node_count();
    if exit.index() >= node_count {
        return Err(invariant_error!(
            "exit node {} is not part of the graph ({} nodes)",
            exit,
            node_count
        ));
    }

    // Exit is the last element and therefore carries the highest number
    let order = postorder(&Reversed(graph), exit);
    let mut number = vec![UNNUMBERED; node_count];
    for (index, node) in order.iter().enumerate() {
        number[node.index()] = index;
    }
    let exit_number = order.len() - 1;

    let mut ipdom: Vec<Option<usize>> = vec![None; order.len()];
    ipdom[exit_number] = Some(exit_number);

    let mut passes = 0;
    let mut changed = true;
    while changed {
        changed = false;
        passes += 1;

        for current in (0..exit_number).rev() {
            let node = order[current];

            let mut estimate: Option<usize> = None;
            for successor in graph.successors(node) {
                let successor_number = number[successor.index()];
                if successor_number == UNNUMBERED || ipdom[successor_number].is_none() {
                    continue;
                }
                estimate = Some(match estimate {
                    None => successor_number,
                    Some(other) => intersect(&ipdom, other, successor_number)?,
                });
            }

            let Some(estimate) = estimate else {
                return Err(invariant_error!(
                    "node {} reaches the exit but none of its successors has a postdominator estimate",
                    node
                ));
            };

            if ipdom[current] != Some(estimate) {
                ipdom[current] = Some(estimate);
                changed = true;
            }
        }
    }

    log::trace!(
        "postdominators converged after {passes} passes over {} of {node_count} nodes",
        order.len()
    );

    let mut result = vec![None; node_count];
    for (current, estimate) in ipdom.iter().enumerate() {
        if let Some(estimate) = estimate {
            result[order[current].index()] = Some(order[*estimate]);
        }
    }

    Ok(PostDominatorTree {
        exit,
        ipdom: result,
        passes,
    })
}

/// Walks two postorder numbers up the current estimates until they meet.
fn intersect(ipdom: &[Option<usize>], mut finger1: usize, mut finger2: usize) -> Result<usize> {
    loop {
        match finger1.cmp(&finger2) {
            Ordering::Less => {
                finger1 = ipdom[finger1].ok_or_else(|| {
                    invariant_error!("postorder number {} has no estimate", finger1)
                })?;
            }
            Ordering::Greater => {
                finger2 = ipdom[finger2].ok_or_else(|| {
                    invariant_error!("postorder number {} has no estimate", finger2)
                })?;
            }
            Ordering::Equal => return Ok(finger1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::graph::testing::AdjacencyGraph;

    fn n(index: usize) -> NodeId {
        NodeId::new(index)
    }

    #[test]
    fn test_postdominator_single_node() {
        let graph = AdjacencyGraph::new(1, &[]);
        let tree = compute_postdominators(&graph).unwrap();

        assert_eq!(tree.exit(), n(0));
        assert_eq!(tree.immediate_postdominator(n(0)), Some(n(0)));
        assert!(tree.postdominates(n(0), n(0)));
    }

    #[test]
    fn test_postdominator_linear_chain() {
        // 0 -> 1 -> 2
        let graph = AdjacencyGraph::new(3, &[(0, 1), (1, 2)]);
        let tree = compute_postdominators(&graph).unwrap();

        assert_eq!(tree.immediate_postdominator(n(0)), Some(n(1)));
        assert_eq!(tree.immediate_postdominator(n(1)), Some(n(2)));
        assert_eq!(tree.immediate_postdominator(n(2)), Some(n(2)));

        assert!(tree.postdominates(n(2), n(0)));
        assert!(tree.postdominates(n(1), n(0)));
        assert!(!tree.postdominates(n(0), n(1)));
    }

    #[test]
    fn test_postdominator_if_else() {
        //      0
        //     / \
        //    1   2
        //     \ /
        //      3
        let graph = AdjacencyGraph::new(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        let tree = compute_postdominators(&graph).unwrap();

        assert_eq!(tree.immediate_postdominator(n(0)), Some(n(3)));
        assert_eq!(tree.immediate_postdominator(n(1)), Some(n(3)));
        assert_eq!(tree.immediate_postdominator(n(2)), Some(n(3)));
        assert!(!tree.postdominates(n(1), n(0)));
        assert!(!tree.postdominates(n(2), n(0)));
    }

    #[test]
    fn test_postdominator_if_without_else() {
        // 0 -> 1 -> 2 -> 3, 1 -> 3 skips the then-branch
        let graph = AdjacencyGraph::new(4, &[(0, 1), (1, 2), (1, 3), (2, 3)]);
        let tree = compute_postdominators(&graph).unwrap();

        assert_eq!(tree.immediate_postdominator(n(0)), Some(n(1)));
        assert_eq!(tree.immediate_postdominator(n(1)), Some(n(3)));
        assert_eq!(tree.immediate_postdominator(n(2)), Some(n(3)));
    }

    #[test]
    fn test_postdominator_loop() {
        // 0 -> 1 (header) -> 2 (body) -> 1, 1 -> 3 (exit)
        let graph = AdjacencyGraph::new(4, &[(0, 1), (1, 2), (2, 1), (1, 3)]);
        let tree = compute_postdominators(&graph).unwrap();

        assert_eq!(tree.immediate_postdominator(n(0)), Some(n(1)));
        assert_eq!(tree.immediate_postdominator(n(1)), Some(n(3)));
        assert_eq!(tree.immediate_postdominator(n(2)), Some(n(1)));
    }

    #[test]
    fn test_postdominator_nested_if_in_loop() {
        // 0 -> 1; 1 -> 2 | 7; 2 -> 3 | 4; 3,4 -> 5 -> 6 -> 1; 7 -> 8
        let graph = AdjacencyGraph::new(
            9,
            &[
                (0, 1),
                (1, 2),
                (1, 7),
                (2, 3),
                (2, 4),
                (3, 5),
                (4, 5),
                (5, 6),
                (6, 1),
                (7, 8),
            ],
        );
        let tree = compute_postdominators(&graph).unwrap();

        let expected = [1, 7, 5, 5, 5, 6, 1, 8, 8];
        for (node, &ipdom) in expected.iter().enumerate() {
            assert_eq!(
                tree.immediate_postdominator(n(node)),
                Some(n(ipdom)),
                "ipdom of n{node}"
            );
        }
    }

    #[test]
    fn test_postdominator_unreachable_from_exit() {
        // 1 <-> 2 never reaches the exit 3
        let graph = AdjacencyGraph::new(4, &[(0, 1), (0, 3), (1, 2), (2, 1)]);
        let tree = compute_postdominators(&graph).unwrap();

        assert_eq!(tree.immediate_postdominator(n(0)), Some(n(3)));
        assert!(!tree.contains(n(1)));
        assert!(!tree.contains(n(2)));
        assert_eq!(tree.postdominators(n(1)).collect::<Vec<_>>(), vec![n(1)]);
    }

    #[test]
    fn test_postdominator_iterator() {
        let graph = AdjacencyGraph::new(4, &[(0, 1), (1, 2), (2, 3)]);
        let tree = compute_postdominators(&graph).unwrap();

        let chain: Vec<NodeId> = tree.postdominators(n(0)).collect();
        assert_eq!(chain, vec![n(0), n(1), n(2), n(3)]);

        let path = tree.path_to_exit(n(1));
        assert_eq!(path.len(), 3);
        assert!(path.contains(&n(1)) && path.contains(&n(2)) && path.contains(&n(3)));
    }

    #[test]
    fn test_strictly_postdominates() {
        let graph = AdjacencyGraph::new(3, &[(0, 1), (1, 2)]);
        let tree = compute_postdominators(&graph).unwrap();

        assert!(!tree.strictly_postdominates(n(1), n(1)));
        assert!(tree.strictly_postdominates(n(1), n(0)));
        assert!(tree.strictly_postdominates(n(2), n(0)));
    }

    #[test]
    fn test_postdominator_converges() {
        let graph = AdjacencyGraph::new(4, &[(0, 1), (1, 2), (2, 1), (1, 3)]);
        let tree = compute_postdominators(&graph).unwrap();
        assert!(tree.passes() >= 1);
        assert_eq!(tree.node_count(), 4);
    }

    #[test]
    fn test_postdominator_empty_graph_is_contract_violation() {
        let graph = AdjacencyGraph::new(0, &[]);
        let err = compute_postdominators(&graph).unwrap_err();
        assert!(matches!(err, crate::Error::InvariantViolated { .. }));
    }
}
