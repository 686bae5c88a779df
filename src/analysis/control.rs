//! Control dependence derived from the postdominator tree.
//!
//! A node `m` is control dependent on a branch `n` when `n` decides whether `m`
//! executes: `m` postdominates at least one successor of `n`, but not all of them.
//! Walking the postdominator chain of every successor up to the exit and keeping the
//! nodes that appear in some chains but not in all of them yields exactly that set.

use rustc_hash::FxHashSet;

use crate::utils::graph::{algorithms::PostDominatorTree, NodeId, Successors};

/// Returns the nodes that are control dependent on `node`.
///
/// The result is the union of the postdominator chains of the successors of `node`
/// minus their intersection. A successor that can not reach the exit contributes only
/// itself. Nodes with fewer than two successors never control anything.
///
/// A loop header can be control dependent on itself.
///
/// # Arguments
///
/// * `node` - The branch node
/// * `graph` - The control flow graph the tree was computed on
/// * `tree` - The postdominator tree of `graph`
///
/// # Examples
///
/// ```rust
/// use pdgslice::analysis::control_dependents;
/// use pdgslice::cfg::{CfgBuilder, Node};
/// use pdgslice::utils::graph::algorithms::compute_postdominators;
///
/// // if c { a } else { b }
/// let mut builder = CfgBuilder::new();
/// let start = builder.add_node(Node::start());
/// let c = builder.add_node(Node::statement(1, 1, 1, 5));
/// let a = builder.add_node(Node::statement(2, 5, 2, 10));
/// let b = builder.add_node(Node::statement(4, 5, 4, 10));
/// let end = builder.add_node(Node::end());
/// builder.add_edge(start, c);
/// builder.add_edge(c, a);
/// builder.add_edge(c, b);
/// builder.add_edge(a, end);
/// builder.add_edge(b, end);
/// let cfg = builder.build()?;
/// let tree = compute_postdominators(&cfg)?;
///
/// let controlled = control_dependents(c, &cfg, &tree);
/// assert_eq!(controlled.len(), 2);
/// assert!(controlled.contains(&a) && controlled.contains(&b));
/// assert!(control_dependents(start, &cfg, &tree).is_empty());
/// # Ok::<(), pdgslice::Error>(())
/// ```
#[must_use]
pub fn control_dependents<G>(
    node: NodeId,
    graph: &G,
    tree: &PostDominatorTree,
) -> FxHashSet<NodeId>
where
    G: Successors,
{
    let mut successors = graph.successors(node);
    let Some(first) = successors.next() else {
        return FxHashSet::default();
    };

    let mut all = tree.path_to_exit(first);
    let mut common = all.clone();
    for successor in successors {
        let chain = tree.path_to_exit(successor);
        common.retain(|candidate| chain.contains(candidate));
        all.extend(chain);
    }

    all.retain(|candidate| !common.contains(candidate));
    all
}
