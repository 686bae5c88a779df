//! Data dependence by forward reachability with kill-on-redefinition.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::{cfg::CompleteCfg, utils::graph::NodeId};

/// Returns the nodes that may read a value defined by `node`.
///
/// For every symbol `node` defines, a breadth-first search starts at the successors of
/// `node`. A reached node that reads the symbol is a dependent. A reached node that
/// redefines the symbol ends the path: it is still a dependent if it also reads the
/// symbol (`x = x + 1`), but nothing behind it is reached through it. Every node is
/// expanded at most once per symbol, so cycles terminate; the cost is
/// O(|E| * definitions).
///
/// `node` itself is a dependent when the value can flow back to it around a loop.
///
/// # Examples
///
/// ```rust
/// use pdgslice::analysis::data_dependents;
/// use pdgslice::cfg::{CfgBuilder, Node};
///
/// // x = 1; x = 2; y = x
/// let mut builder = CfgBuilder::new();
/// let start = builder.add_node(Node::start());
/// let first = builder.add_node(Node::statement(1, 1, 1, 6).with_definitions(["x"]));
/// let second = builder.add_node(Node::statement(2, 1, 2, 6).with_definitions(["x"]));
/// let read = builder.add_node(
///     Node::statement(3, 1, 3, 6)
///         .with_definitions(["y"])
///         .with_references(["x"]),
/// );
/// let end = builder.add_node(Node::end());
/// builder.add_edge(start, first);
/// builder.add_edge(first, second);
/// builder.add_edge(second, read);
/// builder.add_edge(read, end);
/// let cfg = builder.build()?;
///
/// assert!(data_dependents(first, &cfg).is_empty());
/// assert!(data_dependents(second, &cfg).contains(&read));
/// # Ok::<(), pdgslice::Error>(())
/// ```
#[must_use]
pub fn data_dependents(node: NodeId, cfg: &CompleteCfg) -> FxHashSet<NodeId> {
    let mut dependents = FxHashSet::default();
    let Some(source) = cfg.node(node) else {
        return dependents;
    };

    for symbol in source.definitions() {
        collect_reached_uses(cfg, node, symbol.as_str(), &mut dependents);
    }
    dependents
}

fn collect_reached_uses(
    cfg: &CompleteCfg,
    from: NodeId,
    symbol: &str,
    dependents: &mut FxHashSet<NodeId>,
) {
    let mut visited = vec![false; cfg.node_count()];
    let mut queue = VecDeque::new();

    for &successor in cfg.successors(from) {
        if !visited[successor.index()] {
            visited[successor.index()] = true;
            queue.push_back(successor);
        }
    }

    while let Some(current) = queue.pop_front() {
        let Some(node) = cfg.node(current) else {
            continue;
        };

        if node.reads(symbol) {
            dependents.insert(current);
        }
        if node.defines(symbol) {
            continue;
        }

        for &successor in cfg.successors(current) {
            if !visited[successor.index()] {
                visited[successor.index()] = true;
                queue.push_back(successor);
            }
        }
    }
}
