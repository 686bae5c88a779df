//! Total orders over node handles.
//!
//! Node handles carry no meaningful order of their own across graph producers. A
//! [`NodeOrdering`] fixes one from an explicit sequence so that node sets, slices in
//! particular, can be sorted and listed deterministically.

use std::cmp::Ordering;

use rustc_hash::FxHashMap;

use crate::{
    cfg::CompleteCfg,
    utils::graph::NodeId,
    Result,
};

/// Bidirectional mapping between an explicit node sequence and dense indices `0..n`.
///
/// Asking for a node that is not part of the sequence, or for an index past its end,
/// is a contract violation reported as [`crate::Error::InvariantViolated`].
///
/// # Examples
///
/// ```rust
/// use pdgslice::analysis::NodeOrdering;
/// use pdgslice::utils::graph::NodeId;
///
/// let (a, b, c) = (NodeId::new(4), NodeId::new(0), NodeId::new(2));
/// let ordering = NodeOrdering::new(vec![a, b, c])?;
///
/// assert_eq!(ordering.index(b)?, 1);
/// assert_eq!(ordering.node(2)?, c);
/// assert!(ordering.are_in_increasing_order(a, c)?);
/// assert_eq!(ordering.sort([c, a])?, vec![a, c]);
/// assert!(ordering.index(NodeId::new(9)).is_err());
/// # Ok::<(), pdgslice::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeOrdering {
    nodes: Vec<NodeId>,
    indices: FxHashMap<NodeId, usize>,
}

impl NodeOrdering {
    /// Creates an ordering that follows `nodes`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvariantViolated`] if a node appears more than once.
    pub fn new(nodes: Vec<NodeId>) -> Result<Self> {
        let mut indices = FxHashMap::default();
        indices.reserve(nodes.len());

        for (index, &node) in nodes.iter().enumerate() {
            if let Some(previous) = indices.insert(node, index) {
                return Err(invariant_error!(
                    "node {} appears twice in ordering (positions {} and {})",
                    node,
                    previous,
                    index
                ));
            }
        }

        Ok(Self { nodes, indices })
    }

    /// Orders all nodes of `cfg` by their position in the source.
    ///
    /// The designated start comes first and the designated end last. Statements follow by range start, then range end,
    /// with the handle breaking remaining ties.
    #[must_use]
    pub fn by_source_position(cfg: &CompleteCfg) -> Self {
        let mut nodes: Vec<NodeId> = cfg.nodes().map(|(id, _)| id).collect();
        nodes.sort_by_key(|&id| {
            let rank = if id == cfg.start() {
                0
            } else if id == cfg.end() {
                2
            } else {
                1
            };
            let range = cfg.node(id).map(|n| *n.range()).unwrap_or_default();
            (rank, range.start, range.end, id)
        });

        let indices = nodes
            .iter()
            .enumerate()
            .map(|(index, &node)| (node, index))
            .collect();
        Self { nodes, indices }
    }

    /// Returns the position of `node` in the ordering.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvariantViolated`] if `node` is not part of the ordering.
    pub fn index(&self, node: NodeId) -> Result<usize> {
        self.indices
            .get(&node)
            .copied()
            .ok_or_else(|| invariant_error!("no index for node {}", node))
    }

    /// Returns the node at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvariantViolated`] if `index` is out of range.
    pub fn node(&self, index: usize) -> Result<NodeId> {
        self.nodes.get(index).copied().ok_or_else(|| {
            invariant_error!(
                "index {} out of range for ordering of {} nodes",
                index,
                self.nodes.len()
            )
        })
    }

    /// Comparator: returns `true` if `lhs` comes strictly before `rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvariantViolated`] if either node is not part of the
    /// ordering.
    pub fn are_in_increasing_order(&self, lhs: NodeId, rhs: NodeId) -> Result<bool> {
        Ok(self.compare(lhs, rhs)? == Ordering::Less)
    }

    /// Compares two nodes by their position in the ordering.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvariantViolated`] if either node is not part of the
    /// ordering.
    pub fn compare(&self, lhs: NodeId, rhs: NodeId) -> Result<Ordering> {
        Ok(self.index(lhs)?.cmp(&self.index(rhs)?))
    }

    /// Returns the given nodes sorted by this ordering.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvariantViolated`] if any node is not part of the
    /// ordering.
    pub fn sort(&self, nodes: impl IntoIterator<Item = NodeId>) -> Result<Vec<NodeId>> {
        let mut keyed = nodes
            .into_iter()
            .map(|node| Ok((self.index(node)?, node)))
            .collect::<Result<Vec<_>>>()?;
        keyed.sort_unstable();
        Ok(keyed.into_iter().map(|(_, node)| node).collect())
    }

    /// Returns the node sequence.
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Returns the number of nodes in the ordering.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the ordering is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Lists the nodes one per line: `START`, `END`, or the statement text.
    ///
    /// Statements without text are listed by their source range.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvariantViolated`] if the ordering contains a node that
    /// does not belong to `cfg`.
    pub fn describe(&self, cfg: &CompleteCfg) -> Result<String> {
        let mut listing = String::new();
        for &id in &self.nodes {
            let node = cfg
                .node(id)
                .ok_or_else(|| invariant_error!("node {} is not part of the graph", id))?;
            listing.push_str(&node.to_string());
            listing.push('\n');
        }
        Ok(listing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cfg::{CfgBuilder, Node},
        Error,
    };

    fn ids(raw: &[usize]) -> Vec<NodeId> {
        raw.iter().copied().map(NodeId::new).collect()
    }

    #[test]
    fn test_index_and_node_are_inverse() {
        let ordering = NodeOrdering::new(ids(&[3, 1, 4, 0])).unwrap();
        for index in 0..ordering.len() {
            let node = ordering.node(index).unwrap();
            assert_eq!(ordering.index(node).unwrap(), index);
        }
        assert_eq!(ordering.nodes(), ids(&[3, 1, 4, 0]).as_slice());
    }

    #[test]
    fn test_missing_node_is_invariant_violation() {
        let ordering = NodeOrdering::new(ids(&[0, 1])).unwrap();
        let err = ordering.index(NodeId::new(7)).unwrap_err();
        assert!(matches!(err, Error::InvariantViolated { .. }));
        assert!(err.to_string().contains("no index for node n7"));

        assert!(ordering.node(2).is_err());
        assert!(ordering
            .are_in_increasing_order(NodeId::new(0), NodeId::new(7))
            .is_err());
        assert!(ordering.sort(ids(&[1, 7])).is_err());
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = NodeOrdering::new(ids(&[0, 1, 0])).unwrap_err();
        assert!(err.to_string().contains("appears twice"));
    }

    #[test]
    fn test_comparator() {
        let ordering = NodeOrdering::new(ids(&[2, 0, 1])).unwrap();
        let (two, zero) = (NodeId::new(2), NodeId::new(0));
        assert!(ordering.are_in_increasing_order(two, zero).unwrap());
        assert!(!ordering.are_in_increasing_order(zero, two).unwrap());
        assert!(!ordering.are_in_increasing_order(zero, zero).unwrap());
        assert_eq!(ordering.compare(zero, two).unwrap(), Ordering::Greater);
    }

    #[test]
    fn test_empty() {
        let ordering = NodeOrdering::default();
        assert!(ordering.is_empty());
        assert_eq!(ordering.sort([]).unwrap(), Vec::<NodeId>::new());
    }

    #[test]
    fn test_by_source_position_and_describe() {
        // Nodes added out of source order
        let mut builder = CfgBuilder::new();
        let end = builder.add_node(Node::end());
        let second = builder.add_node(Node::statement(2, 1, 2, 6).with_text("y = x"));
        let start = builder.add_node(Node::start());
        let first = builder.add_node(Node::statement(1, 1, 1, 6).with_text("x = 1"));
        let third = builder.add_node(Node::statement(3, 1, 3, 9));
        builder.add_edge(start, first);
        builder.add_edge(first, second);
        builder.add_edge(second, third);
        builder.add_edge(third, end);
        let cfg = builder.build().unwrap();

        let ordering = NodeOrdering::by_source_position(&cfg);
        assert_eq!(ordering.nodes(), &[start, first, second, third, end]);
        assert_eq!(
            ordering.describe(&cfg).unwrap(),
            "START\nx = 1\ny = x\n<3:1-3:9>\nEND\n"
        );
        assert_eq!(ordering.sort([end, second, start]).unwrap(), vec![start, second, end]);
    }

    #[test]
    fn test_by_source_position_follows_designated_terminals() {
        // Designated start and end are plain statements placed mid-source
        let mut builder = CfgBuilder::new();
        let early = builder.add_node(Node::statement(1, 1, 1, 4));
        let entry = builder.add_node(Node::statement(5, 1, 5, 4));
        let exit = builder.add_node(Node::statement(2, 1, 2, 4));
        let late = builder.add_node(Node::statement(9, 1, 9, 4));
        builder.add_edge(entry, early);
        builder.add_edge(early, late);
        builder.add_edge(late, exit);
        builder.set_start(entry);
        builder.set_end(exit);
        let cfg = builder.build().unwrap();

        let ordering = NodeOrdering::by_source_position(&cfg);
        assert_eq!(ordering.nodes(), &[entry, early, late, exit]);
    }

    #[test]
    fn test_describe_foreign_node() {
        let mut builder = CfgBuilder::new();
        let start = builder.add_node(Node::start());
        let end = builder.add_node(Node::end());
        builder.add_edge(start, end);
        let cfg = builder.build().unwrap();

        let ordering = NodeOrdering::new(ids(&[0, 5])).unwrap();
        assert!(ordering.describe(&cfg).is_err());
    }
}
