//! Node handle for statements of a control flow graph.
//!
//! This module provides the [`NodeId`] type, the stable identity of a statement
//! node. Every analysis keys its maps and sets on `NodeId` instead of hashing the
//! statement content, so results computed independently (postdominator tree,
//! dependence sets, PDG adjacency, orderings) agree on node identity by construction.

use std::fmt;

/// A strongly-typed handle for a statement node.
///
/// `NodeId` wraps a dense `usize` index. Handles are assigned once, sequentially
/// from 0, by [`CfgBuilder::add_node`](crate::cfg::CfgBuilder::add_node) and stay valid
/// for the lifetime of the resulting [`CompleteCfg`](crate::cfg::CompleteCfg) and of
/// every structure derived from it.
///
/// # Usage
///
/// - Reference nodes when adding CFG edges
/// - Look up node data ([`CompleteCfg::node`](crate::cfg::CompleteCfg::node))
/// - Index per-node analysis results stored in vectors
/// - Collect slices (`FxHashSet<NodeId>`)
///
/// # Examples
///
/// ```rust
/// use pdgslice::cfg::{CfgBuilder, Node};
///
/// let mut builder = CfgBuilder::new();
/// let start = builder.add_node(Node::start());
/// let end = builder.add_node(Node::end());
///
/// assert_ne!(start, end);
/// assert_eq!(start.index(), 0);
/// assert_eq!(end.index(), 1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a `NodeId` from a raw index.
    ///
    /// Intended for tests and for callers that mirror the builder's numbering;
    /// normal code obtains handles from [`CfgBuilder::add_node`](crate::cfg::CfgBuilder::add_node).
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw index, usable to index per-node vectors.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}
