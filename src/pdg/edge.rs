use strum::Display;

use crate::utils::graph::NodeId;

/// The kind of a dependence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum DependenceKind {
    /// The target may read a value the source defines
    Data,
    /// The source decides whether the target executes
    Control,
}

/// A dependence edge endpoint.
///
/// In the forward adjacency of a node the wrapped handle is a dependent; in the
/// reverse adjacency it is the node depended upon. A data and a control edge between
/// the same pair of nodes are distinct values, so both survive in an edge set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PdgEdge {
    /// Data dependence
    Data(NodeId),
    /// Control dependence
    Control(NodeId),
}

impl PdgEdge {
    /// Returns the node on the other side of the edge.
    #[must_use]
    pub const fn node(self) -> NodeId {
        match self {
            PdgEdge::Data(node) | PdgEdge::Control(node) => node,
        }
    }

    /// Returns the kind of dependence.
    #[must_use]
    pub const fn kind(self) -> DependenceKind {
        match self {
            PdgEdge::Data(_) => DependenceKind::Data,
            PdgEdge::Control(_) => DependenceKind::Control,
        }
    }

    /// Returns `true` for a data dependence.
    #[must_use]
    pub const fn is_data(self) -> bool {
        matches!(self, PdgEdge::Data(_))
    }

    /// Returns `true` for a control dependence.
    #[must_use]
    pub const fn is_control(self) -> bool {
        matches!(self, PdgEdge::Control(_))
    }
}
