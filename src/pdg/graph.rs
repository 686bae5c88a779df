//! The program dependence graph and its slicing queries.

use rustc_hash::FxHashSet;
use strum::Display;

use crate::{
    analysis::{
        control_dependents, data_dependents,
        observer::{observe, NoopObserver, Phase, PhaseObserver},
    },
    cfg::{CompleteCfg, NodeKind, SourceRange},
    pdg::{PdgConfig, PdgEdge, PositionTieBreak},
    utils::graph::{algorithms::compute_postdominators, NodeId},
    Result,
};

/// Direction of a slice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SliceDirection {
    /// Everything that may influence the criterion (dependencies, transitively)
    #[default]
    Backward,
    /// Everything the criterion may influence (dependents, transitively)
    Forward,
}

/// Program dependence graph of one function.
///
/// The nodes are the nodes of the CFG it was built from, minus the end node: nothing
/// depends on termination, so end never appears in the graph and no edge targets it.
/// For every remaining node the graph stores the [`PdgEdge`]s to its dependents and,
/// in reverse, to the nodes it depends on. Handles are shared with the CFG.
///
/// The graph is immutable once built; every query is a pure read.
///
/// # Examples
///
/// ```rust
/// use pdgslice::cfg::{CfgBuilder, Node};
/// use pdgslice::pdg::ProgramDependenceGraph;
///
/// // 1: x = 1
/// // 2: y = 2
/// // 3: z = x
/// let mut builder = CfgBuilder::new();
/// let start = builder.add_node(Node::start());
/// let x = builder.add_node(Node::statement(1, 1, 1, 5).with_definitions(["x"]));
/// let y = builder.add_node(Node::statement(2, 1, 2, 5).with_definitions(["y"]));
/// let z = builder.add_node(
///     Node::statement(3, 1, 3, 5)
///         .with_definitions(["z"])
///         .with_references(["x"]),
/// );
/// let end = builder.add_node(Node::end());
/// builder.add_edge(start, x);
/// builder.add_edge(x, y);
/// builder.add_edge(y, z);
/// builder.add_edge(z, end);
/// let cfg = builder.build()?;
///
/// let pdg = ProgramDependenceGraph::build(&cfg)?;
/// let slice = pdg.slice_at(3, 2).expect("line 3 holds a statement");
/// assert!(slice.contains(&x) && slice.contains(&z));
/// assert!(!slice.contains(&y));
/// assert!(pdg.slice_at(10, 1).is_none());
/// # Ok::<(), pdgslice::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ProgramDependenceGraph {
    /// Forward adjacency: dependents of each node, indexed by handle
    edges: Vec<FxHashSet<PdgEdge>>,
    /// Reverse adjacency: dependencies of each node, indexed by handle
    reverse_edges: Vec<FxHashSet<PdgEdge>>,
    /// Source ranges of statement nodes; `None` for start and end
    ranges: Vec<Option<SourceRange>>,
    start: NodeId,
    /// The CFG end node, excluded from the graph
    end: NodeId,
    config: PdgConfig,
}

impl ProgramDependenceGraph {
    /// Builds the PDG of `cfg` with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvariantViolated`] if the postdominator computation
    /// finds the CFG malformed.
    pub fn build(cfg: &CompleteCfg) -> Result<Self> {
        Self::build_with(cfg, PdgConfig::default(), &NoopObserver)
    }

    /// Builds the PDG of `cfg`, reporting phase boundaries to `observer`.
    ///
    /// The postdominator tree is computed first, then the control dependents and the
    /// data dependents of every node except end, and finally both are inserted as
    /// edges.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvariantViolated`] if the CFG is malformed, including
    /// reachability violations when [`PdgConfig::validate_input`] is set.
    pub fn build_with(
        cfg: &CompleteCfg,
        config: PdgConfig,
        observer: &dyn PhaseObserver,
    ) -> Result<Self> {
        if config.validate_input {
            cfg.validate()?;
        }

        let end = cfg.end();
        let members: Vec<NodeId> = cfg
            .nodes()
            .map(|(id, _)| id)
            .filter(|&id| id != end)
            .collect();

        let tree = observe(observer, Phase::Postdominators, || {
            compute_postdominators(cfg)
        })?;

        let control = observe(observer, Phase::ControlDependence, || {
            Ok(members
                .iter()
                .map(|&node| control_dependents(node, cfg, &tree))
                .collect::<Vec<_>>())
        })?;

        let data = observe(observer, Phase::DataDependence, || {
            Ok(members
                .iter()
                .map(|&node| data_dependents(node, cfg))
                .collect::<Vec<_>>())
        })?;

        let pdg = observe(observer, Phase::Assembly, || {
            let node_count = cfg.node_count();
            let mut edges = vec![FxHashSet::default(); node_count];
            let mut reverse_edges = vec![FxHashSet::default(); node_count];

            let dependents = members.iter().zip(control.iter().zip(&data));
            for (&node, (controlled, reads)) in dependents {
                for &dependent in controlled.iter().filter(|&&d| d != end) {
                    edges[node.index()].insert(PdgEdge::Control(dependent));
                    reverse_edges[dependent.index()].insert(PdgEdge::Control(node));
                }
                for &dependent in reads.iter().filter(|&&d| d != end) {
                    edges[node.index()].insert(PdgEdge::Data(dependent));
                    reverse_edges[dependent.index()].insert(PdgEdge::Data(node));
                }
            }

            let ranges = cfg
                .nodes()
                .map(|(id, node)| {
                    (id != end && node.kind() == NodeKind::Other).then(|| *node.range())
                })
                .collect();

            Ok(Self {
                edges,
                reverse_edges,
                ranges,
                start: cfg.start(),
                end,
                config,
            })
        })?;

        log::debug!(
            "built PDG with {} nodes and {} edges (postdominators converged in {} passes)",
            pdg.node_count(),
            pdg.edge_count(),
            tree.passes()
        );

        Ok(pdg)
    }

    /// Returns the backward slice of `criterion`: the criterion and every node it
    /// depends on, transitively, through data and control edges.
    ///
    /// A criterion that is not part of the graph yields an empty set.
    #[must_use]
    pub fn slice(&self, criterion: NodeId) -> FxHashSet<NodeId> {
        self.slice_directed(criterion, SliceDirection::Backward)
    }

    /// Returns the forward slice of `criterion`: the criterion and every node that
    /// depends on it, transitively.
    ///
    /// A criterion that is not part of the graph yields an empty set.
    #[must_use]
    pub fn forward_slice(&self, criterion: NodeId) -> FxHashSet<NodeId> {
        self.slice_directed(criterion, SliceDirection::Forward)
    }

    /// Returns the slice of `criterion` in the given direction.
    #[must_use]
    pub fn slice_directed(
        &self,
        criterion: NodeId,
        direction: SliceDirection,
    ) -> FxHashSet<NodeId> {
        let mut visited = FxHashSet::default();
        if !self.contains(criterion) {
            return visited;
        }

        let adjacency = match direction {
            SliceDirection::Backward => &self.reverse_edges,
            SliceDirection::Forward => &self.edges,
        };

        let mut worklist = vec![criterion];
        while let Some(current) = worklist.pop() {
            if !visited.insert(current) {
                continue;
            }
            if let Some(edges) = adjacency.get(current.index()) {
                worklist.extend(
                    edges
                        .iter()
                        .map(|edge| edge.node())
                        .filter(|next| !visited.contains(next)),
                );
            }
        }

        visited
    }

    /// Returns the backward slice of the statement at `line`/`column`.
    ///
    /// Returns `None` if no statement covers the position. Overlapping ranges are
    /// resolved with [`PdgConfig::position_tie_break`].
    #[must_use]
    pub fn slice_at(&self, line: usize, column: usize) -> Option<FxHashSet<NodeId>> {
        self.node_at(line, column).map(|node| self.slice(node))
    }

    /// Returns the statement whose source range contains `line`/`column`.
    ///
    /// Only statements that are part of the graph are considered. A statement
    /// designated as end is not, even though it carries a source range.
    #[must_use]
    pub fn node_at(&self, line: usize, column: usize) -> Option<NodeId> {
        let candidates = self
            .ranges
            .iter()
            .enumerate()
            .filter_map(|(index, range)| Some((NodeId::new(index), (*range)?)))
            .filter(|(_, range)| range.contains(line, column));

        let chosen = match self.config.position_tie_break {
            PositionTieBreak::First => candidates.min_by_key(|&(id, _)| id),
            PositionTieBreak::Innermost => candidates.min_by(|(a_id, a), (b_id, b)| {
                b.start
                    .cmp(&a.start)
                    .then_with(|| a.end.cmp(&b.end))
                    .then_with(|| a_id.cmp(b_id))
            }),
        };
        chosen.map(|(id, _)| id)
    }

    /// Returns an iterator over the nodes of the graph, by ascending handle.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.edges.len())
            .map(NodeId::new)
            .filter(move |&id| id != self.end)
    }

    /// Returns `true` if `node` is part of the graph.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.edges.len() && node != self.end
    }

    /// Returns the number of nodes, i.e. the CFG node count minus one.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.edges.len().saturating_sub(1)
    }

    /// Returns the number of edges, counting a data and a control edge between the same
    /// pair of nodes twice.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(FxHashSet::len).sum()
    }

    /// Returns the start node, copied from the CFG.
    #[must_use]
    pub fn start(&self) -> NodeId {
        self.start
    }

    /// Returns the edges to the dependents of `node`.
    pub fn dependents(&self, node: NodeId) -> impl Iterator<Item = PdgEdge> + '_ {
        self.edges.get(node.index()).into_iter().flatten().copied()
    }

    /// Returns the edges to the nodes `node` depends on.
    pub fn dependencies(&self, node: NodeId) -> impl Iterator<Item = PdgEdge> + '_ {
        self.reverse_edges
            .get(node.index())
            .into_iter()
            .flatten()
            .copied()
    }

    /// Returns the configuration the graph was built with.
    #[must_use]
    pub fn config(&self) -> &PdgConfig {
        &self.config
    }
}
