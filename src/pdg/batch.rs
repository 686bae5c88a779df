//! Parallel construction of independent PDGs.
//!
//! Every function is analyzed on its own, so a whole file or project is an
//! embarrassingly parallel workload. Construction of a single PDG stays sequential:
//! the postdominator fixed point depends on the previous pass.

use rayon::prelude::*;

use crate::{
    analysis::{NoopObserver, PhaseObserver},
    cfg::CompleteCfg,
    pdg::{PdgConfig, ProgramDependenceGraph},
    Result,
};

/// Builds the PDG of every CFG in parallel.
///
/// Results are returned in input order; a malformed CFG fails on its own without
/// affecting the others.
///
/// # Examples
///
/// ```rust
/// use pdgslice::cfg::{CfgBuilder, Node};
/// use pdgslice::pdg::{build_all, PdgConfig};
///
/// let cfgs = (0..4)
///     .map(|_| {
///         let mut builder = CfgBuilder::new();
///         let start = builder.add_node(Node::start());
///         let end = builder.add_node(Node::end());
///         builder.add_edge(start, end);
///         builder.build()
///     })
///     .collect::<Result<Vec<_>, _>>()?;
///
/// let pdgs = build_all(&cfgs, &PdgConfig::default());
/// assert_eq!(pdgs.len(), 4);
/// assert!(pdgs.iter().all(Result::is_ok));
/// # Ok::<(), pdgslice::Error>(())
/// ```
#[must_use]
pub fn build_all(
    cfgs: &[CompleteCfg],
    config: &PdgConfig,
) -> Vec<Result<ProgramDependenceGraph>> {
    build_all_with(cfgs, config, &NoopObserver)
}

/// Builds the PDG of every CFG in parallel, reporting the phases of each pipeline to
/// a shared `observer`.
///
/// Notifications of different pipelines interleave.
#[must_use]
pub fn build_all_with(
    cfgs: &[CompleteCfg],
    config: &PdgConfig,
    observer: &dyn PhaseObserver,
) -> Vec<Result<ProgramDependenceGraph>> {
    log::debug!("building {} PDGs", cfgs.len());

    cfgs.par_iter()
        .map(|cfg| ProgramDependenceGraph::build_with(cfg, config.clone(), observer))
        .collect()
}
