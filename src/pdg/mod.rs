//! Program dependence graphs and slicing.
//!
//! A [`ProgramDependenceGraph`] merges the control and data dependences of every
//! statement of a [`CompleteCfg`](crate::cfg::CompleteCfg) into one graph and answers
//! slice queries on it:
//!
//! - [`ProgramDependenceGraph::slice`] - Backward slice of a node
//! - [`ProgramDependenceGraph::slice_at`] - Backward slice of the statement at a source position
//! - [`ProgramDependenceGraph::forward_slice`] - Everything a node may influence
//!
//! [`build_all`] analyzes many functions in parallel.
//!
//! # Examples
//!
//! ```rust
//! use pdgslice::cfg::{CfgBuilder, Node};
//! use pdgslice::pdg::{PdgConfig, PositionTieBreak, ProgramDependenceGraph};
//! use pdgslice::analysis::LogObserver;
//!
//! // 1: if flag {
//! // 2:     x = 1
//! // 3: }
//! let mut builder = CfgBuilder::new();
//! let start = builder.add_node(Node::start());
//! let cond = builder.add_node(Node::statement(1, 1, 3, 1).with_references(["flag"]));
//! let assign = builder.add_node(Node::statement(2, 5, 2, 9).with_definitions(["x"]));
//! let end = builder.add_node(Node::end());
//! builder.add_edge(start, cond);
//! builder.add_edge(cond, assign);
//! builder.add_edge(cond, end);
//! builder.add_edge(assign, end);
//! let cfg = builder.build()?;
//!
//! let config = PdgConfig::new().with_position_tie_break(PositionTieBreak::Innermost);
//! let pdg = ProgramDependenceGraph::build_with(&cfg, config, &LogObserver)?;
//!
//! // Line 2 lies inside the `if` as well; the innermost statement wins
//! assert_eq!(pdg.node_at(2, 6), Some(assign));
//! assert!(pdg.slice(assign).contains(&cond));
//! # Ok::<(), pdgslice::Error>(())
//! ```

mod batch;
mod config;
mod edge;
mod graph;

pub use batch::{build_all, build_all_with};
pub use config::{PdgConfig, PositionTieBreak};
pub use edge::{DependenceKind, PdgEdge};
pub use graph::{ProgramDependenceGraph, SliceDirection};
