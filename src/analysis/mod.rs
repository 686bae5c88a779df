//! Dependence analyses over a [`CompleteCfg`](crate::cfg::CompleteCfg).
//!
//! This module provides the per-node building blocks of the program dependence graph.
//! It builds upon the generic graph infrastructure in [`crate::utils::graph`], where
//! the postdominator tree lives.
//!
//! # Architecture
//!
//! - [`control`] - Control dependents of a branch, from the postdominator tree
//! - [`data`] - Data dependents of a definition, by reachability with kill semantics
//! - [`ordering`] - Deterministic total orders over node handles
//! - [`observer`] - Phase boundary hooks for profiling PDG construction
//!
//! [`ProgramDependenceGraph`](crate::pdg::ProgramDependenceGraph) runs these analyses
//! for every node; they are exposed for callers that need a single node's dependents.
//!
//! # Usage
//!
//! ```rust
//! use pdgslice::analysis::{control_dependents, data_dependents};
//! use pdgslice::cfg::{CfgBuilder, Node};
//! use pdgslice::utils::graph::algorithms::compute_postdominators;
//!
//! // x = read(); if x { y = x }
//! let mut builder = CfgBuilder::new();
//! let start = builder.add_node(Node::start());
//! let def = builder.add_node(Node::statement(1, 1, 1, 11).with_definitions(["x"]));
//! let cond = builder.add_node(Node::statement(2, 1, 2, 5).with_references(["x"]));
//! let then = builder.add_node(
//!     Node::statement(2, 8, 2, 13)
//!         .with_definitions(["y"])
//!         .with_references(["x"]),
//! );
//! let end = builder.add_node(Node::end());
//! builder.add_edge(start, def);
//! builder.add_edge(def, cond);
//! builder.add_edge(cond, then);
//! builder.add_edge(cond, end);
//! builder.add_edge(then, end);
//! let cfg = builder.build()?;
//!
//! let tree = compute_postdominators(&cfg)?;
//! assert!(control_dependents(cond, &cfg, &tree).contains(&then));
//! assert!(data_dependents(def, &cfg).contains(&then));
//! # Ok::<(), pdgslice::Error>(())
//! ```

pub mod control;
pub mod data;
pub mod observer;
pub mod ordering;

pub use control::control_dependents;
pub use data::data_dependents;
pub use observer::{LogObserver, NoopObserver, Phase, PhaseObserver};
pub use ordering::NodeOrdering;
