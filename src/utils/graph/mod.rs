//! Generic graph infrastructure for the dependence analyses.
//!
//! This module holds the shared vocabulary every analysis speaks: node handles,
//! adjacency traits, and the graph algorithms (traversal, postdominators) that are
//! independent of what a node means.
//!
//! # Architecture
//!
//! - **Core Types**: [`NodeId`] is the stable handle of a statement node
//! - **Traits**: [`GraphBase`], [`Successors`], [`Predecessors`], [`RootedGraph`] and
//!   [`ExitGraph`] let algorithms run on any adjacency representation
//! - **Views**: [`Reversed`] flips every edge without copying the graph
//! - **Algorithms**: [`algorithms`] provides DFS, postorder and the iterative
//!   postdominator computation
//!
//! # Design Principles
//!
//! ## Strongly-Typed Identifiers
//!
//! Node identifiers use a newtype wrapper so node indices are never confused with
//! positions, lines or ordering indices.
//!
//! ## Immutable After Construction
//!
//! Graphs are built once and treated as immutable for analysis, so every derived
//! structure can hold plain `NodeId`s without lifetimes or locks.
//!
//! # Examples
//!
//! ```rust
//! use pdgslice::cfg::{CfgBuilder, Node};
//! use pdgslice::utils::graph::{algorithms, NodeId, RootedGraph};
//!
//! let mut builder = CfgBuilder::new();
//! let start = builder.add_node(Node::start());
//! let stmt = builder.add_node(Node::statement(1, 1, 1, 10));
//! let end = builder.add_node(Node::end());
//! builder.add_edge(start, stmt);
//! builder.add_edge(stmt, end);
//! let cfg = builder.build()?;
//!
//! let reachable: Vec<NodeId> = algorithms::dfs(&cfg, cfg.entry()).collect();
//! assert_eq!(reachable, vec![start, stmt, end]);
//! # Ok::<(), pdgslice::Error>(())
//! ```

mod node;
mod reversed;
mod traits;

pub mod algorithms;

// Re-export core types at module level
pub use node::NodeId;
pub use reversed::Reversed;
pub use traits::{ExitGraph, GraphBase, Predecessors, RootedGraph, Successors};
