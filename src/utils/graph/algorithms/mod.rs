//! Graph algorithms for program analysis.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`dfs`] - Depth-first search traversal
//! - [`postorder`] - Postorder traversal
//!
//! ## Postdominator Analysis
//!
//! - [`compute_postdominators`] - Immediate postdominators via the Cooper-Harvey-Kennedy fixed point
//! - [`PostDominatorTree`] - Result of postdominator computation
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | DFS | O(V + E) | Reachability, CFG validation |
//! | Postorder | O(V + E) | Numbering for iterative fixed points |
//! | Postdominators | O(V²) worst case, near-linear on structured code | Control dependence |
//!
//! # Examples
//!
//! ```rust
//! use pdgslice::cfg::{CfgBuilder, Node};
//! use pdgslice::utils::graph::algorithms;
//!
//! let mut builder = CfgBuilder::new();
//! let start = builder.add_node(Node::start());
//! let a = builder.add_node(Node::statement(1, 1, 1, 5));
//! let end = builder.add_node(Node::end());
//! builder.add_edge(start, a);
//! builder.add_edge(a, end);
//! let cfg = builder.build()?;
//!
//! let tree = algorithms::compute_postdominators(&cfg)?;
//! assert_eq!(tree.immediate_postdominator(start), Some(a));
//! assert_eq!(tree.immediate_postdominator(a), Some(end));
//! # Ok::<(), pdgslice::Error>(())
//! ```

mod postdominators;
mod traversal;

pub use postdominators::{compute_postdominators, PostDominatorIterator, PostDominatorTree};
pub use traversal::{dfs, postorder, DfsIterator};
