// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # pdgslice
//!
//! Program dependence graphs and program slicing over the control flow graph of a
//! single function.
//!
//! Given a complete control flow graph whose statements are annotated with source
//! ranges and the symbols they define and read, `pdgslice` answers the question
//! "which statements could affect this one?".
//!
//! ## Features
//!
//! - **Postdominator trees** - Cooper-Harvey-Kennedy iterative fixed point on the reversed graph
//! - **Control dependence** - Derived from the postdominator chains of each branch's successors
//! - **Data dependence** - Def-use reachability with kill on redefinition
//! - **Slicing** - Backward and forward slices by node or by source line and column
//! - **Batch analysis** - Independent functions analyzed in parallel
//!
//! ## Quick Start
//!
//! ```rust
//! use pdgslice::prelude::*;
//!
//! // 1: a = input()
//! // 2: b = 2
//! // 3: c = a * 3
//! let mut builder = CfgBuilder::new();
//! let start = builder.add_node(Node::start());
//! let a = builder.add_node(Node::statement(1, 1, 1, 12).with_definitions(["a"]));
//! let b = builder.add_node(Node::statement(2, 1, 2, 6).with_definitions(["b"]));
//! let c = builder.add_node(
//!     Node::statement(3, 1, 3, 10)
//!         .with_definitions(["c"])
//!         .with_references(["a"]),
//! );
//! let end = builder.add_node(Node::end());
//! builder.add_edge(start, a);
//! builder.add_edge(a, b);
//! builder.add_edge(b, c);
//! builder.add_edge(c, end);
//! let cfg = builder.build()?;
//!
//! let pdg = ProgramDependenceGraph::build(&cfg)?;
//! let slice = pdg.slice_at(3, 5).expect("statement on line 3");
//!
//! let ordering = NodeOrdering::by_source_position(&cfg);
//! assert_eq!(ordering.sort(slice)?, vec![a, c]);
//! # Ok::<(), pdgslice::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`cfg`] - The input model: statement nodes, the complete CFG and its builder
//! - [`utils::graph`] - Node handles, graph traits, traversals and the postdominator tree
//! - [`analysis`] - Control dependence, data dependence, node orderings, phase observers
//! - [`pdg`] - The program dependence graph, slicing queries and batch construction
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Error Handling
//!
//! Malformed builder input is an [`Error::GraphError`]. A CFG that breaks an assumption
//! of the analysis (for example, a node that reaches the end node without any successor
//! having a postdominator) is an [`Error::InvariantViolated`]. Queries that simply find
//! nothing, such as slicing at a position no statement covers, return `None`.
//!
//! ## Logging
//!
//! The library logs through the [`log`](https://docs.rs/log) facade: PDG construction
//! summaries at debug level, fixed-point statistics at trace level. Install any logger
//! in the binary to see them. Per-phase timings are available through
//! [`analysis::PhaseObserver`].

#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use pdgslice::prelude::*;
///
/// let mut builder = CfgBuilder::new();
/// let start = builder.add_node(Node::start());
/// let end = builder.add_node(Node::end());
/// builder.add_edge(start, end);
/// let pdg = ProgramDependenceGraph::build(&builder.build()?)?;
/// assert_eq!(pdg.node_count(), 1);
/// # Ok::<(), pdgslice::Error>(())
/// ```
pub mod prelude;

pub mod analysis;
pub mod cfg;
pub mod pdg;
pub mod utils;

/// `pdgslice` Result type
///
/// A type alias for `std::result::Result<T, Error>` used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// `pdgslice` Error type
///
/// Separates contract violations of the input graph from malformed builder input.
pub use error::Error;
