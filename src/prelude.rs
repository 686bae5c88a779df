//! # pdgslice Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the pdgslice library. Import this module to get quick access to everything needed
//! to build a CFG, turn it into a program dependence graph and slice it.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all pdgslice operations
pub use crate::Error;

/// The result type used throughout pdgslice
pub use crate::Result;

// ================================================================================================
// Control Flow Graph Input
// ================================================================================================

/// Statement nodes and their kinds
pub use crate::cfg::{Node, NodeKind, Symbol};

/// Source positions for slicing by line and column
pub use crate::cfg::{SourceLocation, SourceRange};

/// Building and holding a complete control flow graph
pub use crate::cfg::{CfgBuilder, CompleteCfg};

// ================================================================================================
// Graph Infrastructure
// ================================================================================================

/// Node handle shared by every structure derived from a CFG
pub use crate::utils::graph::NodeId;

/// Graph traits the algorithms are written against
pub use crate::utils::graph::{ExitGraph, GraphBase, Predecessors, RootedGraph, Successors};

/// Postdominator analysis
pub use crate::utils::graph::algorithms::{compute_postdominators, PostDominatorTree};

// ================================================================================================
// Dependence Analysis
// ================================================================================================

/// Per-node dependence derivation
pub use crate::analysis::{control_dependents, data_dependents};

/// Deterministic node orders
pub use crate::analysis::NodeOrdering;

/// Phase boundary hooks
pub use crate::analysis::{LogObserver, NoopObserver, Phase, PhaseObserver};

// ================================================================================================
// Program Dependence Graph and Slicing
// ================================================================================================

/// The dependence graph and its edges
pub use crate::pdg::{DependenceKind, PdgEdge, ProgramDependenceGraph, SliceDirection};

/// Construction options
pub use crate::pdg::{PdgConfig, PositionTieBreak};

/// Parallel construction for many functions
pub use crate::pdg::{build_all, build_all_with};
