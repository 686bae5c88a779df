//! Control flow graph input model.
//!
//! A [`CompleteCfg`] is the input to every analysis in this crate. It is built by a
//! front end (parser plus symbol resolver) through [`CfgBuilder`]; each [`Node`] is a
//! statement annotated with its source range and the [`Symbol`]s it may define and read.
//!
//! # Key Components
//!
//! - [`Node`] / [`NodeKind`] - Statements plus the synthetic start and end nodes
//! - [`Symbol`] - Resolver-provided symbol identity for def/use matching
//! - [`SourceLocation`] / [`SourceRange`] - Positions for slicing by line and column
//! - [`CfgBuilder`] - Incremental, validating construction
//! - [`CompleteCfg`] - Frozen graph with both edge directions

mod builder;
mod graph;
mod location;
mod node;

pub use builder::CfgBuilder;
pub use graph::CompleteCfg;
pub use location::{SourceLocation, SourceRange};
pub use node::{Node, NodeKind, Symbol};
