//! Statement nodes and the symbols they define and read.

use std::{borrow::Borrow, fmt, sync::Arc};

use rustc_hash::FxHashSet;
use strum::{Display, EnumString};

use crate::cfg::{SourceLocation, SourceRange};

/// Role of a node within its control flow graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum NodeKind {
    /// The unique synthetic entry node
    Start,
    /// The unique synthetic exit node, root of the postdominator tree
    End,
    /// Any real statement
    Other,
}

/// A symbolic identifier a statement may define or read.
///
/// Symbols are exact: two symbols alias if and only if their names are equal. The
/// name is typically a resolver-provided unique symbol reference rather than the
/// plain variable spelling.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(Arc<str>);

impl Symbol {
    /// Creates a symbol from its name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Symbol(Arc::from(name))
    }

    /// Returns the symbol name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Symbol::new(name)
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Symbol(Arc::from(name))
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single statement of the analyzed function.
///
/// Nodes carry no identity of their own; the [`NodeId`](crate::utils::graph::NodeId)
/// handed out by [`CfgBuilder::add_node`](crate::cfg::CfgBuilder::add_node) is what
/// every analysis uses to refer to them.
///
/// # Examples
///
/// ```rust
/// use pdgslice::cfg::{Node, NodeKind};
///
/// // x = x + y
/// let node = Node::statement(3, 5, 3, 14)
///     .with_definitions(["x"])
///     .with_references(["x", "y"])
///     .with_text("x = x + y");
///
/// assert_eq!(node.kind(), NodeKind::Other);
/// assert!(node.defines("x"));
/// assert!(node.reads("y"));
/// assert!(!node.defines("y"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    kind: NodeKind,
    range: SourceRange,
    definitions: FxHashSet<Symbol>,
    references: FxHashSet<Symbol>,
    text: Option<String>,
}

impl Node {
    /// Creates a node without definitions or references.
    #[must_use]
    pub fn new(kind: NodeKind, range: SourceRange) -> Self {
        Self {
            kind,
            range,
            definitions: FxHashSet::default(),
            references: FxHashSet::default(),
            text: None,
        }
    }

    /// Creates the synthetic start node.
    #[must_use]
    pub fn start() -> Self {
        Self::new(NodeKind::Start, SourceRange::default())
    }

    /// Creates the synthetic end node.
    #[must_use]
    pub fn end() -> Self {
        Self::new(NodeKind::End, SourceRange::default())
    }

    /// Creates a statement node covering the given source coordinates.
    #[must_use]
    pub fn statement(
        start_line: usize,
        start_column: usize,
        end_line: usize,
        end_column: usize,
    ) -> Self {
        Self::new(
            NodeKind::Other,
            SourceRange::new(
                SourceLocation::new(start_line, start_column),
                SourceLocation::new(end_line, end_column),
            ),
        )
    }

    /// Adds symbols this node may assign.
    #[must_use]
    pub fn with_definitions<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        self.definitions.extend(symbols.into_iter().map(Into::into));
        self
    }

    /// Adds symbols this node may read.
    #[must_use]
    pub fn with_references<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        self.references.extend(symbols.into_iter().map(Into::into));
        self
    }

    /// Attaches the statement's source text, used for human-readable listings.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Returns the node kind.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Returns the source range covered by this node.
    #[must_use]
    pub fn range(&self) -> &SourceRange {
        &self.range
    }

    /// Returns the symbols this node may assign.
    #[must_use]
    pub fn definitions(&self) -> &FxHashSet<Symbol> {
        &self.definitions
    }

    /// Returns the symbols this node may read.
    #[must_use]
    pub fn references(&self) -> &FxHashSet<Symbol> {
        &self.references
    }

    /// Returns the statement source text, if the producer supplied it.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Returns `true` if this node may assign `symbol`.
    #[must_use]
    pub fn defines(&self, symbol: &str) -> bool {
        self.definitions.contains(symbol)
    }

    /// Returns `true` if this node may read `symbol`.
    #[must_use]
    pub fn reads(&self, symbol: &str) -> bool {
        self.references.contains(symbol)
    }

    /// Returns `true` for the synthetic start node.
    #[must_use]
    pub fn is_start(&self) -> bool {
        self.kind == NodeKind::Start
    }

    /// Returns `true` for the synthetic end node.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.kind == NodeKind::End
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NodeKind::Start => f.write_str("START"),
            NodeKind::End => f.write_str("END"),
            NodeKind::Other => match &self.text {
                Some(text) => f.write_str(text),
                None => write!(f, "<{}>", self.range),
            },
        }
    }
}
