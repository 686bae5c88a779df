//! Configuration for PDG construction and position queries.

use strum::{Display, EnumIter};

/// How [`ProgramDependenceGraph::node_at`](crate::pdg::ProgramDependenceGraph::node_at)
/// picks a node when several statement ranges contain the queried position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum PositionTieBreak {
    /// The most nested range: latest start, then earliest end, then lowest handle.
    #[default]
    Innermost,
    /// The containing node with the lowest handle, i.e. the one added to the CFG first.
    First,
}

/// Configuration for [`ProgramDependenceGraph`](crate::pdg::ProgramDependenceGraph).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PdgConfig {
    /// Tie-break for overlapping ranges in position queries (default: innermost).
    pub position_tie_break: PositionTieBreak,

    /// Check the reachability contract of the CFG before analyzing it (default: off).
    ///
    /// Without the check, statements that can not reach the end node get no
    /// postdominator and only contribute themselves to control dependence.
    pub validate_input: bool,
}

impl PdgConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration that validates its input and otherwise uses defaults.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            validate_input: true,
            ..Self::default()
        }
    }

    /// Sets the position tie-break.
    #[must_use]
    pub fn with_position_tie_break(mut self, tie_break: PositionTieBreak) -> Self {
        self.position_tie_break = tie_break;
        self
    }

    /// Enables or disables input validation.
    #[must_use]
    pub fn with_validation(mut self, enable: bool) -> Self {
        self.validate_input = enable;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PdgConfig::default();
        assert_eq!(config.position_tie_break, PositionTieBreak::Innermost);
        assert!(!config.validate_input);
        assert!(PdgConfig::strict().validate_input);
    }

    #[test]
    fn test_setters() {
        let config = PdgConfig::new()
            .with_position_tie_break(PositionTieBreak::First)
            .with_validation(true);
        assert_eq!(config.position_tie_break, PositionTieBreak::First);
        assert!(config.validate_input);
        assert_eq!(config.position_tie_break.to_string(), "first");
    }
}
