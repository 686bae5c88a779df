use thiserror::Error;

/// Builds an [`Error::InvariantViolated`] tagged with the source location of the check.
///
/// ```rust, ignore
/// return Err(invariant_error!("node {} has no postdominator", node));
/// ```
macro_rules! invariant_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::InvariantViolated {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::InvariantViolated {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Two very different failure classes share this type:
///
/// ## Contract violations
/// - [`Error::InvariantViolated`] - The input graph broke an assumption the analysis relies on
///   (no postdominator estimate for a node that must have one, a node missing from an ordering,
///   a missing exit). These are never expected for a CFG produced by a correct resolver; callers
///   normally propagate them with `?` and do not branch on them.
///
/// ## Construction errors
/// - [`Error::GraphError`] - The [`crate::cfg::CfgBuilder`] was handed an inconsistent graph
///   (dangling edge endpoints, missing or duplicate start/end node).
///
/// Query misses, such as asking for a slice at a position that no statement covers, are not
/// errors at all and are reported as `None`.
///
/// # Examples
///
/// ```rust
/// use pdgslice::{cfg::CfgBuilder, Error};
///
/// let builder = CfgBuilder::new();
/// match builder.build() {
///     Ok(_) => unreachable!("a graph without start/end can not be built"),
///     Err(Error::GraphError(message)) => println!("rejected: {message}"),
///     Err(e) => println!("Other error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An analysis invariant does not hold for the given graph.
    ///
    /// # Fields
    ///
    /// * `message` - What was expected and what was found
    /// * `file` - Source file where the violation was detected
    /// * `line` - Source line where the violation was detected
    #[error("Invariant violated - {file}:{line}: {message}")]
    InvariantViolated {
        /// Description of the broken invariant
        message: String,
        /// The source file in which the check failed
        file: &'static str,
        /// The source line in which the check failed
        line: u32,
    },

    /// The control flow graph could not be constructed.
    #[error("{0}")]
    GraphError(String),
}
