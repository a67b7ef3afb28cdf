//! Error types for atelier-core.

use thiserror::Error;

/// Errors from the strict pattern-name parsing path.
///
/// Layout assignment itself never fails: the lenient entry points map
/// unknown names to the default pattern instead of returning this.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// The name does not match any registered pattern.
    #[error("unknown pattern: {0}")]
    UnknownPattern(String),
}
