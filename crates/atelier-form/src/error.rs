//! Error types for atelier-form.

use thiserror::Error;

/// Errors from the strict field-parsing path.
///
/// [`rewrite`](crate::rewrite) never returns these: malformed input is
/// passed through unchanged there. Only [`parse_fields`](crate::parse_fields)
/// surfaces them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// A bracketed definition with no tokens at all.
    #[error("empty field definition at byte {offset}")]
    Empty { offset: usize },

    /// An opening bracket with no closing bracket, or an unterminated
    /// quoted segment inside the definition.
    #[error("unterminated field definition at byte {offset}")]
    Unterminated { offset: usize },
}
