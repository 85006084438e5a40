//! Error types for conversion operations

use thiserror::Error;

/// Errors that can occur while converting text.
///
/// Conversion is total over string input: malformed or unbalanced markup
/// degrades to escaped literal text. The only reportable condition is markup
/// nested deeper than the configured limit, and only when the caller asked for
/// it through [`DepthPolicy::Error`](crate::converter::DepthPolicy::Error).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Markup nesting exceeded the configured maximum depth
    #[error("Markup nesting too deep: limit is {limit} levels")]
    NestingTooDeep { limit: usize },
}
