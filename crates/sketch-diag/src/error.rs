//! Diagnostic mapping errors.

#![allow(missing_docs)]

use thiserror::Error;

/// Errors raised while mapping a single raw issue.
///
/// A mapping error only affects the issue being mapped; callers skip it and
/// carry on with the rest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("issue line {0} is negative")]
    NegativeLine(i64),

    #[error("issue column {0} is negative")]
    NegativeColumn(i64),

    #[error("no sketch tab was merged into the program")]
    EmptyOffsetTable,
}
