//! Error types for sibling queries.

use thiserror::Error;

/// Errors that can occur while resolving or running a sibling query.
///
/// Every failure aborts the query; no partial results are returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FindError {
    /// The parent lacks a `type` or a children list.
    #[error("Expected parent node")]
    InvalidParent,
    /// The position is neither an index nor node-shaped.
    #[error("Expected child node or index")]
    InvalidPosition,
    /// A numeric position is negative, infinite, NaN or fractional.
    #[error("Expected positive finite number as index")]
    InvalidIndex,
    /// A node position is not one of the parent's children.
    #[error("Expected child node")]
    NodeNotFound,
    /// The test specification has an unsupported shape.
    #[error("Expected function, string, or object as test, not {found}")]
    InvalidTest { found: &'static str },
}
