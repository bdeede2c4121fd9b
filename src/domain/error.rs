//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors describe an invalid tree shape.
///
/// The display strings are shown to the user verbatim by every outer layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid! Node cannot be a parent of itself")]
    SelfParent(String),

    #[error("Invalid! No root found / cycle detected")]
    NoRoot,

    #[error("Invalid! Cycle detected at node: {0}")]
    CycleDetected(String),
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, DomainError>;
