//! Error types for tree construction and classification

use crate::BoundaryMode;
use thiserror::Error;

/// Errors raised while building a break tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// No breakpoints were supplied
    #[error("Breakpoint set is empty")]
    Empty,

    /// A key cannot be ordered against the others (e.g. NaN)
    #[error("Breakpoint {index} has a key that cannot be ordered")]
    UnorderedKey {
        /// Position of the offending breakpoint in the input
        index: usize,
    },

    /// Two breakpoints share the same key
    #[error("Duplicate breakpoint key: {key}")]
    DuplicateKey {
        /// The repeated key
        key: String,
    },
}

/// Errors raised while classifying a value of type `A`
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationError<A> {
    /// Strict mode found no breakpoint satisfying the boundary relation
    #[error("No breakpoint owns value {value:?} under {boundary} boundary")]
    Unmapped {
        /// The query value
        value: A,
        /// Boundary mode in effect
        boundary: BoundaryMode,
    },
}
