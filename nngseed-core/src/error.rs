//! Error types for the `nngseed-core` library.
//!
//! Defines the error enum exposed by the public API, a stable machine-readable
//! code paired with each variant, and a convenient result alias.

use std::fmt;

use thiserror::Error;

/// Stable codes describing [`GraphError`] variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum GraphErrorCode {
    /// A digraph operand was null (no `tail_ptr`, in source terms).
    NullInput,
    /// Graph operands did not share the same vertex count.
    SizeMismatch,
    /// `force_diagonal` and `ignore_diagonal` were both requested.
    DiagonalConflict,
    /// A memory allocation failed even after the exact-recount retry.
    AllocationFailure,
    /// `resize_arcs` would have dropped a used arc.
    Truncation,
    /// The seed strategy tag was out of range.
    UnknownStrategy,
    /// The vertex count exceeds what a [`crate::digraph::Vertex`] can address.
    TooManyVertices,
}

impl GraphErrorCode {
    /// Returns the stable machine-readable representation of this error code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NullInput => "GRAPH_NULL_INPUT",
            Self::SizeMismatch => "GRAPH_SIZE_MISMATCH",
            Self::DiagonalConflict => "GRAPH_DIAGONAL_CONFLICT",
            Self::AllocationFailure => "GRAPH_ALLOCATION_FAILURE",
            Self::Truncation => "GRAPH_TRUNCATION",
            Self::UnknownStrategy => "GRAPH_UNKNOWN_STRATEGY",
            Self::TooManyVertices => "GRAPH_TOO_MANY_VERTICES",
        }
    }
}

impl fmt::Display for GraphErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type produced by the digraph substrate and the seed-finding engine.
///
/// A "null digraph"/"null clustering" sentinel in the source this crate is
/// modelled on becomes an ordinary `Err` here; Rust's `Result` already gives
/// callers a distinguishable failure state without a parallel sentinel value.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A digraph operand was null.
    ///
    /// Kept for parity with the error kinds spec.md §7 names, but a `&Digraph`
    /// can never be null in safe Rust the way a C pointer could, so no
    /// operation in this crate actually constructs this variant today.
    #[error("digraph operand is null")]
    NullInput,
    /// Graph operands did not share the same vertex count.
    #[error("vertex count mismatch: left={left}, right={right}")]
    SizeMismatch {
        /// Vertex count of the left operand.
        left: usize,
        /// Vertex count of the right operand.
        right: usize,
    },
    /// `force_diagonal` and `ignore_diagonal` were both requested.
    #[error("adjacency product cannot force and ignore the diagonal at once")]
    DiagonalConflict,
    /// A memory allocation failed even after the exact-recount retry.
    #[error("allocation of {requested} arcs failed")]
    AllocationFailure {
        /// Number of arc slots the failed allocation attempted to reserve.
        requested: usize,
    },
    /// `resize_arcs` would have dropped a used arc.
    #[error("cannot resize arc storage to {requested}: {used} arcs are in use")]
    Truncation {
        /// Capacity the caller requested.
        requested: usize,
        /// Number of arcs currently in use.
        used: usize,
    },
    /// The seed strategy tag was out of range.
    #[error("unknown seed strategy")]
    UnknownStrategy,
    /// The vertex count exceeds what a [`crate::digraph::Vertex`] can address.
    #[error("vertex count {got} exceeds the maximum addressable vertex count {max}")]
    TooManyVertices {
        /// The vertex count that was requested.
        got: usize,
        /// The largest vertex count this crate can represent.
        max: usize,
    },
}

impl GraphError {
    /// Retrieves the stable [`GraphErrorCode`] for this error.
    #[must_use]
    pub const fn code(&self) -> GraphErrorCode {
        match self {
            Self::NullInput => GraphErrorCode::NullInput,
            Self::SizeMismatch { .. } => GraphErrorCode::SizeMismatch,
            Self::DiagonalConflict => GraphErrorCode::DiagonalConflict,
            Self::AllocationFailure { .. } => GraphErrorCode::AllocationFailure,
            Self::Truncation { .. } => GraphErrorCode::Truncation,
            Self::UnknownStrategy => GraphErrorCode::UnknownStrategy,
            Self::TooManyVertices { .. } => GraphErrorCode::TooManyVertices,
        }
    }
}

/// Convenient alias for results returned by this crate.
pub type Result<T> = core::result::Result<T, GraphError>;
