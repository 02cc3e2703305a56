//! Error types for myers-ses.
//!
//! The search itself cannot fail on valid input; these errors cover
//! unrepresentable graph sizes, the optional edit-distance bound, and
//! change lists that break the well-formedness rules checked by
//! [`validate`](crate::change::validate).

use thiserror::Error;

/// Errors that can occur while diffing or validating change lists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffError {
    /// `n + m` does not fit the signed diagonal range of the edit graph
    #[error("edit graph of {n} x {m} elements exceeds the addressable diagonal range")]
    LengthOverflow {
        /// Length of the first sequence
        n: usize,
        /// Length of the second sequence
        m: usize,
    },

    /// The search needed more edits than the configured bound allows
    #[error("edit distance exceeds configured limit of {limit}")]
    EditDistanceExceeded {
        /// Configured maximum edit distance
        limit: usize,
    },

    /// A change neither deletes nor inserts anything
    #[error("change #{index} neither deletes nor inserts")]
    EmptyChange {
        /// Position of the offending change in the list
        index: usize,
    },

    /// A change starts before or directly at the end of the previous one
    #[error("change #{index} overlaps or touches the previous change")]
    OutOfOrder {
        /// Position of the offending change in the list
        index: usize,
    },

    /// A change reaches past the end of one of the sequences
    #[error("change #{index} reaches past the end of its sequence")]
    OutOfBounds {
        /// Position of the offending change in the list
        index: usize,
    },

    /// The unchanged run before a change has different lengths in A and B.
    ///
    /// `index == changes.len()` refers to the trailing run.
    #[error("unchanged run before change #{index} differs in length between sequences")]
    Inconsistent {
        /// Position of the change following the run
        index: usize,
    },
}

/// Result type alias for diff operations.
pub type DiffResult<T> = Result<T, DiffError>;

impl DiffError {
    /// Position of the offending change, for validation errors.
    pub fn change_index(&self) -> Option<usize> {
        match self {
            Self::EmptyChange { index }
            | Self::OutOfOrder { index }
            | Self::OutOfBounds { index }
            | Self::Inconsistent { index } => Some(*index),
            Self::LengthOverflow { .. } | Self::EditDistanceExceeded { .. } => None,
        }
    }
}
