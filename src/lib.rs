//! myers-ses - Shortest Edit Script between two sequences
//!
//! ## Core Concepts
//!
//! **Edit graph search**: Myers' greedy O(ND) algorithm finds the minimal
//! number of insertions and deletions turning one sequence into another,
//! keeping the per-step trace so the actual path can be recovered.
//!
//! **Change records**: the path is folded into maximal, ordered, non-adjacent
//! [`Change`] ranges (`a`, `b`, `del`, `ins`).
//!
//! **Element agnostic**: the engine only asks "is A[i] equal to B[j]?"
//! through [`DiffData`], so any sequence type can be diffed.
//!
//! ## Modules
//! - `algo`: search, backtracking, coalescing and the [`diff`] entry points
//! - `change`: [`Change`], [`DiffStats`], validation and granularity merging
//! - `data`: [`DiffData`] and adapters for slices, chars and bytes
//! - `error`: [`DiffError`]
//! - `batch`: parallel diffing (feature `parallel`)
//!
//! ## Usage
//!
//! ```
//! use myers_ses::{chars, Change};
//!
//! let changes = chars("brown fox", "brwn faax");
//! assert_eq!(changes, vec![Change::new(2, 2, 1, 0), Change::new(7, 6, 1, 2)]);
//! ```

// =============================================================================
// Core modules
// =============================================================================

/// Algorithms: search, backtrack, coalesce
pub mod algo;

/// Change records and utilities
pub mod change;

/// Sequence access trait and adapters
pub mod data;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

/// Parallel batch diffing
#[cfg(feature = "parallel")]
pub mod batch;

// =============================================================================
// Re-exports
// =============================================================================

// Algorithms
pub use algo::{diff, diff_moves, diff_with_config, DiffConfig, Move};

// Change records
pub use change::{granular, validate, Change, DiffStats};

// Sequence access
pub use data::{bytes, chars, ints, slices, Bytes, Chars, DiffData, SequencePair, Slices};

// Error types
pub use error::{DiffError, DiffResult};

#[cfg(feature = "parallel")]
pub use batch::{diff_batch, diff_slices_batch};

// Re-export rkyv so archived types can be named by downstream crates
#[cfg(feature = "rkyv")]
pub use rkyv;

#[cfg(feature = "rkyv")]
pub use change::ArchivedChange;

// =============================================================================
// Tests
// =============================================================================
