//! Shortest edit script between two sequences
//!
//! Entry points tying the pipeline together:
//!
//! ```text
//! search(n, m, eq)  -> Trace        // furthest-reaching points per d
//!       |
//!       v
//! backtrack(trace)  -> Vec<Move>    // Match / Delete / Insert, forward order
//!       |
//!       v
//! coalesce(moves)   -> Vec<Change>  // maximal change ranges
//!       |
//!       v
//! granular(g, ..)   -> Vec<Change>  // only when a granularity is configured
//! ```
//!
//! # Complexity
//!
//! - Time: O((n + m) * D) where D is the edit distance
//! - Space: O((n + m) * D) for the retained trace

use crate::change::{granular, Change};
use crate::data::DiffData;
use crate::error::DiffResult;

use super::backtrack::{backtrack, Move};
use super::coalesce::coalesce;
use super::myers::search;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for diff post-processing and limits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffConfig {
    /// Merge changes separated by at most this many unchanged elements.
    /// Default: 0 (no merging)
    pub granularity: usize,
    /// Give up with `EditDistanceExceeded` once the edit distance passes this.
    /// Default: unbounded
    pub max_edit_distance: Option<usize>,
}

impl DiffConfig {
    /// Create config with custom settings.
    pub fn new(granularity: usize, max_edit_distance: Option<usize>) -> Self {
        Self {
            granularity,
            max_edit_distance,
        }
    }

    pub fn with_granularity(mut self, granularity: usize) -> Self {
        self.granularity = granularity;
        self
    }

    pub fn with_max_edit_distance(mut self, limit: usize) -> Self {
        self.max_edit_distance = Some(limit);
        self
    }
}

// =============================================================================
// Main API
// =============================================================================

/// Compute the shortest edit script between a sequence of length `n` and one
/// of length `m`.
///
/// `data.equal(i, j)` is only called with `i < n` and `j < m`.
///
/// # Panics
///
/// If `n + m` exceeds the addressable diagonal range (`isize::MAX / 2`). Use
/// [`diff_with_config`] to get that as an error instead.
///
/// # Example
///
/// ```
/// use myers_ses::{diff, Change};
///
/// let a = [1, 2, 3];
/// let b = [0, 1, 2, 3];
/// let changes = diff(a.len(), b.len(), &|i: usize, j: usize| a[i] == b[j]);
/// assert_eq!(changes, vec![Change::new(0, 0, 0, 1)]);
/// ```
pub fn diff<D>(n: usize, m: usize, data: &D) -> Vec<Change>
where
    D: DiffData + ?Sized,
{
    match diff_with_config(n, m, data, &DiffConfig::default()) {
        Ok(changes) => changes,
        Err(err) => panic!("cannot diff sequences: {err}"),
    }
}

/// Compute the shortest edit script with explicit configuration.
pub fn diff_with_config<D>(n: usize, m: usize, data: &D, config: &DiffConfig) -> DiffResult<Vec<Change>>
where
    D: DiffData + ?Sized,
{
    let trace = search(n, m, data, config.max_edit_distance)?;
    let edit_distance = trace.edit_distance();

    // Identical sequences: nothing to reconstruct
    if edit_distance == 0 {
        return Ok(Vec::new());
    }

    let moves = backtrack(&trace, n, m);
    let mut changes = coalesce(&moves);

    if config.granularity > 0 {
        changes = granular(config.granularity, &changes);
    }

    tracing::debug!(n, m, edit_distance, changes = changes.len(), "computed shortest edit script");
    Ok(changes)
}

/// Compute the elementary move path, in forward order, without coalescing.
///
/// Identical sequences yield one [`Move::Match`] per element.
pub fn diff_moves<D>(n: usize, m: usize, data: &D) -> DiffResult<Vec<Move>>
where
    D: DiffData + ?Sized,
{
    let trace = search(n, m, data, None)?;
    Ok(backtrack(&trace, n, m))
}

// =============================================================================
// Tests
// =============================================================================
