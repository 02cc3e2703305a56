//! Change records produced by a diff
//!
//! A [`Change`] describes one contiguous edit: starting at `a` in the first
//! sequence `del` elements are removed, and starting at `b` in the second
//! sequence `ins` elements are inserted in their place.
//!
//! Lists returned by [`diff`](crate::diff) are:
//! - non-empty per record (`del + ins > 0`)
//! - ordered by ascending `a` (and therefore ascending `b`)
//! - maximal: two records are always separated by at least one unchanged element

use std::fmt;

use crate::error::{DiffError, DiffResult};

// =============================================================================
// Change
// =============================================================================

/// One contiguous run of deletions and insertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "rkyv",
    derive(rkyv::Archive, rkyv::Serialize, rkyv::Deserialize),
    rkyv(derive(Debug))
)]
pub struct Change {
    /// Position in the first sequence
    pub a: usize,
    /// Position in the second sequence
    pub b: usize,
    /// Number of elements removed from the first sequence at `a`
    pub del: usize,
    /// Number of elements inserted from the second sequence at `b`
    pub ins: usize,
}

impl Change {
    #[inline]
    pub const fn new(a: usize, b: usize, del: usize, ins: usize) -> Self {
        Self { a, b, del, ins }
    }

    /// End (exclusive) of the removed range in the first sequence
    #[inline]
    pub const fn end_a(&self) -> usize {
        self.a + self.del
    }

    /// End (exclusive) of the inserted range in the second sequence
    #[inline]
    pub const fn end_b(&self) -> usize {
        self.b + self.ins
    }

    /// Number of elementary edits in this change
    #[inline]
    pub const fn cost(&self) -> usize {
        self.del + self.ins
    }

    pub const fn is_empty(&self) -> bool {
        self.cost() == 0
    }

    pub const fn is_insert_only(&self) -> bool {
        self.del == 0 && self.ins > 0
    }

    pub const fn is_delete_only(&self) -> bool {
        self.ins == 0 && self.del > 0
    }

    /// The same change seen from the other side: `a`/`b` and `del`/`ins` swapped
    pub const fn swapped(&self) -> Self {
        Self::new(self.b, self.a, self.ins, self.del)
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{},{} -{} +{}", self.a, self.b, self.del, self.ins)
    }
}

// =============================================================================
// Statistics
// =============================================================================

/// Totals over a change list
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DiffStats {
    pub changes: usize,
    pub deleted: usize,
    pub inserted: usize,
}

impl DiffStats {
    pub fn from_changes(changes: &[Change]) -> Self {
        changes.iter().fold(Self::default(), |mut stats, change| {
            stats.changes += 1;
            stats.deleted += change.del;
            stats.inserted += change.ins;
            stats
        })
    }

    /// Length of the edit script (deletions plus insertions)
    pub fn edit_distance(&self) -> usize {
        self.deleted + self.inserted
    }

    pub fn is_empty(&self) -> bool {
        self.changes == 0
    }
}

// =============================================================================
// Validation
// =============================================================================

/// Check that `changes` is a well-formed edit script from a sequence of
/// length `n` to one of length `m`.
///
/// Every record must be non-empty and in bounds, records must be strictly
/// ordered with at least one unchanged element between neighbours, and each
/// unchanged run must have the same length on both sides.
pub fn validate(changes: &[Change], n: usize, m: usize) -> DiffResult<()> {
    let mut end_a = 0;
    let mut end_b = 0;

    for (index, change) in changes.iter().enumerate() {
        if change.is_empty() {
            return Err(DiffError::EmptyChange { index });
        }

        let touches_previous = index > 0 && change.a <= end_a;
        if touches_previous || change.a < end_a || change.b < end_b {
            return Err(DiffError::OutOfOrder { index });
        }

        if change.a - end_a != change.b - end_b {
            return Err(DiffError::Inconsistent { index });
        }

        if change.end_a() > n || change.end_b() > m {
            return Err(DiffError::OutOfBounds { index });
        }

        end_a = change.end_a();
        end_b = change.end_b();
    }

    if n - end_a != m - end_b {
        return Err(DiffError::Inconsistent { index: changes.len() });
    }

    Ok(())
}

// =============================================================================
// Granularity
// =============================================================================

/// Merge neighbouring changes separated by at most `granularity` unchanged
/// elements.
///
/// The unchanged gap is absorbed into the merged record: it is deleted from
/// the first sequence and re-inserted from the second. `changes` must be
/// ordered as returned by [`diff`](crate::diff); with `granularity == 0` such
/// a list comes back unchanged.
pub fn granular(granularity: usize, changes: &[Change]) -> Vec<Change> {
    let mut merged: Vec<Change> = Vec::with_capacity(changes.len());

    for &change in changes {
        match merged.last_mut() {
            Some(prev)
                if change
                    .a
                    .checked_sub(prev.end_a())
                    .is_some_and(|gap| gap <= granularity) =>
            {
                // Gap lengths agree on both sides for ordered input
                debug_assert!(change.b >= prev.end_b());
                prev.del = change.end_a() - prev.a;
                prev.ins = change.end_b().saturating_sub(prev.b);
            }
            _ => merged.push(change),
        }
    }

    merged
}
