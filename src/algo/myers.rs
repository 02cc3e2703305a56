//! Myers' greedy edit graph search
//!
//! Explores the edit graph by edit distance `d`, not by position. For each
//! `d` it records, per diagonal `k = x - y`, the furthest `x` reachable with
//! exactly `d` insertions/deletions followed by a maximal snake.
//!
//! # Space Complexity Note
//!
//! The trace kept for backtracking holds only the active diagonals of each
//! step (`2d + 1` entries for step `d`), plus one working array of size
//! `O(n + m)`: **O(D^2 + n + m)** space. Time is O((n + m) * D), so nearly
//! identical inputs are linear and disjoint inputs quadratic.
//!
//! # Tie-break
//!
//! Many shortest paths usually exist. The step into diagonal `k` always comes
//! from the neighbour reaching the larger `x`; on a tie the horizontal step
//! (a deletion from `k - 1`) wins. Search and backtracking share
//! `Trace::step` so both always agree on the path.
//!
//! # References
//!
//! - Myers, E.W. "An O(ND) Difference Algorithm and Its Variations" (1986)

use crate::data::DiffData;
use crate::error::{DiffError, DiffResult};

// =============================================================================
// Types
// =============================================================================

/// Non-diagonal step leading into a diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// Horizontal step from diagonal `k - 1`: x advances, one element of A removed
    Delete,
    /// Vertical step from diagonal `k + 1`: y advances, one element of B added
    Insert,
}

/// Furthest-reaching points for every edit distance up to `D`.
///
/// `snapshots[d][k + d]` is the furthest x on diagonal `k` after step `d`,
/// so snapshot `d` covers exactly the diagonals `-d..=d`. Entries of the
/// wrong parity are stale and never read.
#[derive(Debug)]
pub(crate) struct Trace {
    snapshots: Vec<Vec<usize>>,
}

impl Trace {
    /// Length of the shortest edit script
    pub fn edit_distance(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Furthest x on diagonal `k` after step `d`
    pub fn furthest(&self, d: usize, k: isize) -> usize {
        self.snapshots[d][Self::index(d, k)]
    }

    /// Step that entered diagonal `k` at edit distance `d` (`d >= 1`)
    pub fn step(&self, d: usize, k: isize) -> Step {
        // Boundary diagonals are decided without reading the snapshot
        choose_step(&self.snapshots[d - 1], Self::index(d - 1, k), k, d as isize)
    }

    #[inline]
    fn index(d: usize, k: isize) -> usize {
        (k + d as isize) as usize
    }
}

// =============================================================================
// Search
// =============================================================================

/// Upper bound on the edit distance, checked against the diagonal range.
pub(crate) fn max_edit_distance(n: usize, m: usize) -> DiffResult<usize> {
    n.checked_add(m)
        .filter(|&total| total <= isize::MAX as usize / 2)
        .ok_or(DiffError::LengthOverflow { n, m })
}

/// Run the forward search from (0, 0) to (n, m).
///
/// Stops with [`DiffError::EditDistanceExceeded`] once `d` passes `limit`.
pub(crate) fn search<D>(n: usize, m: usize, data: &D, limit: Option<usize>) -> DiffResult<Trace>
where
    D: DiffData + ?Sized,
{
    let max_d = max_edit_distance(n, m)?;
    let offset = max_d;

    // V[k + offset] = furthest x on diagonal k
    let mut v = vec![0usize; 2 * max_d + 1];
    let mut snapshots: Vec<Vec<usize>> = Vec::new();

    for d in 0..=max_d {
        if let Some(limit) = limit {
            if d > limit {
                tracing::debug!(n, m, limit, "edit distance bound reached, giving up");
                return Err(DiffError::EditDistanceExceeded { limit });
            }
        }

        let di = d as isize;
        for k in (-di..=di).step_by(2) {
            let kk = (k + offset as isize) as usize;

            // Diagonals of parity d are written, parity d - 1 read: in place is safe
            let mut x = if d == 0 {
                0
            } else {
                match choose_step(&v, kk, k, di) {
                    Step::Delete => v[kk - 1] + 1,
                    Step::Insert => v[kk + 1],
                }
            };
            let mut y = (x as isize - k) as usize;

            // Extend snake: follow diagonal while elements match
            while x < n && y < m && data.equal(x, y) {
                x += 1;
                y += 1;
            }

            v[kk] = x;

            if x >= n && y >= m {
                debug_assert_eq!((x, y), (n, m));
                snapshots.push(v[offset - d..=offset + d].to_vec());
                tracing::trace!(n, m, edit_distance = d, "reached end of edit graph");
                return Ok(Trace { snapshots });
            }
        }

        snapshots.push(v[offset - d..=offset + d].to_vec());
    }

    unreachable!("edit graph search exceeded n + m steps")
}

/// Pick the step into diagonal `k` at step `d` from the previous snapshot.
#[inline]
fn choose_step(prev: &[usize], kk: usize, k: isize, d: isize) -> Step {
    if k == -d {
        Step::Insert
    } else if k == d || prev[kk - 1] + 1 >= prev[kk + 1] {
        Step::Delete
    } else {
        Step::Insert
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_ints(a: &[i32], b: &[i32]) -> Trace {
        let eq = |i: usize, j: usize| a[i] == b[j];
        search(a.len(), b.len(), &eq, None).unwrap()
    }

    #[test]
    fn test_identical_is_zero_distance() {
        let trace = search_ints(&[1, 2, 3], &[1, 2, 3]);
        assert_eq!(trace.edit_distance(), 0);
        assert_eq!(trace.furthest(0, 0), 3);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(search_ints(&[], &[]).edit_distance(), 0);
        assert_eq!(search_ints(&[], &[1, 2]).edit_distance(), 2);
        assert_eq!(search_ints(&[1, 2, 3], &[]).edit_distance(), 3);
    }

    #[test]
    fn test_paper_figure_distance() {
        // ABCABBA -> CBABAC
        let trace = search_ints(&[1, 2, 3, 1, 2, 2, 1], &[3, 2, 1, 2, 1, 3]);
        assert_eq!(trace.edit_distance(), 5);
    }

    #[test]
    fn test_disjoint_is_full_distance() {
        let trace = search_ints(&[1, 2, 3], &[4, 5]);
        assert_eq!(trace.edit_distance(), 5);
    }

    #[test]
    fn test_first_snake_recorded() {
        let trace = search_ints(&[7, 7, 1], &[7, 7, 2]);
        assert_eq!(trace.furthest(0, 0), 2);
        assert_eq!(trace.edit_distance(), 2);
    }

    #[test]
    fn test_tie_prefers_delete() {
        // At d = 1 diagonal -1 reaches x = 0 and diagonal 1 reaches x = 1,
        // so both ways into diagonal 0 at d = 2 land on x = 1.
        let trace = search_ints(&[1], &[2]);
        assert_eq!(trace.edit_distance(), 2);
        assert_eq!(trace.step(2, 0), Step::Delete);
        assert_eq!(trace.step(1, -1), Step::Insert);
        assert_eq!(trace.step(1, 1), Step::Delete);
    }

    #[test]
    fn test_limit_exceeded() {
        let a = [1, 2, 3];
        let b = [4, 5, 6];
        let eq = |i: usize, j: usize| a[i] == b[j];
        let err = search(a.len(), b.len(), &eq, Some(2)).unwrap_err();
        assert_eq!(err, DiffError::EditDistanceExceeded { limit: 2 });

        // Exactly at the limit still succeeds
        let trace = search(a.len(), b.len(), &eq, Some(6)).unwrap();
        assert_eq!(trace.edit_distance(), 6);
    }

    #[test]
    fn test_length_overflow() {
        let eq = |_: usize, _: usize| false;
        let err = search(usize::MAX, 1, &eq, None).unwrap_err();
        assert_eq!(err, DiffError::LengthOverflow { n: usize::MAX, m: 1 });
    }

    #[test]
    fn test_snapshots_hold_active_diagonals_only() {
        let trace = search_ints(&[1, 2, 3, 1, 2, 2, 1], &[3, 2, 1, 2, 1, 3]);
        for (d, snapshot) in trace.snapshots.iter().enumerate() {
            assert_eq!(snapshot.len(), 2 * d + 1);
        }
        // Final point sits on diagonal n - m
        assert_eq!(trace.furthest(5, 1), 7);
    }

    #[test]
    fn test_equal_only_called_in_range() {
        let a = [1, 2, 3, 4];
        let b = [2, 4, 5];
        let eq = |i: usize, j: usize| {
            assert!(i < a.len() && j < b.len(), "out of range: ({i}, {j})");
            a[i] == b[j]
        };
        let trace = search(a.len(), b.len(), &eq, None).unwrap();
        assert_eq!(trace.edit_distance(), 3);
    }
}
