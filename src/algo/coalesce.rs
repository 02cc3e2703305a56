//! Coalescing elementary moves into change records

use super::backtrack::Move;
use crate::change::Change;

/// Merge every maximal run of non-match moves into one [`Change`].
///
/// `moves` must be in forward order. A record starts at the cursor position
/// of the first delete/insert in its run, so output is ordered by `a` and
/// never contains two adjacent records.
pub(crate) fn coalesce(moves: &[Move]) -> Vec<Change> {
    let mut changes = Vec::new();
    let mut pending: Option<Change> = None;
    let (mut a, mut b) = (0, 0);

    for mv in moves {
        match mv {
            Move::Match => {
                changes.extend(pending.take());
                a += 1;
                b += 1;
            }
            Move::Delete => {
                pending.get_or_insert(Change::new(a, b, 0, 0)).del += 1;
                a += 1;
            }
            Move::Insert => {
                pending.get_or_insert(Change::new(a, b, 0, 0)).ins += 1;
                b += 1;
            }
        }
    }

    changes.extend(pending);
    changes
}
