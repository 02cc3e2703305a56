//! Path reconstruction from a search trace
//!
//! Walks from (n, m) back to (0, 0). At every edit distance `d` the step
//! that entered the current diagonal is re-derived from snapshot `d - 1`,
//! the snake after that step is emitted as matches, then the step itself.

use super::myers::{Step, Trace};

/// Elementary move through the edit graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Diagonal: element of A equals element of B, both cursors advance
    Match,
    /// Horizontal: element of A removed
    Delete,
    /// Vertical: element of B inserted
    Insert,
}

impl Move {
    pub fn is_match(&self) -> bool {
        matches!(self, Move::Match)
    }

    fn from_step(step: Step) -> Self {
        match step {
            Step::Delete => Move::Delete,
            Step::Insert => Move::Insert,
        }
    }
}

/// Recover the forward-ordered move list for a trace ending at (n, m).
pub(crate) fn backtrack(trace: &Trace, n: usize, m: usize) -> Vec<Move> {
    let mut x = n;
    let mut y = m;
    let mut moves = Vec::with_capacity(n.max(m) + trace.edit_distance());

    for d in (1..=trace.edit_distance()).rev() {
        let k = x as isize - y as isize;
        let step = trace.step(d, k);

        let prev_k = match step {
            Step::Delete => k - 1,
            Step::Insert => k + 1,
        };
        let prev_x = trace.furthest(d - 1, prev_k);
        let prev_y = (prev_x as isize - prev_k) as usize;

        // First point after the non-diagonal step
        let (snake_x, snake_y) = match step {
            Step::Delete => (prev_x + 1, prev_y),
            Step::Insert => (prev_x, prev_y + 1),
        };

        while x > snake_x {
            x -= 1;
            y -= 1;
            moves.push(Move::Match);
        }
        debug_assert_eq!((x, y), (snake_x, snake_y));

        moves.push(Move::from_step(step));
        x = prev_x;
        y = prev_y;
    }

    // Leading snake from the origin
    while x > 0 {
        x -= 1;
        y -= 1;
        moves.push(Move::Match);
    }
    debug_assert_eq!((x, y), (0, 0));

    moves.reverse();
    moves
}
