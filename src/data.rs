//! Sequence access for the diff engine
//!
//! The engine never sees elements. It only asks whether element `i` of the
//! first sequence equals element `j` of the second, through [`DiffData`].
//!
//! # Adapters
//!
//! | Adapter | Elements | Entry point |
//! |---------|----------|-------------|
//! | [`Slices`] | any `T: PartialEq` | [`slices`], [`ints`] |
//! | [`Chars`] | `char` of two strings | [`chars`] |
//! | [`Bytes`] | `u8` | [`bytes`] |
//! | closure | anything | [`diff`](crate::diff) |

use crate::algo::diff;
use crate::change::Change;

// =============================================================================
// Capability Traits
// =============================================================================

/// Index-pair equality between two sequences.
///
/// `equal(i, j)` is only ever called with `i < n` and `j < m`, where `n` and
/// `m` are the lengths handed to [`diff`]. It must be deterministic and free of
/// side effects for the duration of one diff: the engine calls it as often and
/// in whatever order it needs.
pub trait DiffData {
    /// Whether element `i` of the first sequence equals element `j` of the second
    fn equal(&self, i: usize, j: usize) -> bool;
}

impl<F> DiffData for F
where
    F: Fn(usize, usize) -> bool,
{
    #[inline]
    fn equal(&self, i: usize, j: usize) -> bool {
        self(i, j)
    }
}

/// A pair of sequences that knows its own lengths.
///
/// Implementing this gives [`SequencePair::diff`] for free.
pub trait SequencePair: DiffData {
    /// Length of the first sequence
    fn len_a(&self) -> usize;

    /// Length of the second sequence
    fn len_b(&self) -> usize;

    /// Shortest edit script from the first sequence to the second
    fn diff(&self) -> Vec<Change> {
        diff(self.len_a(), self.len_b(), self)
    }
}

// =============================================================================
// Adapters
// =============================================================================

/// Two borrowed slices compared with `PartialEq`.
#[derive(Debug, Clone, Copy)]
pub struct Slices<'a, T> {
    a: &'a [T],
    b: &'a [T],
}

impl<'a, T> Slices<'a, T> {
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        Self { a, b }
    }
}

impl<T: PartialEq> DiffData for Slices<'_, T> {
    #[inline]
    fn equal(&self, i: usize, j: usize) -> bool {
        self.a[i] == self.b[j]
    }
}

impl<T: PartialEq> SequencePair for Slices<'_, T> {
    fn len_a(&self) -> usize {
        self.a.len()
    }

    fn len_b(&self) -> usize {
        self.b.len()
    }
}

/// Byte strings, compared byte by byte.
pub type Bytes<'a> = Slices<'a, u8>;

/// Two strings compared by Unicode scalar value.
///
/// Indices in the resulting changes count `char`s, not bytes.
#[derive(Debug, Clone, Default)]
pub struct Chars {
    a: Vec<char>,
    b: Vec<char>,
}

impl Chars {
    pub fn new(a: &str, b: &str) -> Self {
        Self {
            a: a.chars().collect(),
            b: b.chars().collect(),
        }
    }
}

impl DiffData for Chars {
    #[inline]
    fn equal(&self, i: usize, j: usize) -> bool {
        self.a[i] == self.b[j]
    }
}

impl SequencePair for Chars {
    fn len_a(&self) -> usize {
        self.a.len()
    }

    fn len_b(&self) -> usize {
        self.b.len()
    }
}

// =============================================================================
// Convenience API
// =============================================================================

/// Diff two slices of any comparable element type.
pub fn slices<T: PartialEq>(a: &[T], b: &[T]) -> Vec<Change> {
    Slices::new(a, b).diff()
}

/// Diff two integer slices.
pub fn ints(a: &[i64], b: &[i64]) -> Vec<Change> {
    slices(a, b)
}

/// Diff two strings character by character.
pub fn chars(a: &str, b: &str) -> Vec<Change> {
    Chars::new(a, b).diff()
}

/// Diff two byte strings.
pub fn bytes(a: &[u8], b: &[u8]) -> Vec<Change> {
    Bytes::new(a, b).diff()
}
