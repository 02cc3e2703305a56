//! Parallel diffing of independent sequence pairs.
//!
//! Only available with the `parallel` feature. Each pair is diffed on its
//! own; results come back in input order.

use rayon::prelude::*;

use crate::change::Change;
use crate::data::{SequencePair, Slices};

/// Diff every pair on the rayon thread pool.
pub fn diff_batch<S>(pairs: &[S]) -> Vec<Vec<Change>>
where
    S: SequencePair + Sync,
{
    tracing::debug!(pairs = pairs.len(), "diffing batch");
    pairs.par_iter().map(|pair| pair.diff()).collect()
}

/// Diff every `(a, b)` slice pair on the rayon thread pool.
pub fn diff_slices_batch<T>(pairs: &[(&[T], &[T])]) -> Vec<Vec<Change>>
where
    T: PartialEq + Sync,
{
    pairs
        .par_iter()
        .map(|&(a, b)| Slices::new(a, b).diff())
        .collect()
}
