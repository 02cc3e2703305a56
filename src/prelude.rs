//! Prelude module for common imports.
//!
//! ```
//! use myers_ses::prelude::*;
//!
//! assert!(slices(&[1, 2], &[1, 2]).is_empty());
//! ```

// Algorithms
pub use crate::algo::{diff, diff_moves, diff_with_config, DiffConfig, Move};

// Change records
pub use crate::change::{granular, validate, Change, DiffStats};

// Sequence access
pub use crate::data::{bytes, chars, ints, slices, Bytes, Chars, DiffData, SequencePair, Slices};

// Error
pub use crate::error::{DiffError, DiffResult};

#[cfg(feature = "parallel")]
pub use crate::batch::{diff_batch, diff_slices_batch};
