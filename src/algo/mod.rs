//! Algorithm implementations for sequence diffing.
//!
//! - `myers`: greedy furthest-reaching search, keeps the full trace
//! - `backtrack`: recovers the move list from the trace
//! - `coalesce`: folds moves into maximal change records
//! - `diff`: public entry points and configuration

mod backtrack;
mod coalesce;
mod diff;
mod myers;

pub use backtrack::Move;
pub use diff::{diff, diff_moves, diff_with_config, DiffConfig};
