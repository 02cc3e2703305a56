//! Property-based tests for the diff engine.
//!
//! Small alphabets keep matches frequent, so inputs exercise ties, long
//! snakes and interleaved runs rather than mostly disjoint sequences.

use myers_ses::{granular, slices, validate, Change, DiffStats};
use proptest::prelude::*;

/// Apply a change list to `a`, taking inserted elements from `b`.
fn apply<T: Clone>(a: &[T], b: &[T], changes: &[Change]) -> Vec<T> {
    let mut out = Vec::with_capacity(b.len());
    let mut cursor = 0;
    for change in changes {
        out.extend_from_slice(&a[cursor..change.a]);
        out.extend_from_slice(&b[change.b..change.end_b()]);
        cursor = change.end_a();
    }
    out.extend_from_slice(&a[cursor..]);
    out
}

/// Reference edit distance through the LCS dynamic program.
fn reference_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let mut dp = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for i in 0..a.len() {
        for j in 0..b.len() {
            dp[i + 1][j + 1] = if a[i] == b[j] {
                dp[i][j] + 1
            } else {
                dp[i][j + 1].max(dp[i + 1][j])
            };
        }
    }
    a.len() + b.len() - 2 * dp[a.len()][b.len()]
}

fn sequence() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..4, 0..24)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn changes_rebuild_target(a in sequence(), b in sequence()) {
        let changes = slices(&a, &b);
        prop_assert_eq!(apply(&a, &b, &changes), b);
    }

    #[test]
    fn edit_distance_is_minimal(a in sequence(), b in sequence()) {
        let changes = slices(&a, &b);
        let stats = DiffStats::from_changes(&changes);
        prop_assert_eq!(stats.edit_distance(), reference_distance(&a, &b));
    }

    #[test]
    fn changes_are_well_formed(a in sequence(), b in sequence()) {
        let changes = slices(&a, &b);
        prop_assert_eq!(validate(&changes, a.len(), b.len()), Ok(()));
    }

    #[test]
    fn identical_sequences_have_no_changes(a in sequence()) {
        prop_assert!(slices(&a, &a).is_empty());
    }

    #[test]
    fn swapped_arguments_stay_minimal(a in sequence(), b in sequence()) {
        let forward = DiffStats::from_changes(&slices(&a, &b));
        let backward_changes = slices(&b, &a);
        let backward = DiffStats::from_changes(&backward_changes);

        prop_assert_eq!(forward.edit_distance(), backward.edit_distance());
        prop_assert_eq!(forward.deleted, backward.inserted);
        prop_assert_eq!(forward.inserted, backward.deleted);
        prop_assert_eq!(apply(&b, &a, &backward_changes), a);
    }

    #[test]
    fn granular_output_still_rebuilds(a in sequence(), b in sequence(), g in 0usize..6) {
        let changes = granular(g, &slices(&a, &b));
        prop_assert_eq!(validate(&changes, a.len(), b.len()), Ok(()));
        prop_assert_eq!(apply(&a, &b, &changes), b);
    }

    #[test]
    fn equal_only_sees_valid_indices(a in sequence(), b in sequence()) {
        let eq = |i: usize, j: usize| {
            assert!(i < a.len() && j < b.len());
            a[i] == b[j]
        };
        let changes = myers_ses::diff(a.len(), b.len(), &eq);
        prop_assert_eq!(changes, slices(&a, &b));
    }
}
