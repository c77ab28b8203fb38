use super::common::{arb_scalar, arb_value};
use proptest::prelude::*;
use restdiff::{diff_lists, Diff};
use serde_json::Value;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // Scalar lists match any permutation of themselves. (Restricted to
    // scalars: containers can match without being equal, and the greedy
    // exact phase may then pair a permutation imperfectly.)
    #[test]
    fn scalar_permutations_match(
        (expected, actual) in proptest::collection::vec(arb_scalar(), 0..8)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        prop_assert_eq!(diff_lists(&expected, Some(&actual)), (None, 0));
    }

    // Extra received items never produce a difference.
    #[test]
    fn appended_extras_are_ignored(
        expected in proptest::collection::vec(arb_value(), 0..6),
        extras in proptest::collection::vec(arb_value(), 0..6),
    ) {
        let mut actual = expected.clone();
        actual.extend(extras);
        prop_assert_eq!(diff_lists(&expected, Some(&actual)), (None, 0));
    }

    // Truncating the received list leaves exactly the tail items unmatched,
    // each reported as (item, null) at cost 1, in original order.
    #[test]
    fn truncated_actual_reports_the_tail(
        (expected, keep) in proptest::collection::vec(arb_value(), 0..8)
            .prop_flat_map(|v| {
                let len = v.len();
                (Just(v), 0..=len)
            })
    ) {
        let (diff, cost) = diff_lists(&expected, Some(&expected[..keep]));
        prop_assert_eq!(cost, expected.len() - keep);

        match diff {
            None => prop_assert_eq!(keep, expected.len()),
            Some(Diff::Array(entries)) => {
                let leftovers: Vec<Diff> = expected[keep..]
                    .iter()
                    .map(|item| Diff::Leaf(item.clone(), Value::Null))
                    .collect();
                prop_assert_eq!(entries, leftovers);
            }
            other => prop_assert!(false, "unexpected diff shape: {:?}", other),
        }
    }

    // An absent sequence is the sentinel, never confused with an empty one.
    #[test]
    fn absent_actual_is_the_sentinel(expected in proptest::collection::vec(arb_value(), 0..4)) {
        let (diff, cost) = diff_lists(&expected, None);
        prop_assert_eq!(diff, Some(Diff::Missing));
        prop_assert_eq!(cost, 1);
    }
}
