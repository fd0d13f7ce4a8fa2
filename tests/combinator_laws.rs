use proptest::prelude::*;
use lazycycle::combinator::{self, CursorExt, MultipassExt};
use lazycycle::materialize::{collect, count};
use lazycycle::sequence::{from_iter, from_vec, successors, Multipass};

proptest! {
    #[test]
    fn collect_preserves_length_and_order(items in proptest::collection::vec(any::<i32>(), 0..64)) {
        let seq = from_vec(items.clone());
        prop_assert_eq!(collect(seq.cursor()), items.clone());
        prop_assert_eq!(collect(from_iter(items.clone())), items);
    }

    #[test]
    fn map_composes(items in proptest::collection::vec(-1000i64..1000, 0..64)) {
        let f = |n: i64| n * 3 + 1;
        let g = |n: i64| n - 7;
        let seq = from_vec(items);
        let nested = seq.clone().map(f).map(g).collect_vec();
        let composed = seq.map(move |n| g(f(n))).collect_vec();
        prop_assert_eq!(nested, composed);
    }

    #[test]
    fn filter_keeps_only_matching(items in proptest::collection::vec(any::<u16>(), 0..64)) {
        let seq = from_vec(items.clone());
        let kept = seq.filter(|n| n % 3 == 0).collect_vec();
        prop_assert!(kept.len() <= items.len());
        prop_assert!(kept.iter().all(|n| n % 3 == 0));
        let expected: Vec<u16> = items.into_iter().filter(|n| n % 3 == 0).collect();
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn take_yields_min_of_bound_and_length(
        items in proptest::collection::vec(any::<u8>(), 0..32),
        bound in 0usize..48,
    ) {
        let seq = from_vec(items.clone());
        prop_assert_eq!(count(seq.take(bound).cursor()), bound.min(items.len()));
    }

    #[test]
    fn take_bounds_infinite_sequences(bound in 0usize..256) {
        let naturals = successors(Some(0u64), |n| Some(n + 1));
        let prefix = naturals.take(bound).collect_vec();
        prop_assert_eq!(prefix, (0..bound as u64).collect::<Vec<_>>());
    }

    #[test]
    fn drop_first_removes_head(items in proptest::collection::vec(any::<i8>(), 0..32)) {
        let rest = from_vec(items.clone()).drop_first().collect_vec();
        prop_assert_eq!(rest, items.iter().skip(1).copied().collect::<Vec<_>>());
    }

    #[test]
    fn until_stops_before_match(items in proptest::collection::vec(0u8..10, 0..32)) {
        let prefix = from_vec(items.clone()).until(|n| *n == 0).collect_vec();
        let expected: Vec<u8> = items.iter().copied().take_while(|n| *n != 0).collect();
        prop_assert_eq!(prefix, expected);
    }

    #[test]
    fn zip_is_as_short_as_shorter_side(
        left in proptest::collection::vec(any::<u8>(), 0..32),
        right in proptest::collection::vec(any::<u8>(), 0..32),
    ) {
        let zipped = from_vec(left.clone()).zip(from_vec(right.clone())).collect_vec();
        let expected: Vec<(u8, u8)> = left.into_iter().zip(right).collect();
        prop_assert_eq!(zipped, expected);
    }

    #[test]
    fn stateful_map_computes_running_sums(items in proptest::collection::vec(-100i64..100, 0..64)) {
        let sums = from_vec(items.clone())
            .stateful_map(0i64, |total, n| (total + n, total + n))
            .collect_vec();
        let mut total = 0;
        let expected: Vec<i64> = items
            .into_iter()
            .map(|n| {
                total += n;
                total
            })
            .collect();
        prop_assert_eq!(sums, expected);
    }

    #[test]
    fn multipass_cursors_are_independent(
        items in proptest::collection::vec(any::<u32>(), 1..32),
        lead in 0usize..32,
    ) {
        let seq = from_vec(items.clone()).map(|n| n.wrapping_mul(2));
        let mut ahead = seq.cursor();
        for _ in 0..lead {
            let _ = lazycycle::Cursor::advance(&mut ahead);
        }
        let fresh = collect(seq.cursor());
        prop_assert_eq!(fresh, items.iter().map(|n| n.wrapping_mul(2)).collect::<Vec<_>>());
    }
}

#[test]
fn test_free_functions_compose_on_cursors() {
    let cursor = from_iter(1..=10);
    let evens = combinator::filter(|n: &i32| n % 2 == 0, cursor);
    let squares = combinator::map(|n: i32| n * n, evens);
    assert_eq!(collect(combinator::take(3, squares)), vec![4, 16, 36]);
}

#[test]
fn test_single_pass_drains_once() {
    let mut cursor = from_iter(vec!['a', 'b', 'c']);
    assert_eq!((&mut cursor).take(2).collect_vec(), vec!['a', 'b']);
    assert_eq!(cursor.collect_vec(), vec!['c']);
}
