//! Eager materialization
//!
//! Draining a sequence only terminates if the sequence does. Bound unbounded
//! sequences with `take` or `until` first; this is not checked at runtime.

use crate::sequence::{Cursor, Step};

/// Drain a cursor into a `Vec`, preserving order
///
/// Pass `seq.cursor()` for a multipass sequence, or `&mut cursor` to drain a
/// single-pass sequence while keeping hold of it.
pub fn collect<C: Cursor>(cursor: C) -> Vec<C::Item> {
    let mut out = Vec::new();
    collect_into(cursor, &mut out);
    out
}

/// Append every remaining value to `container`, returning how many were added
pub fn collect_into<C, B>(mut cursor: C, container: &mut B) -> usize
where
    C: Cursor,
    B: Extend<C::Item>,
{
    let mut appended = 0;
    while let Step::Yielded(value) = cursor.advance() {
        container.extend(std::iter::once(value));
        appended += 1;
    }
    appended
}

/// Count the remaining values, discarding them
pub fn count<C: Cursor>(mut cursor: C) -> usize {
    let mut n = 0;
    while !cursor.advance().is_done() {
        n += 1;
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::MultipassExt;
    use crate::sequence::{from_iter, from_vec, repeat, Multipass};
    use std::collections::VecDeque;

    #[test]
    fn test_collect_preserves_order() {
        let seq = from_vec(vec![5, 3, 9]);
        assert_eq!(collect(seq.cursor()), vec![5, 3, 9]);
    }

    #[test]
    fn test_collect_into_other_container() {
        let mut deque = VecDeque::from([0]);
        let added = collect_into(from_iter(1..4), &mut deque);
        assert_eq!(added, 3);
        assert_eq!(deque, VecDeque::from([0, 1, 2, 3]));
    }

    #[test]
    fn test_partial_drain_keeps_cursor() {
        let mut cursor = from_iter(0..6);
        assert_eq!(collect(crate::combinator::take(2, &mut cursor)), vec![0, 1]);
        assert_eq!(count(&mut cursor), 4);
        assert_eq!(count(&mut cursor), 0);
    }

    #[test]
    fn test_bounded_infinite_sequence() {
        assert_eq!(count(repeat(()).take(1000).cursor()), 1000);
    }
}
