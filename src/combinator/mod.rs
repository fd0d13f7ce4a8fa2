//! Lazy sequence combinators
//!
//! Every combinator is one struct serving both capabilities:
//! - over a [`Cursor`] source it is itself a cursor that owns and forwards
//!   the source cursor's state;
//! - over a [`Multipass`] source it is itself multipass, and each of its
//!   cursors spawns a fresh source cursor.
//!
//! So wrapping never changes the capability of the source. Nothing runs until
//! a cursor is advanced, and each advance uses O(1) extra space (`ZipAll`:
//! O(k) for k sources).
//!
//! The extension traits [`CursorExt`] and [`MultipassExt`] are the usual way
//! to build chains. The free functions mirror them in `(params.., source)`
//! order; because they accept either capability, closures passed to them
//! need annotated parameter types.

mod bound;
mod chain;
mod filter;
mod map;
mod stateful;
mod zip;

pub use bound::{DropFirst, Take, Until};
pub use chain::Chain;
pub use filter::Filter;
pub use map::{Inspect, Map};
pub use stateful::StatefulMap;
pub use zip::{Zip, ZipAll};

use crate::sequence::{Cursor, Iter, Multipass};

/// `Map(f, source)`
pub fn map<S, F>(f: F, source: S) -> Map<S, F> {
    Map::new(source, f)
}

/// `Filter(pred, source)`
pub fn filter<S, P>(predicate: P, source: S) -> Filter<S, P> {
    Filter::new(source, predicate)
}

/// `Take(n, source)`
pub fn take<S>(n: usize, source: S) -> Take<S> {
    Take::new(source, n)
}

/// `Drop(source)`: skip the first value
pub fn drop_first<S>(source: S) -> DropFirst<S> {
    DropFirst::new(source)
}

/// `Until(pred, source)`
pub fn until<S, P>(predicate: P, source: S) -> Until<S, P> {
    Until::new(source, predicate)
}

/// `StatefulMap(fn, seed, source)`
pub fn stateful_map<S, St, F>(f: F, seed: St, source: S) -> StatefulMap<S, St, F> {
    StatefulMap::new(source, seed, f)
}

/// `Zip(a, b)`
pub fn zip<A, B>(a: A, b: B) -> Zip<A, B> {
    Zip::new(a, b)
}

/// `Zip(sources...)` over any number of same-typed sources
pub fn zip_all<S>(sources: Vec<S>) -> ZipAll<S> {
    ZipAll::new(sources)
}

/// Concatenate two sequences
pub fn chain<A, B>(first: A, second: B) -> Chain<A, B> {
    Chain::new(first, second)
}

/// Combinator methods for cursors (single-pass sequences)
pub trait CursorExt: Cursor + Sized {
    /// Transform each value
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        F: FnMut(Self::Item) -> U,
    {
        Map::new(self, f)
    }

    /// Keep only values satisfying `predicate`
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Yield at most `n` values
    fn take(self, n: usize) -> Take<Self> {
        Take::new(self, n)
    }

    /// Skip the first value
    fn drop_first(self) -> DropFirst<Self> {
        DropFirst::new(self)
    }

    /// Yield values until `predicate` holds (exclusive)
    fn until<P>(self, predicate: P) -> Until<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Until::new(self, predicate)
    }

    /// Thread an accumulator through the values
    fn stateful_map<St, U, F>(self, seed: St, f: F) -> StatefulMap<Self, St, F>
    where
        F: FnMut(St, Self::Item) -> (St, U),
    {
        StatefulMap::new(self, seed, f)
    }

    /// Advance in lockstep with another cursor
    fn zip<B: Cursor>(self, other: B) -> Zip<Self, B> {
        Zip::new(self, other)
    }

    /// Continue with another cursor once this one completes
    fn chain<B>(self, other: B) -> Chain<Self, B>
    where
        B: Cursor<Item = Self::Item>,
    {
        Chain::new(self, other)
    }

    /// Observe each value without changing it
    fn inspect<F>(self, f: F) -> Inspect<Self, F>
    where
        F: FnMut(&Self::Item),
    {
        Inspect::new(self, f)
    }

    /// Drain into a `Vec`; diverges on an unbounded cursor
    fn collect_vec(self) -> Vec<Self::Item> {
        crate::materialize::collect(self)
    }

    /// Adapt into a standard iterator
    fn iter(self) -> Iter<Self> {
        Iter::new(self)
    }
}

impl<C: Cursor> CursorExt for C {}

/// Combinator methods for multipass sequences
///
/// Function parameters must be `Clone` so every traversal gets its own copy.
pub trait MultipassExt: Multipass + Sized {
    /// Transform each value
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        F: FnMut(Self::Item) -> U + Clone,
    {
        Map::new(self, f)
    }

    /// Keep only values satisfying `predicate`
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: FnMut(&Self::Item) -> bool + Clone,
    {
        Filter::new(self, predicate)
    }

    /// Yield at most `n` values
    fn take(self, n: usize) -> Take<Self> {
        Take::new(self, n)
    }

    /// Skip the first value
    fn drop_first(self) -> DropFirst<Self> {
        DropFirst::new(self)
    }

    /// Yield values until `predicate` holds (exclusive)
    fn until<P>(self, predicate: P) -> Until<Self, P>
    where
        P: FnMut(&Self::Item) -> bool + Clone,
    {
        Until::new(self, predicate)
    }

    /// Thread an accumulator through the values; each cursor starts at `seed`
    fn stateful_map<St, U, F>(self, seed: St, f: F) -> StatefulMap<Self, St, F>
    where
        St: Clone,
        F: FnMut(St, Self::Item) -> (St, U) + Clone,
    {
        StatefulMap::new(self, seed, f)
    }

    /// Advance in lockstep with another multipass sequence
    fn zip<B: Multipass>(self, other: B) -> Zip<Self, B> {
        Zip::new(self, other)
    }

    /// Continue with another multipass sequence
    fn chain<B>(self, other: B) -> Chain<Self, B>
    where
        B: Multipass<Item = Self::Item>,
    {
        Chain::new(self, other)
    }

    /// Observe each value without changing it
    fn inspect<F>(self, f: F) -> Inspect<Self, F>
    where
        F: FnMut(&Self::Item) + Clone,
    {
        Inspect::new(self, f)
    }

    /// Materialize one fresh traversal; diverges on an unbounded sequence
    fn collect_vec(&self) -> Vec<Self::Item> {
        crate::materialize::collect(self.cursor())
    }
}

impl<M: Multipass> MultipassExt for M {}

#[cfg(test)]
pub(crate) mod testing {
    use crate::sequence::{Cursor, Step};

    /// Yields 1, reports `Done`, then yields 3 if pulled again
    #[derive(Debug, Default)]
    pub(crate) struct Relapsing {
        calls: u32,
    }

    impl Cursor for Relapsing {
        type Item = i32;

        fn advance(&mut self) -> Step<i32> {
            self.calls += 1;
            match self.calls {
                1 => Step::Yielded(1),
                3 => Step::Yielded(3),
                _ => Step::Done,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{from_iter, from_vec, successors};

    #[test]
    fn test_free_functions_match_methods() {
        let source = from_vec(vec![1, 2, 3, 4, 5, 6]);
        let chained = take(
            2,
            filter(|n: &i32| n % 2 == 0, map(|n: i32| n * 3, source.clone())),
        );
        let method = source.map(|n| n * 3).filter(|n| n % 2 == 0).take(2);
        assert_eq!(chained.collect_vec(), method.collect_vec());
        assert_eq!(chained.collect_vec(), vec![6, 12]);
    }

    #[test]
    fn test_capability_is_preserved() {
        fn assert_multipass<M: Multipass>(_: &M) {}
        fn assert_cursor<C: Cursor>(_: &C) {}

        let multi = from_vec(vec![1u8]).map(|n| n + 1).drop_first().take(1);
        assert_multipass(&multi);

        let single = from_iter(vec![1u8]).map(|n| n + 1).drop_first().take(1);
        assert_cursor(&single);
    }

    #[test]
    fn test_pipeline_over_infinite_source() {
        let naturals = successors(Some(1u64), |n| Some(n + 1));
        let first_squares = naturals
            .map(|n| n * n)
            .until(|sq| *sq > 50)
            .stateful_map(0u64, |sum, sq| (sum + sq, (sq, sum + sq)));
        assert_eq!(
            first_squares.collect_vec(),
            vec![(1, 1), (4, 5), (9, 14), (16, 30), (25, 55), (36, 91), (49, 140)]
        );
    }

    #[test]
    fn test_until_free_fn_and_drop_first() {
        let seq = from_vec(vec!['a', 'b', '!', 'c']);
        let upto_bang = until(|c: &char| *c == '!', drop_first(seq));
        assert_eq!(upto_bang.collect_vec(), vec!['b']);
    }

    #[test]
    fn test_zip_and_chain_free_fns() {
        let left = from_vec(vec![1, 2]);
        let right = from_vec(vec!['x', 'y', 'z']);
        assert_eq!(zip(left.clone(), right).collect_vec(), vec![(1, 'x'), (2, 'y')]);
        assert_eq!(chain(left.clone(), left).collect_vec(), vec![1, 2, 1, 2]);
        assert_eq!(
            stateful_map(|acc: u32, n: u32| (acc * n, acc * n), 1u32, from_vec(vec![2, 3, 4]))
                .collect_vec(),
            vec![2, 6, 24]
        );
    }
}
