//! Lockstep combination of several sequences

use crate::sequence::{Cursor, Multipass, Step};

/// Pairs up two sequences, completing as soon as either completes
///
/// The second source is not advanced once the first has completed.
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    a: A,
    b: B,
    done: bool,
}

impl<A, B> Zip<A, B> {
    pub(crate) fn new(a: A, b: B) -> Self {
        Self { a, b, done: false }
    }
}

impl<A: Cursor, B: Cursor> Cursor for Zip<A, B> {
    type Item = (A::Item, B::Item);

    fn advance(&mut self) -> Step<Self::Item> {
        if self.done {
            return Step::Done;
        }
        let Step::Yielded(left) = self.a.advance() else {
            self.done = true;
            return Step::Done;
        };
        let Step::Yielded(right) = self.b.advance() else {
            self.done = true;
            return Step::Done;
        };
        Step::Yielded((left, right))
    }
}

impl<A: Multipass, B: Multipass> Multipass for Zip<A, B> {
    type Item = (A::Item, B::Item);
    type Cursor = Zip<A::Cursor, B::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        Zip::new(self.a.cursor(), self.b.cursor())
    }
}

/// Advances any number of same-typed sequences in lockstep
///
/// Yields one `Vec` per step holding a value from each source, in source
/// order. Zipping zero sources yields nothing.
#[derive(Debug, Clone)]
pub struct ZipAll<S> {
    sources: Vec<S>,
    done: bool,
}

impl<S> ZipAll<S> {
    pub(crate) fn new(sources: Vec<S>) -> Self {
        Self {
            sources,
            done: false,
        }
    }

    /// Number of zipped sources
    pub fn arity(&self) -> usize {
        self.sources.len()
    }
}

impl<S: Cursor> Cursor for ZipAll<S> {
    type Item = Vec<S::Item>;

    fn advance(&mut self) -> Step<Self::Item> {
        if self.done || self.sources.is_empty() {
            return Step::Done;
        }
        let mut row = Vec::with_capacity(self.sources.len());
        for source in &mut self.sources {
            match source.advance() {
                Step::Yielded(value) => row.push(value),
                Step::Done => {
                    self.done = true;
                    return Step::Done;
                }
            }
        }
        Step::Yielded(row)
    }
}

impl<S: Multipass> Multipass for ZipAll<S> {
    type Item = Vec<S::Item>;
    type Cursor = ZipAll<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        ZipAll::new(self.sources.iter().map(Multipass::cursor).collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::combinator::testing::Relapsing;
    use crate::combinator::{zip_all, CursorExt, MultipassExt};
    use crate::sequence::{from_iter, from_vec, repeat, successors, Cursor, Step};

    #[test]
    fn test_zip_stays_done() {
        let mut pairs = Relapsing::default().zip(from_iter(0..10));
        assert_eq!(pairs.advance(), Step::Yielded((1, 0)));
        assert_eq!(pairs.advance(), Step::Done);
        assert_eq!(pairs.advance(), Step::Done);
    }

    #[test]
    fn test_zip_stops_at_shortest() {
        let pairs = from_vec(vec![1, 2, 3]).zip(repeat('z'));
        assert_eq!(pairs.collect_vec(), vec![(1, 'z'), (2, 'z'), (3, 'z')]);
    }

    #[test]
    fn test_zip_does_not_overpull_second() {
        let mut second = from_iter(10..20);
        let pairs = from_iter(0..2).zip(&mut second).collect_vec();
        assert_eq!(pairs, vec![(0, 10), (1, 11)]);
        assert_eq!(second.advance(), Step::Yielded(12));
    }

    #[test]
    fn test_zip_all_rows() {
        let succ = |n: &u32| Some(n + 1);
        let sources = vec![
            successors(Some(0), succ).take(4),
            successors(Some(1), succ).take(4),
            successors(Some(0), succ).take(2),
        ];
        let rows = zip_all(sources);
        assert_eq!(rows.arity(), 3);
        assert_eq!(rows.collect_vec(), vec![vec![0, 1, 0], vec![1, 2, 1]]);
    }

    #[test]
    fn test_zip_all_of_nothing_is_empty() {
        let rows = zip_all(Vec::<crate::sequence::FromVec<u8>>::new());
        assert!(rows.collect_vec().is_empty());
    }
}
