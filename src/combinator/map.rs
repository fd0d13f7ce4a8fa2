//! Value-wise transforms: [`Map`] and [`Inspect`]

use std::fmt;

use crate::sequence::{Cursor, Multipass, Step};

/// Applies a function to every value, one to one, in order
#[derive(Clone)]
pub struct Map<S, F> {
    source: S,
    f: F,
    done: bool,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(source: S, f: F) -> Self {
        Self {
            source,
            f,
            done: false,
        }
    }
}

impl<S, F, U> Cursor for Map<S, F>
where
    S: Cursor,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    #[inline]
    fn advance(&mut self) -> Step<U> {
        if self.done {
            return Step::Done;
        }
        let step = self.source.advance().map(&mut self.f);
        self.done = step.is_done();
        step
    }
}

impl<S, F, U> Multipass for Map<S, F>
where
    S: Multipass,
    F: FnMut(S::Item) -> U + Clone,
{
    type Item = U;
    type Cursor = Map<S::Cursor, F>;

    fn cursor(&self) -> Self::Cursor {
        Map::new(self.source.cursor(), self.f.clone())
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Map<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("source", &self.source)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

/// Calls a function on every value as it passes through, unchanged
#[derive(Clone)]
pub struct Inspect<S, F> {
    source: S,
    f: F,
    done: bool,
}

impl<S, F> Inspect<S, F> {
    pub(crate) fn new(source: S, f: F) -> Self {
        Self {
            source,
            f,
            done: false,
        }
    }
}

impl<S, F> Cursor for Inspect<S, F>
where
    S: Cursor,
    F: FnMut(&S::Item),
{
    type Item = S::Item;

    #[inline]
    fn advance(&mut self) -> Step<S::Item> {
        if self.done {
            return Step::Done;
        }
        let step = self.source.advance();
        match &step {
            Step::Yielded(value) => (self.f)(value),
            Step::Done => self.done = true,
        }
        step
    }
}

impl<S, F> Multipass for Inspect<S, F>
where
    S: Multipass,
    F: FnMut(&S::Item) + Clone,
{
    type Item = S::Item;
    type Cursor = Inspect<S::Cursor, F>;

    fn cursor(&self) -> Self::Cursor {
        Inspect::new(self.source.cursor(), self.f.clone())
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Inspect<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inspect")
            .field("source", &self.source)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::combinator::testing::Relapsing;
    use crate::combinator::{CursorExt, MultipassExt};
    use crate::sequence::{from_iter, from_vec, Cursor, Step};

    #[test]
    fn test_map_preserves_order() {
        let squares = from_vec(vec![1, 2, 3, 4]).map(|n| n * n);
        assert_eq!(squares.collect_vec(), vec![1, 4, 9, 16]);
    }

    #[test]
    fn test_map_is_lazy() {
        let mut calls = 0;
        {
            let mut mapped = from_iter(0..10).map(|n| {
                calls += 1;
                n + 1
            });
            let _ = crate::sequence::Cursor::advance(&mut mapped);
        }
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_inspect_sees_every_value() {
        let mut seen = Vec::new();
        let out = from_iter(vec!['a', 'b']).inspect(|c| seen.push(*c)).collect_vec();
        assert_eq!(out, vec!['a', 'b']);
        assert_eq!(seen, vec!['a', 'b']);
    }

    #[test]
    fn test_map_stays_done() {
        let mut mapped = Relapsing::default().map(|n| n * 10);
        assert_eq!(mapped.advance(), Step::Yielded(10));
        assert_eq!(mapped.advance(), Step::Done);
        assert_eq!(mapped.advance(), Step::Done);
    }

    #[test]
    fn test_inspect_stays_done() {
        let mut seen = 0;
        let mut inspected = Relapsing::default().inspect(|_| seen += 1);
        assert_eq!(inspected.advance(), Step::Yielded(1));
        assert_eq!(inspected.advance(), Step::Done);
        assert_eq!(inspected.advance(), Step::Done);
        drop(inspected);
        assert_eq!(seen, 1);
    }
}
