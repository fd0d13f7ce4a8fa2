//! Predicate filtering

use std::fmt;

use crate::sequence::{Cursor, Multipass, Step};

/// Yields only the values satisfying a predicate, in their original order
#[derive(Clone)]
pub struct Filter<S, P> {
    source: S,
    predicate: P,
    done: bool,
}

impl<S, P> Filter<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        Self {
            source,
            predicate,
            done: false,
        }
    }
}

impl<S, P> Cursor for Filter<S, P>
where
    S: Cursor,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn advance(&mut self) -> Step<S::Item> {
        if self.done {
            return Step::Done;
        }
        // Rejected values are discarded immediately, so space stays O(1)
        loop {
            match self.source.advance() {
                Step::Yielded(value) if (self.predicate)(&value) => return Step::Yielded(value),
                Step::Yielded(_) => continue,
                Step::Done => {
                    self.done = true;
                    return Step::Done;
                }
            }
        }
    }
}

impl<S, P> Multipass for Filter<S, P>
where
    S: Multipass,
    P: FnMut(&S::Item) -> bool + Clone,
{
    type Item = S::Item;
    type Cursor = Filter<S::Cursor, P>;

    fn cursor(&self) -> Self::Cursor {
        Filter::new(self.source.cursor(), self.predicate.clone())
    }
}

impl<S: fmt::Debug, P> fmt::Debug for Filter<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("source", &self.source)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}
