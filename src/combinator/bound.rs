//! Length-limiting combinators: [`Take`], [`DropFirst`], [`Until`]
//!
//! `Take` and `Until` are the tools for turning an unbounded sequence into a
//! bounded one before materializing it.

use std::fmt;

use crate::sequence::{Cursor, Multipass, Step};

/// Yields at most `n` values, then completes
///
/// Once the limit is reached the source is not pulled again.
#[derive(Debug, Clone)]
pub struct Take<S> {
    source: S,
    remaining: usize,
}

impl<S> Take<S> {
    pub(crate) fn new(source: S, n: usize) -> Self {
        Self {
            source,
            remaining: n,
        }
    }
}

impl<S: Cursor> Cursor for Take<S> {
    type Item = S::Item;

    fn advance(&mut self) -> Step<S::Item> {
        if self.remaining == 0 {
            return Step::Done;
        }
        match self.source.advance() {
            Step::Yielded(value) => {
                self.remaining -= 1;
                Step::Yielded(value)
            }
            Step::Done => {
                self.remaining = 0;
                Step::Done
            }
        }
    }
}

impl<S: Multipass> Multipass for Take<S> {
    type Item = S::Item;
    type Cursor = Take<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        Take::new(self.source.cursor(), self.remaining)
    }
}

/// Skips exactly the first value, then forwards the rest
#[derive(Debug, Clone)]
pub struct DropFirst<S> {
    source: S,
    skipped: bool,
    done: bool,
}

impl<S> DropFirst<S> {
    pub(crate) fn new(source: S) -> Self {
        Self {
            source,
            skipped: false,
            done: false,
        }
    }
}

impl<S: Cursor> Cursor for DropFirst<S> {
    type Item = S::Item;

    fn advance(&mut self) -> Step<S::Item> {
        if self.done {
            return Step::Done;
        }
        if !self.skipped {
            self.skipped = true;
            if self.source.advance().is_done() {
                self.done = true;
                return Step::Done;
            }
        }
        let step = self.source.advance();
        self.done = step.is_done();
        step
    }
}

impl<S: Multipass> Multipass for DropFirst<S> {
    type Item = S::Item;
    type Cursor = DropFirst<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        DropFirst::new(self.source.cursor())
    }
}

/// Yields values until the predicate holds, excluding the matching value
///
/// The matching value is consumed from the source and discarded. After that
/// the combinator stays complete even though the source may have more.
#[derive(Clone)]
pub struct Until<S, P> {
    source: S,
    predicate: P,
    stopped: bool,
}

impl<S, P> Until<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        Self {
            source,
            predicate,
            stopped: false,
        }
    }
}

impl<S, P> Cursor for Until<S, P>
where
    S: Cursor,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn advance(&mut self) -> Step<S::Item> {
        if self.stopped {
            return Step::Done;
        }
        match self.source.advance() {
            Step::Yielded(value) if !(self.predicate)(&value) => Step::Yielded(value),
            _ => {
                self.stopped = true;
                Step::Done
            }
        }
    }
}

impl<S, P> Multipass for Until<S, P>
where
    S: Multipass,
    P: FnMut(&S::Item) -> bool + Clone,
{
    type Item = S::Item;
    type Cursor = Until<S::Cursor, P>;

    fn cursor(&self) -> Self::Cursor {
        Until::new(self.source.cursor(), self.predicate.clone())
    }
}

impl<S: fmt::Debug, P> fmt::Debug for Until<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Until")
            .field("source", &self.source)
            .field("stopped", &self.stopped)
            .finish_non_exhaustive()
    }
}
