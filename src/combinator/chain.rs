//! Concatenation

use crate::sequence::{Cursor, Multipass, Step};

/// Drains the first sequence, then the second
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: A,
    second: B,
    first_done: bool,
    done: bool,
}

impl<A, B> Chain<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Self {
            first,
            second,
            first_done: false,
            done: false,
        }
    }
}

impl<A, B> Cursor for Chain<A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    type Item = A::Item;

    fn advance(&mut self) -> Step<A::Item> {
        if self.done {
            return Step::Done;
        }
        if !self.first_done {
            match self.first.advance() {
                Step::Yielded(value) => return Step::Yielded(value),
                Step::Done => self.first_done = true,
            }
        }
        let step = self.second.advance();
        self.done = step.is_done();
        step
    }
}

impl<A, B> Multipass for Chain<A, B>
where
    A: Multipass,
    B: Multipass<Item = A::Item>,
{
    type Item = A::Item;
    type Cursor = Chain<A::Cursor, B::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        Chain::new(self.first.cursor(), self.second.cursor())
    }
}
