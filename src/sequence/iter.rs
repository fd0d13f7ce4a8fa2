//! Bridge from cursors to `std::iter::Iterator`

use std::iter::FusedIterator;

use super::Cursor;

/// Iterator over the values of a cursor
///
/// Fused, since cursors terminate idempotently.
#[derive(Debug, Clone)]
pub struct Iter<C> {
    cursor: C,
}

impl<C: Cursor> Iter<C> {
    /// Wrap a cursor
    pub fn new(cursor: C) -> Self {
        Self { cursor }
    }

    /// Recover the wrapped cursor
    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for Iter<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.advance().into_option()
    }
}

impl<C: Cursor> FusedIterator for Iter<C> {}
