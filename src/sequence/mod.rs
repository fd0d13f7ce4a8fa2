//! Sequence and cursor protocol
//!
//! A [`Cursor`] is the single-method traversal primitive: every call to
//! [`Cursor::advance`] either yields the next value or reports completion.
//! Completion is sticky. Once a cursor has returned [`Step::Done`] it keeps
//! returning it.
//!
//! Sequences come in two capabilities:
//! - [`Multipass`]: `cursor(&self)` hands out a fresh, independent cursor that
//!   replays the sequence from its origin.
//! - [`SinglePass`]: the sequence *is* its cursor. `cursor(&mut self)` returns
//!   the same object, so consumption continues where it left off.
//!
//! The two are separate traits so one can never be passed where the other is
//! expected. [`AnySequence`] is the runtime-tagged form for callers that only
//! learn the capability dynamically.

mod iter;
pub mod source;

pub use iter::Iter;
pub use source::{
    empty, from_iter, from_slice, from_vec, generator, once, repeat, successors, unfold, FromIter,
    FromVec, Generator, Repeat, RepeatCursor, Successors, SuccessorsCursor, Unfold, VecCursor,
};

use std::fmt;
use std::rc::Rc;

/// Outcome of a single [`Cursor::advance`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step<T> {
    /// The cursor produced its next value
    Yielded(T),

    /// The cursor is exhausted (and stays exhausted)
    Done,
}

impl<T> Step<T> {
    /// Whether this step reports completion
    #[inline]
    pub fn is_done(&self) -> bool {
        matches!(self, Step::Done)
    }

    /// Convert into an `Option`, `None` meaning completion
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Step::Yielded(value) => Some(value),
            Step::Done => None,
        }
    }

    /// Borrow the yielded value, if any
    #[inline]
    pub fn as_ref(&self) -> Step<&T> {
        match self {
            Step::Yielded(value) => Step::Yielded(value),
            Step::Done => Step::Done,
        }
    }

    /// Transform the yielded value
    #[inline]
    pub fn map<U, F>(self, f: F) -> Step<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Step::Yielded(value) => Step::Yielded(f(value)),
            Step::Done => Step::Done,
        }
    }
}

impl<T> From<Option<T>> for Step<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Step::Yielded(value),
            None => Step::Done,
        }
    }
}

/// Stateful traversal primitive
///
/// Implementations must terminate idempotently: after the first
/// [`Step::Done`] every further call returns [`Step::Done`].
///
/// A cursor is exclusively owned state. Lending one cursor to two
/// independent consumers interleaves their reads and is a caller error.
pub trait Cursor {
    /// Type of the values produced
    type Item;

    /// Produce the next value or report completion
    fn advance(&mut self) -> Step<Self::Item>;
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    #[inline]
    fn advance(&mut self) -> Step<Self::Item> {
        (**self).advance()
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    #[inline]
    fn advance(&mut self) -> Step<Self::Item> {
        (**self).advance()
    }
}

/// A sequence that can be traversed any number of times from its origin
///
/// Each call to [`Multipass::cursor`] returns a new cursor. Cursors obtained
/// from the same sequence never observe each other's progress.
pub trait Multipass {
    /// Type of the values produced
    type Item;

    /// Cursor type handed out for each traversal
    type Cursor: Cursor<Item = Self::Item>;

    /// Start a fresh traversal from the origin
    fn cursor(&self) -> Self::Cursor;
}

impl<M: Multipass + ?Sized> Multipass for &M {
    type Item = M::Item;
    type Cursor = M::Cursor;

    fn cursor(&self) -> Self::Cursor {
        (**self).cursor()
    }
}

impl<M: Multipass + ?Sized> Multipass for Rc<M> {
    type Item = M::Item;
    type Cursor = M::Cursor;

    fn cursor(&self) -> Self::Cursor {
        (**self).cursor()
    }
}

/// A sequence that is its own cursor and can be drained only once
///
/// Every [`Cursor`] is a single-pass sequence.
pub trait SinglePass: Cursor {
    /// Return the sequence itself; traversal resumes where it stopped
    fn cursor(&mut self) -> &mut Self {
        self
    }
}

impl<C: Cursor + ?Sized> SinglePass for C {}

/// Traversal capability of a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum Capability {
    /// Fresh independent cursor per request
    Multipass,

    /// One shared cursor, drained once
    SinglePass,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Multipass => f.write_str("multipass"),
            Capability::SinglePass => f.write_str("single-pass"),
        }
    }
}

/// Boxed cursor trait object
pub type BoxCursor<'a, T> = Box<dyn Cursor<Item = T> + 'a>;

/// Runtime-tagged sequence
///
/// Used where the traversal capability is chosen dynamically, e.g. when a
/// detection strategy is picked from configuration.
pub enum AnySequence<'a, T> {
    /// Factory producing a fresh cursor per call
    Multipass(Box<dyn Fn() -> BoxCursor<'a, T> + 'a>),

    /// The single cursor this sequence consists of
    SinglePass(BoxCursor<'a, T>),
}

impl<'a, T: 'a> AnySequence<'a, T> {
    /// Erase a multipass sequence
    pub fn multipass<M>(sequence: M) -> Self
    where
        M: Multipass<Item = T> + 'a,
        M::Cursor: 'a,
    {
        AnySequence::Multipass(Box::new(move || Box::new(sequence.cursor()) as BoxCursor<'a, T>))
    }

    /// Erase a single-pass sequence
    pub fn single_pass<C>(cursor: C) -> Self
    where
        C: Cursor<Item = T> + 'a,
    {
        AnySequence::SinglePass(Box::new(cursor))
    }

    /// Declared capability
    pub fn capability(&self) -> Capability {
        match self {
            AnySequence::Multipass(_) => Capability::Multipass,
            AnySequence::SinglePass(_) => Capability::SinglePass,
        }
    }

    /// Obtain a cursor according to the declared capability
    ///
    /// A multipass variant starts a fresh traversal. A single-pass variant
    /// lends out its one cursor, so progress made through the returned value
    /// is kept.
    pub fn cursor(&mut self) -> BoxCursor<'_, T> {
        match self {
            AnySequence::Multipass(factory) => factory(),
            AnySequence::SinglePass(cursor) => Box::new(cursor.as_mut()),
        }
    }

    /// View a multipass variant through the [`Multipass`] trait
    pub fn as_multipass(&self) -> Option<Replay<'_, 'a, T>> {
        match self {
            AnySequence::Multipass(factory) => Some(Replay {
                factory: factory.as_ref(),
            }),
            AnySequence::SinglePass(_) => None,
        }
    }
}

impl<T> fmt::Debug for AnySequence<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnySequence::Multipass(_) => f.write_str("AnySequence::Multipass(..)"),
            AnySequence::SinglePass(_) => f.write_str("AnySequence::SinglePass(..)"),
        }
    }
}

/// Borrowed multipass view of an [`AnySequence`]
pub struct Replay<'s, 'a, T> {
    factory: &'s (dyn Fn() -> BoxCursor<'a, T> + 'a),
}

impl<'a, T> Multipass for Replay<'_, 'a, T> {
    type Item = T;
    type Cursor = BoxCursor<'a, T>;

    fn cursor(&self) -> Self::Cursor {
        (self.factory)()
    }
}

impl<T> fmt::Debug for Replay<'_, '_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Replay(..)")
    }
}
