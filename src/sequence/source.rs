//! Base producers of sequences
//!
//! Multipass producers keep only their origin (a shared slice, a seed) and
//! build a fresh cursor from it on demand. Single-pass producers wrap state
//! that cannot be replayed.

use std::fmt;
use std::iter::Fuse;
use std::rc::Rc;

use super::{Cursor, Multipass, Step};

/// Multipass sequence over an owned, shared slice of values
#[derive(Debug, Clone)]
pub struct FromVec<T> {
    items: Rc<[T]>,
}

/// Cursor over a [`FromVec`]
#[derive(Debug, Clone)]
pub struct VecCursor<T> {
    items: Rc<[T]>,
    index: usize,
}

/// Build a multipass sequence from a vector
pub fn from_vec<T>(items: Vec<T>) -> FromVec<T> {
    FromVec {
        items: Rc::from(items),
    }
}

/// Build a multipass sequence by cloning a slice
pub fn from_slice<T: Clone>(items: &[T]) -> FromVec<T> {
    FromVec {
        items: Rc::from(items),
    }
}

/// Multipass sequence with exactly one value
pub fn once<T>(value: T) -> FromVec<T> {
    from_vec(vec![value])
}

/// Multipass sequence with no values
pub fn empty<T>() -> FromVec<T> {
    from_vec(Vec::new())
}

impl<T> FromVec<T> {
    /// Number of values in the sequence
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the sequence has no values
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Clone> Multipass for FromVec<T> {
    type Item = T;
    type Cursor = VecCursor<T>;

    fn cursor(&self) -> Self::Cursor {
        VecCursor {
            items: Rc::clone(&self.items),
            index: 0,
        }
    }
}

impl<T: Clone> Cursor for VecCursor<T> {
    type Item = T;

    fn advance(&mut self) -> Step<T> {
        match self.items.get(self.index) {
            Some(value) => {
                self.index += 1;
                Step::Yielded(value.clone())
            }
            None => Step::Done,
        }
    }
}

/// Single-pass sequence draining a standard iterator
#[derive(Debug, Clone)]
pub struct FromIter<I> {
    iter: Fuse<I>,
}

/// Wrap an iterator as a single-pass sequence
///
/// The iterator is fused so that completion stays sticky even if the
/// underlying iterator would resume.
pub fn from_iter<I: IntoIterator>(iter: I) -> FromIter<I::IntoIter> {
    FromIter {
        iter: iter.into_iter().fuse(),
    }
}

impl<I: Iterator> Cursor for FromIter<I> {
    type Item = I::Item;

    #[inline]
    fn advance(&mut self) -> Step<I::Item> {
        self.iter.next().into()
    }
}

/// Multipass sequence generated from a seed and a successor function
///
/// Yields the seed, then `next(&seed)`, and so on until `next` returns
/// `None`. Infinite when `next` never does.
#[derive(Clone)]
pub struct Successors<T, F> {
    first: Option<T>,
    next: F,
}

/// Cursor over a [`Successors`] sequence
#[derive(Clone)]
pub struct SuccessorsCursor<T, F> {
    pending: Option<T>,
    next: F,
}

/// Build a multipass sequence from a seed and a successor function
pub fn successors<T, F>(first: Option<T>, next: F) -> Successors<T, F>
where
    T: Clone,
    F: FnMut(&T) -> Option<T> + Clone,
{
    Successors { first, next }
}

impl<T, F> Multipass for Successors<T, F>
where
    T: Clone,
    F: FnMut(&T) -> Option<T> + Clone,
{
    type Item = T;
    type Cursor = SuccessorsCursor<T, F>;

    fn cursor(&self) -> Self::Cursor {
        SuccessorsCursor {
            pending: self.first.clone(),
            next: self.next.clone(),
        }
    }
}

impl<T, F> Cursor for SuccessorsCursor<T, F>
where
    F: FnMut(&T) -> Option<T>,
{
    type Item = T;

    fn advance(&mut self) -> Step<T> {
        match self.pending.take() {
            Some(current) => {
                self.pending = (self.next)(&current);
                Step::Yielded(current)
            }
            None => Step::Done,
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Successors<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Successors")
            .field("first", &self.first)
            .finish_non_exhaustive()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for SuccessorsCursor<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuccessorsCursor")
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

/// Infinite multipass sequence repeating one value
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    value: T,
}

/// Cursor over a [`Repeat`] sequence
#[derive(Debug, Clone)]
pub struct RepeatCursor<T> {
    value: T,
}

/// Build an infinite sequence of clones of `value`
pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat { value }
}

impl<T: Clone> Multipass for Repeat<T> {
    type Item = T;
    type Cursor = RepeatCursor<T>;

    fn cursor(&self) -> Self::Cursor {
        RepeatCursor {
            value: self.value.clone(),
        }
    }
}

impl<T: Clone> Cursor for RepeatCursor<T> {
    type Item = T;

    #[inline]
    fn advance(&mut self) -> Step<T> {
        Step::Yielded(self.value.clone())
    }
}

/// Multipass sequence defined by a seed state and a step function
///
/// Each cursor starts from a clone of the seed. This is the explicit-state
/// form of a generator: all locals live in the state value and the step
/// function resumes from them.
#[derive(Clone)]
pub struct Unfold<St, F> {
    seed: St,
    step: F,
}

/// Build a multipass sequence from a seed state and a step function
pub fn unfold<St, F, T>(seed: St, step: F) -> Unfold<St, F>
where
    St: Clone,
    F: FnMut(&mut St) -> Step<T> + Clone,
{
    Unfold { seed, step }
}

impl<St, F, T> Multipass for Unfold<St, F>
where
    St: Clone,
    F: FnMut(&mut St) -> Step<T> + Clone,
{
    type Item = T;
    type Cursor = Generator<St, F>;

    fn cursor(&self) -> Self::Cursor {
        generator(self.seed.clone(), self.step.clone())
    }
}

impl<St: fmt::Debug, F> fmt::Debug for Unfold<St, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unfold")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

/// Single-pass generator: explicit state plus a step function
///
/// The step function is never called again after it has returned
/// [`Step::Done`]; the state is dropped at that point.
pub struct Generator<St, F> {
    state: GeneratorState<St>,
    step: F,
}

#[derive(Debug, Clone)]
enum GeneratorState<St> {
    Active(St),
    Finished,
}

/// Build a single-pass generator from a state and a step function
pub fn generator<St, F, T>(state: St, step: F) -> Generator<St, F>
where
    F: FnMut(&mut St) -> Step<T>,
{
    Generator {
        state: GeneratorState::Active(state),
        step,
    }
}

impl<St, F> Generator<St, F> {
    /// Whether the step function has reported completion
    pub fn is_finished(&self) -> bool {
        matches!(self.state, GeneratorState::Finished)
    }
}

impl<St, F, T> Cursor for Generator<St, F>
where
    F: FnMut(&mut St) -> Step<T>,
{
    type Item = T;

    fn advance(&mut self) -> Step<T> {
        let GeneratorState::Active(state) = &mut self.state else {
            return Step::Done;
        };
        match (self.step)(state) {
            Step::Yielded(value) => Step::Yielded(value),
            Step::Done => {
                self.state = GeneratorState::Finished;
                Step::Done
            }
        }
    }
}

impl<St: fmt::Debug, F> fmt::Debug for Generator<St, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<St: Clone, F: Clone> Clone for Generator<St, F> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            step: self.step.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::{CursorExt, MultipassExt};

    #[test]
    fn test_successors_stops_on_none() {
        let halving = successors(Some(40u32), |&n| (n > 5).then_some(n / 2));
        assert_eq!(halving.collect_vec(), vec![40, 20, 10, 5]);
        // replayable
        assert_eq!(halving.collect_vec(), vec![40, 20, 10, 5]);
    }

    #[test]
    fn test_repeat_is_infinite() {
        let mut cursor = repeat('x').cursor();
        for _ in 0..100 {
            assert_eq!(cursor.advance(), Step::Yielded('x'));
        }
    }

    #[test]
    fn test_generator_counts_down() {
        // explicit state machine: (remaining, emitted_header)
        let mut countdown = generator((3u8, false), |(remaining, header)| {
            if !*header {
                *header = true;
                return Step::Yielded("start".to_string());
            }
            if *remaining == 0 {
                return Step::Done;
            }
            *remaining -= 1;
            Step::Yielded(remaining.to_string())
        });

        assert!(!countdown.is_finished());
        let values = (&mut countdown).collect_vec();
        assert_eq!(values, vec!["start", "2", "1", "0"]);
        assert!(countdown.is_finished());
        assert_eq!(countdown.advance(), Step::Done);
    }

    #[test]
    fn test_unfold_replays_seed() {
        let fib = unfold((0u64, 1u64), |(a, b)| {
            let current = *a;
            *a = *b;
            *b += current;
            Step::Yielded(current)
        });

        assert_eq!(fib.clone().take(7).collect_vec(), vec![0, 1, 1, 2, 3, 5, 8]);
        assert_eq!(fib.take(3).collect_vec(), vec![0, 1, 1]);
    }

    #[test]
    fn test_from_iter_is_fused() {
        let mut flaky = {
            let mut calls = 0;
            std::iter::from_fn(move || {
                calls += 1;
                // None on the second call, then Some again
                (calls != 2).then_some(calls)
            })
        };
        assert_eq!(flaky.next(), Some(1));

        let mut cursor = from_iter(flaky);
        assert_eq!(cursor.advance(), Step::Done);
        assert_eq!(cursor.advance(), Step::Done);
    }

    #[test]
    fn test_once_and_empty() {
        assert_eq!(once(7).collect_vec(), vec![7]);
        assert!(empty::<u8>().is_empty());
        assert_eq!(from_slice(&[1, 2]).len(), 2);
    }
}
