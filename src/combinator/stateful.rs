//! Accumulating transform

use std::fmt;

use crate::sequence::{Cursor, Multipass, Step};

/// Carries an accumulator across advances
///
/// Each advance computes `(next_state, output) = f(state, value)`. This turns
/// a sequence of relative moves into a sequence of absolute positions, or a
/// sequence of numbers into running totals.
#[derive(Clone)]
pub struct StatefulMap<S, St, F> {
    source: S,
    // `None` only while `f` is running
    state: Option<St>,
    f: F,
    done: bool,
}

impl<S, St, F> StatefulMap<S, St, F> {
    pub(crate) fn new(source: S, seed: St, f: F) -> Self {
        Self {
            source,
            state: Some(seed),
            f,
            done: false,
        }
    }

    /// Current accumulator value
    pub fn state(&self) -> Option<&St> {
        self.state.as_ref()
    }
}

impl<S, St, F, U> Cursor for StatefulMap<S, St, F>
where
    S: Cursor,
    F: FnMut(St, S::Item) -> (St, U),
{
    type Item = U;

    fn advance(&mut self) -> Step<U> {
        if self.done {
            return Step::Done;
        }
        let Some(state) = self.state.take() else {
            return Step::Done;
        };
        match self.source.advance() {
            Step::Yielded(value) => {
                let (next, output) = (self.f)(state, value);
                self.state = Some(next);
                Step::Yielded(output)
            }
            Step::Done => {
                self.state = Some(state);
                self.done = true;
                Step::Done
            }
        }
    }
}

impl<S, St, F, U> Multipass for StatefulMap<S, St, F>
where
    S: Multipass,
    St: Clone,
    F: FnMut(St, S::Item) -> (St, U) + Clone,
{
    type Item = U;
    type Cursor = StatefulMap<S::Cursor, St, F>;

    fn cursor(&self) -> Self::Cursor {
        StatefulMap {
            source: self.source.cursor(),
            state: self.state.clone(),
            f: self.f.clone(),
            done: false,
        }
    }
}

impl<S: fmt::Debug, St: fmt::Debug, F> fmt::Debug for StatefulMap<S, St, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatefulMap")
            .field("source", &self.source)
            .field("state", &self.state)
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
    fn test_running_total() {
        let totals = from_vec(vec![3, 1, 4, 1, 5]).stateful_map(0, |acc, n| (acc + n, acc + n));
        assert_eq!(totals.collect_vec(), vec![3, 4, 8, 9, 14]);
        // every cursor restarts from the seed
        assert_eq!(totals.collect_vec(), vec![3, 4, 8, 9, 14]);
    }

    #[test]
    fn test_deltas_to_positions() {
        let moves = from_iter(vec![(1, 0), (0, 1), (-1, 0)]);
        let mut walk = moves.stateful_map((0i32, 0i32), |(x, y), (dx, dy)| {
            let next = (x + dx, y + dy);
            (next, next)
        });
        let positions = (&mut walk).collect_vec();
        assert_eq!(positions, vec![(1, 0), (1, 1), (0, 1)]);
        assert_eq!(walk.state(), Some(&(0, 1)));
    }

    #[test]
    fn test_stateful_map_stays_done() {
        let mut totals = Relapsing::default().stateful_map(0, |acc, n| (acc + n, acc + n));
        assert_eq!(totals.advance(), Step::Yielded(1));
        assert_eq!(totals.advance(), Step::Done);
        assert_eq!(totals.advance(), Step::Done);
        assert_eq!(totals.state(), Some(&1));
    }
}
