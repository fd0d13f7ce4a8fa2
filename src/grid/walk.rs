//! Walk sequences over a board

use std::rc::Rc;

use bitvec::prelude::*;
use rand::Rng;
use tracing::debug;

use super::{Board, Direction, GridError, Position};
use crate::combinator::{MultipassExt, StatefulMap};
use crate::detect::{brent, floyd, Detection, Strategy};
use crate::sequence::{Cursor, Multipass, Step};

/// Function type advancing the token; yields the position before the move
pub type PositionStep = fn(Position, Direction) -> (Position, Position);

/// Multipass sequence of the positions a walk visits, starting with its start
pub type Positions = StatefulMap<Directions, Position, PositionStep>;

/// A token walk on a shared, immutable board
#[derive(Debug, Clone)]
pub struct GridWalk {
    board: Rc<Board>,
    start: Position,
}

impl GridWalk {
    /// Walk starting at `start`, which must lie on `board`
    pub fn new(board: Board, start: Position) -> Result<Self, GridError> {
        Self::from_shared(Rc::new(board), start)
    }

    /// Walk over a board shared with other walks
    pub fn from_shared(board: Rc<Board>, start: Position) -> Result<Self, GridError> {
        if !board.contains(start) {
            return Err(GridError::StartOutside {
                start,
                width: board.width(),
                height: board.height(),
            });
        }
        Ok(Self { board, start })
    }

    /// Random `size × size` board with the token on a random interior cell
    ///
    /// Boards smaller than 3×3 have no interior; any cell is used then.
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self, GridError> {
        let board = Board::random(size, size, rng)?;
        let (lo, hi) = if size >= 3 { (1, size - 1) } else { (0, size) };
        let start = Position::new(rng.gen_range(lo..hi) as i64, rng.gen_range(lo..hi) as i64);
        Self::new(board, start)
    }

    /// The board walked on
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starting position
    pub fn start(&self) -> Position {
        self.start
    }

    /// Arrows under the token, one per move
    ///
    /// Completes right after the arrow whose move leaves the board.
    pub fn directions(&self) -> Directions {
        Directions {
            board: Rc::clone(&self.board),
            start: self.start,
        }
    }

    /// Every position the token occupies, starting with the start
    ///
    /// Built from [`GridWalk::directions`] by threading the position through
    /// a `stateful_map`. Finite exactly when the walk halts.
    pub fn positions(&self) -> Positions {
        self.directions()
            .stateful_map(self.start, advance_token as PositionStep)
    }

    /// Run cycle detection over the positions
    ///
    /// Floyd replays the multipass position sequence; Brent drains a single
    /// cursor. Always terminates, since a finite board either cycles or is
    /// left.
    pub fn detect(&self, strategy: Strategy) -> Detection {
        let positions = self.positions();
        let detection = match strategy {
            Strategy::Floyd => floyd(&positions, |a, b| a == b),
            Strategy::Brent => brent(positions.cursor(), |a, b| a == b),
        };
        debug!(
            %strategy,
            start = %self.start,
            found = detection.found(),
            advances = detection.advances,
            "walk analysed"
        );
        detection
    }

    /// Whether the token eventually leaves the board
    pub fn halts(&self, strategy: Strategy) -> bool {
        !self.detect(strategy).found()
    }

    /// Reference answer using one visited bit per cell
    ///
    /// O(cells) memory; used to cross-check the constant-space detectors.
    pub fn halts_reference(&self) -> bool {
        let mut visited = bitvec![0; self.board.cells()];
        let mut positions = self.positions().cursor();
        while let Step::Yielded(position) = positions.advance() {
            let Some(idx) = self.board.index(position) else {
                return true;
            };
            if visited[idx] {
                return false;
            }
            visited.set(idx, true);
        }
        true
    }
}

fn advance_token(position: Position, direction: Direction) -> (Position, Position) {
    (position.step(direction), position)
}

/// Multipass sequence of the arrows a walk follows
#[derive(Debug, Clone)]
pub struct Directions {
    board: Rc<Board>,
    start: Position,
}

impl Multipass for Directions {
    type Item = Direction;
    type Cursor = DirectionCursor;

    fn cursor(&self) -> Self::Cursor {
        DirectionCursor {
            board: Rc::clone(&self.board),
            at: Some(self.start),
        }
    }
}

/// Cursor over a walk's arrows; `at` is `None` once the token has left
#[derive(Debug, Clone)]
pub struct DirectionCursor {
    board: Rc<Board>,
    at: Option<Position>,
}

impl Cursor for DirectionCursor {
    type Item = Direction;

    fn advance(&mut self) -> Step<Direction> {
        let Some(direction) = self.at.and_then(|at| self.board.arrow(at)) else {
            self.at = None;
            return Step::Done;
        };
        self.at = self
            .at
            .map(|at| at.step(direction))
            .filter(|next| self.board.contains(*next));
        Step::Yielded(direction)
    }
}
