//! Arrow-grid walks
//!
//! A board holds one arrow per cell. A token starts on some cell and keeps
//! following the arrow under it. Either it steps off the board (the walk
//! halts) or it revisits a cell and loops forever. Because the next position
//! depends only on the current one, "does the walk halt" is exactly "does
//! the position sequence never repeat", which is what the cycle detectors
//! answer in O(1) memory.
//!
//! Coordinates: `x` grows to the east, `y` grows to the south, `(0, 0)` is
//! the north-west corner.

mod board;
mod survey;
mod walk;

pub use board::Board;
pub use survey::{run_survey, SurveyConfig, SurveyReport};
pub use walk::{DirectionCursor, Directions, GridWalk, PositionStep, Positions};

use std::fmt;
use std::str::FromStr;

use rand::distributions::{Distribution, Standard};
use rand::Rng;
use thiserror::Error;

/// Errors raised while building boards and walks
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A board needs at least one cell
    #[error("board must have at least one row and one column")]
    EmptyBoard,

    /// Rows of a board differ in length
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based row index
        row: usize,
        /// Width of the first row
        expected: usize,
        /// Width of the offending row
        found: usize,
    },

    /// A character in board text is not an arrow
    #[error("unrecognised arrow '{symbol}' at line {line}, column {column}")]
    UnknownArrow {
        /// Offending character
        symbol: char,
        /// One-based line number
        line: usize,
        /// One-based column number
        column: usize,
    },

    /// The starting position is not on the board
    #[error("start position {start} lies outside the {width}x{height} board")]
    StartOutside {
        /// Requested start
        start: Position,
        /// Board width
        width: usize,
        /// Board height
        height: usize,
    },

    /// A position string could not be parsed
    #[error("invalid position '{0}' (expected 'x,y')")]
    InvalidPosition(String),
}

/// Arrow direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum Direction {
    /// Towards `y - 1`
    North,
    /// Towards `x + 1`
    East,
    /// Towards `y + 1`
    South,
    /// Towards `x - 1`
    West,
}

impl Direction {
    /// All four directions
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit offset `(dx, dy)`
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// Arrow glyph used in board text
    pub fn to_char(self) -> char {
        match self {
            Direction::North => '^',
            Direction::East => '>',
            Direction::South => 'v',
            Direction::West => '<',
        }
    }

    /// Parse an arrow glyph or compass letter
    pub fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            '^' | 'N' | 'n' => Some(Direction::North),
            '>' | 'E' | 'e' => Some(Direction::East),
            'v' | 'V' | 'S' | 's' => Some(Direction::South),
            '<' | 'W' | 'w' => Some(Direction::West),
            _ => None,
        }
    }
}

impl Distribution<Direction> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        Direction::ALL[rng.gen_range(0..Direction::ALL.len())]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Token position; may lie off the board after the final move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Position {
    /// Column
    pub x: i64,
    /// Row
    pub y: i64,
}

impl Position {
    /// Create a position
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Position one move away in `direction`
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Position {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GridError::InvalidPosition(s.to_string());
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (x, y) = trimmed.split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse().map_err(|_| invalid())?;
        let y = y.trim().parse().map_err(|_| invalid())?;
        Ok(Position::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_direction_glyph_round_trip() {
        for direction in Direction::ALL {
            assert_eq!(Direction::from_char(direction.to_char()), Some(direction));
        }
        assert_eq!(Direction::from_char('S'), Some(Direction::South));
        assert_eq!(Direction::from_char('x'), None);
    }

    #[test]
    fn test_step_follows_delta() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.step(Direction::East), Position::new(1, 0));
        assert_eq!(origin.step(Direction::North), Position::new(0, -1));
        assert_eq!(origin.step(Direction::South).step(Direction::West), Position::new(-1, 1));
    }

    #[test]
    fn test_random_directions_cover_all() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let direction: Direction = rng.gen();
            seen[Direction::ALL.iter().position(|d| *d == direction).unwrap()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_parse_position() {
        assert_eq!("3,4".parse(), Ok(Position::new(3, 4)));
        assert_eq!(" (1, -2) ".parse(), Ok(Position::new(1, -2)));
        assert_eq!(
            "nope".parse::<Position>(),
            Err(GridError::InvalidPosition("nope".to_string()))
        );
    }
}
