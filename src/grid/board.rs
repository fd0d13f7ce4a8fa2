//! Immutable arrow board

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use super::{Direction, GridError, Position};

/// A `width × height` grid of arrows
///
/// Boards never change after construction; walks share them through `Rc`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    /// Row-major arrows
    arrows: Vec<Direction>,
}

impl Board {
    /// Board with every cell pointing the same way
    pub fn uniform(width: usize, height: usize, direction: Direction) -> Result<Self, GridError> {
        Self::check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            arrows: vec![direction; width * height],
        })
    }

    /// Board with uniformly random arrows
    pub fn random<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        Self::check_dimensions(width, height)?;
        let arrows = (0..width * height).map(|_| rng.gen()).collect();
        Ok(Self {
            width,
            height,
            arrows,
        })
    }

    /// Board from explicit rows (north to south, each west to east)
    pub fn from_rows(rows: Vec<Vec<Direction>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        Self::check_dimensions(width, height)?;

        let mut arrows = Vec::with_capacity(width * height);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
            arrows.extend(cells);
        }
        Ok(Self {
            width,
            height,
            arrows,
        })
    }

    /// Parse board text: one row per line, one arrow glyph per cell
    ///
    /// Blank lines and whitespace inside a line are ignored, so boards can be
    /// written with spaced-out cells.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut rows = Vec::new();
        for (line_idx, line) in text.lines().enumerate() {
            let mut row = Vec::new();
            for (col_idx, symbol) in line.chars().enumerate() {
                if symbol.is_whitespace() {
                    continue;
                }
                let direction =
                    Direction::from_char(symbol).ok_or(GridError::UnknownArrow {
                        symbol,
                        line: line_idx + 1,
                        column: col_idx + 1,
                    })?;
                row.push(direction);
            }
            if !row.is_empty() {
                rows.push(row);
            }
        }
        Self::from_rows(rows)
    }

    fn check_dimensions(width: usize, height: usize) -> Result<(), GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyBoard);
        }
        Ok(())
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells; no halting walk makes more moves than this
    pub fn cells(&self) -> usize {
        self.arrows.len()
    }

    /// Whether `position` lies on the board
    pub fn contains(&self, position: Position) -> bool {
        self.index(position).is_some()
    }

    /// Arrow at `position`, or `None` off the board
    pub fn arrow(&self, position: Position) -> Option<Direction> {
        self.index(position).map(|idx| self.arrows[idx])
    }

    /// Row-major cell index of an on-board position
    pub fn index(&self, position: Position) -> Option<usize> {
        let x = usize::try_from(position.x).ok()?;
        let y = usize::try_from(position.y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Content digest, stable across runs and platforms
    pub fn fingerprint(&self) -> blake3::Hash {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&(self.width as u64).to_le_bytes());
        hasher.update(&(self.height as u64).to_le_bytes());
        for direction in &self.arrows {
            hasher.update(&[direction.to_char() as u8]);
        }
        hasher.finalize()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.arrows.chunks(self.width) {
            for direction in row {
                write!(f, "{}", direction.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::parse(s)
    }
}
