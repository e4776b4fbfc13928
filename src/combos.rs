//! Winning-line catalog for gomoku.
//!
//! Every straight run of [`LINE_LEN`] consecutive squares is a candidate
//! winning line. The full catalog is computed once at engine construction
//! and never changes afterward; win detection scans it in catalog order.

use crate::types::Coord;
use serde::{Deserialize, Serialize};
use std::array;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Length of a winning run.
pub const LINE_LEN: usize = 5;

/// Direction of a candidate winning line.
///
/// Declaration order fixes catalog order: all row lines, then column
/// lines, then down-diagonals, then up-diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Direction {
    /// Left to right along a row.
    Row,
    /// Top to bottom along a column.
    Column,
    /// Top-left to bottom-right (`\`).
    DiagonalDown,
    /// Top-right to bottom-left (`/`).
    DiagonalUp,
}

impl Direction {
    /// Per-cell step from one square of the line to the next.
    pub fn step(self) -> (i32, i32) {
        match self {
            Direction::Row => (0, 1),
            Direction::Column => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (1, -1),
        }
    }

    /// Start coordinates for every line of this direction on a
    /// `size × size` board, in catalog order.
    fn starts(self, size: usize) -> Vec<Coord> {
        let span = size - LINE_LEN + 1;
        let mut starts = Vec::new();
        match self {
            Direction::Row => {
                for row in 0..size {
                    for col in 0..span {
                        starts.push(Coord::new(row, col));
                    }
                }
            }
            Direction::Column => {
                for row in 0..span {
                    for col in 0..size {
                        starts.push(Coord::new(row, col));
                    }
                }
            }
            Direction::DiagonalDown => {
                for row in 0..span {
                    for col in 0..span {
                        starts.push(Coord::new(row, col));
                    }
                }
            }
            Direction::DiagonalUp => {
                for row in 0..span {
                    for col in (LINE_LEN - 1..size).rev() {
                        starts.push(Coord::new(row, col));
                    }
                }
            }
        }
        starts
    }
}

/// One candidate winning line: exactly [`LINE_LEN`] consecutive
/// coordinates along a single direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Combo {
    cells: [Coord; LINE_LEN],
}

impl Combo {
    fn along(start: Coord, direction: Direction) -> Self {
        let (dr, dc) = direction.step();
        let cells = array::from_fn(|k| {
            Coord::new(
                (start.row as i32 + k as i32 * dr) as usize,
                (start.col as i32 + k as i32 * dc) as usize,
            )
        });
        Self { cells }
    }

    /// The line's coordinates in order.
    pub fn cells(&self) -> &[Coord; LINE_LEN] {
        &self.cells
    }

    /// First coordinate of the line.
    pub fn first(&self) -> Coord {
        self.cells[0]
    }

    /// Last coordinate of the line.
    pub fn last(&self) -> Coord {
        self.cells[LINE_LEN - 1]
    }

    /// Step from the second coordinate back toward the first.
    ///
    /// Offsetting `first()` by this step extends the line one square
    /// beyond its start; offsetting `last()` by its negation extends one
    /// square beyond its end.
    pub fn back_step(&self) -> (i32, i32) {
        (
            self.cells[0].row as i32 - self.cells[1].row as i32,
            self.cells[0].col as i32 - self.cells[1].col as i32,
        )
    }

    /// Checks whether the line passes through the coordinate.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }
}

/// Computes the full winning-line catalog for a `size × size` board.
///
/// Catalog order is rows, columns, down-diagonals, up-diagonals, each
/// block in its direction's start order. For a 10×10 board this yields
/// `10×6 + 6×10 + 6×6 + 6×6 = 192` lines.
///
/// # Panics
///
/// Panics if `size < LINE_LEN`; no winning line fits on such a board.
#[instrument]
pub fn catalog(size: usize) -> Vec<Combo> {
    assert!(
        size >= LINE_LEN,
        "board size {} cannot hold a line of {}",
        size,
        LINE_LEN
    );
    Direction::iter()
        .flat_map(|direction| {
            direction
                .starts(size)
                .into_iter()
                .map(move |start| Combo::along(start, direction))
        })
        .collect()
}
