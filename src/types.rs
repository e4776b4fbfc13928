//! Core domain types for gomoku.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A player in the game.
///
/// Players are identified by a unique single-character `label` that marks
/// their squares on the board. The `color` is a display hint for front
/// ends; the engine never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
pub struct Player {
    /// Mark placed on the board for this player.
    label: char,
    /// Display hint, opaque to the engine.
    color: String,
}

impl Player {
    /// The default two-player lineup: X in red, O in blue.
    pub fn defaults() -> Vec<Player> {
        vec![
            Player::new('X', "red".to_string()),
            Player::new('O', "blue".to_string()),
        ]
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// A board coordinate: `(row, col)`, both 0-indexed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, new,
)]
pub struct Coord {
    /// Row index (0 at the top).
    pub row: usize,
    /// Column index (0 at the left).
    pub col: usize,
}

impl Coord {
    /// Offsets this coordinate by a signed step, returning `None` if the
    /// result would leave a `size × size` board.
    pub fn offset(self, step: (i32, i32), size: usize) -> Option<Coord> {
        let row = self.row as i32 + step.0;
        let col = self.col as i32 + step.1;
        if row < 0 || col < 0 || row >= size as i32 || col >= size as i32 {
            return None;
        }
        Some(Coord::new(row as usize, col as usize))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A square on the board.
///
/// The unset state is a first-class variant rather than a sentinel label,
/// so "empty" is type-checked everywhere it matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by the player with this label.
    Occupied(char),
}

impl Square {
    /// Returns the occupying label, if any.
    pub fn label(self) -> Option<char> {
        match self {
            Square::Empty => None,
            Square::Occupied(label) => Some(label),
        }
    }
}

/// Square board of `size × size` squares in row-major order.
///
/// Coordinates are fixed at construction; only their occupancy changes.
/// Indexing outside the board is a caller contract violation and panics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates a new empty board.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size * size],
        }
    }

    /// Returns the board edge length.
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, coord: Coord) -> usize {
        assert!(
            coord.row < self.size && coord.col < self.size,
            "coordinate {} outside {}x{} board",
            coord,
            self.size,
            self.size
        );
        coord.row * self.size + coord.col
    }

    /// Gets the square at the given coordinate.
    pub fn get(&self, coord: Coord) -> Square {
        self.squares[self.index(coord)]
    }

    /// Sets the square at the given coordinate.
    pub fn set(&mut self, coord: Coord, square: Square) {
        let index = self.index(coord);
        self.squares[index] = square;
    }

    /// Checks if the square at the coordinate is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord) == Square::Empty
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Clears every square back to empty.
    pub fn clear(&mut self) {
        self.squares.fill(Square::Empty);
    }

    /// Formats the board as a human-readable grid, `.` for empty squares.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..self.size {
            for col in 0..self.size {
                match self.get(Coord::new(row, col)) {
                    Square::Empty => result.push('.'),
                    Square::Occupied(label) => result.push(label),
                }
                if col + 1 < self.size {
                    result.push(' ');
                }
            }
            if row + 1 < self.size {
                result.push('\n');
            }
        }
        result
    }
}

/// Current status of a game, derived from engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a win for the player holding this label.
    Won(char),
    /// Board is full with no winner.
    Draw,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won(label) => write!(f, "player {} wins", label),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(10);
        assert_eq!(board.squares().len(), 100);
        assert!(board.squares().iter().all(|s| *s == Square::Empty));
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new(10);
        let coord = Coord::new(4, 7);
        board.set(coord, Square::Occupied('X'));
        assert_eq!(board.get(coord), Square::Occupied('X'));
        assert!(!board.is_empty(coord));
        assert!(board.is_empty(Coord::new(4, 8)));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_out_of_bounds_panics() {
        let board = Board::new(10);
        board.get(Coord::new(10, 0));
    }

    #[test]
    fn test_clear_restores_empty() {
        let mut board = Board::new(5);
        board.set(Coord::new(2, 2), Square::Occupied('O'));
        board.clear();
        assert!(board.is_empty(Coord::new(2, 2)));
        assert!(!board.is_full());
    }

    #[test]
    fn test_offset_stays_on_board() {
        let coord = Coord::new(0, 4);
        assert_eq!(coord.offset((0, 1), 10), Some(Coord::new(0, 5)));
        assert_eq!(coord.offset((-1, 0), 10), None);
        assert_eq!(Coord::new(9, 9).offset((1, 1), 10), None);
    }

    #[test]
    fn test_default_players() {
        let players = Player::defaults();
        assert_eq!(players.len(), 2);
        assert_eq!(*players[0].label(), 'X');
        assert_eq!(players[1].color(), "blue");
    }
}
