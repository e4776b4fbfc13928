//! First-class move types for gomoku.
//!
//! Moves are domain events, not side effects. They carry the player's
//! intent and can be validated independently of execution, serialized
//! for replay, and logged for debugging.

use crate::types::Coord;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A move: placing a labeled mark at a board coordinate.
///
/// The caller stamps the move with the current player's label before
/// submitting it; the engine does not enforce whose turn it is at the
/// coordinate level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// Target coordinate.
    pub coord: Coord,
    /// Label stamped on the move.
    pub label: char,
}

impl Move {
    /// Creates a move from raw row/column indices.
    pub fn at(row: usize, col: usize, label: char) -> Self {
        Move::new(Coord::new(row, col), label)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.label, self.coord)
    }
}

/// Error produced when a move fails validation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The target square is already occupied.
    #[display("square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Coord),

    /// A winner has already been declared.
    #[display("game already has a winner")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        let mov = Move::at(4, 2, 'X');
        assert_eq!(mov.to_string(), "X -> (4, 2)");
    }

    #[test]
    fn test_error_display() {
        let err = MoveError::SquareOccupied(Coord::new(0, 0));
        assert_eq!(err.to_string(), "square (0, 0) is already occupied");
        assert_eq!(MoveError::GameOver.to_string(), "game already has a winner");
    }
}
