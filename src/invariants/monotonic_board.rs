//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::{Board, Square};

/// Invariant: board squares are monotonic between resets.
///
/// Once a square transitions from empty to occupied, it keeps its label
/// until `reset`. Verified by replaying the move history onto a fresh
/// board and comparing.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let mut reconstructed = Board::new(engine.board_size());

        for mov in engine.history() {
            // Square must be empty before placing.
            if !reconstructed.is_empty(mov.coord) {
                return false;
            }
            reconstructed.set(mov.coord, Square::Occupied(mov.label));
        }

        reconstructed == *engine.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten before reset)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::types::Player;

    #[test]
    fn test_fresh_engine_holds() {
        let engine = GameEngine::new(Player::defaults(), 10);
        assert!(MonotonicBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_holds_after_moves() {
        let mut engine = GameEngine::new(Player::defaults(), 10);
        engine.process_move(Move::at(3, 3, 'X'));
        engine.process_move(Move::at(4, 4, 'O'));
        assert!(MonotonicBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_holds_after_reset() {
        let mut engine = GameEngine::new(Player::defaults(), 10);
        engine.process_move(Move::at(3, 3, 'X'));
        engine.reset();
        assert!(MonotonicBoardInvariant::holds(&engine));
    }
}
