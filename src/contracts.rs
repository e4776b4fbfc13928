//! Contract-based validation for gomoku moves.
//!
//! Contracts define correctness through preconditions and postconditions,
//! formalizing Hoare-style reasoning: {P} action {Q}. The engine's
//! `is_valid_move` is the composed precondition; the invariant set is the
//! postcondition checked after every processed move.

use crate::action::{Move, MoveError};
use crate::engine::GameEngine;
use crate::invariants::{GomokuInvariants, InvariantSet};
use tracing::instrument;

/// A contract defines preconditions and postconditions for state
/// transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: no winner has been declared yet.
pub struct NoWinnerYet;

impl NoWinnerYet {
    /// Rejects moves submitted after the game is over.
    #[instrument(skip(engine))]
    pub fn check(mov: &Move, engine: &GameEngine) -> Result<(), MoveError> {
        let _ = mov;
        if engine.has_winner() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target square must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects moves targeting an occupied square.
    #[instrument(skip(engine))]
    pub fn check(mov: &Move, engine: &GameEngine) -> Result<(), MoveError> {
        if !engine.board().is_empty(mov.coord) {
            Err(MoveError::SquareOccupied(mov.coord))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: a move is legal if no winner has been declared
/// and the target square is empty.
///
/// Turn order is deliberately not checked: the caller stamps moves with
/// the current player's label.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(engine))]
    pub fn check(mov: &Move, engine: &GameEngine) -> Result<(), MoveError> {
        NoWinnerYet::check(mov, engine)?;
        CellIsEmpty::check(mov, engine)?;
        Ok(())
    }
}

/// Contract for move actions.
///
/// Preconditions: no winner yet, square empty.
/// Postconditions: the full invariant set still holds.
pub struct MoveContract;

impl Contract<GameEngine, Move> for MoveContract {
    fn pre(engine: &GameEngine, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, engine)
    }

    fn post(_before: &GameEngine, after: &GameEngine) -> Result<(), MoveError> {
        GomokuInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("postcondition failed: {}", descriptions))
        })
    }
}
