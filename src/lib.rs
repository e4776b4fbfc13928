//! Strictly Gomoku - pure game logic for five-in-a-row
//!
//! This library is the game-state engine for a turn-based board game: a
//! square grid (10×10 by default) on which players alternately place
//! marks, won by the first unbroken line of five identical marks along a
//! row, column, or diagonal, subject to the open-line rule. A full board
//! with no winner is a draw.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns the board, player rotation,
//!   winning-line catalog, and win/tie bookkeeping
//! - **Rules**: pure win and draw evaluation over board state
//! - **Contracts**: composable move preconditions and postconditions
//! - **Invariants**: first-class properties checked after every move in
//!   debug builds
//!
//! Rendering, input handling, and process lifecycle are front-end
//! concerns; they drive the engine solely through its operation set.
//!
//! # Example
//!
//! ```
//! use strictly_gomoku::{GameEngine, Move};
//!
//! let mut engine = GameEngine::with_defaults(10);
//! let mov = Move::at(4, 4, *engine.current_player().label());
//!
//! if engine.is_valid_move(&mov) {
//!     engine.process_move(mov);
//!     if !engine.has_winner() && !engine.is_tied() {
//!         engine.toggle_player();
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod combos;
mod contracts;
mod engine;
mod invariants;
mod rules;
mod types;

// Crate-level exports - Actions
pub use action::{Move, MoveError};

// Crate-level exports - Winning-line catalog
pub use combos::{Combo, Direction, LINE_LEN, catalog};

// Crate-level exports - Contracts
pub use contracts::{CellIsEmpty, Contract, LegalMove, MoveContract, NoWinnerYet};

// Crate-level exports - Engine
pub use engine::GameEngine;

// Crate-level exports - Invariants
pub use invariants::{
    GomokuInvariants, Invariant, InvariantSet, InvariantViolation, LabelProvenanceInvariant,
    MonotonicBoardInvariant, WinnerConsistentInvariant,
};

// Crate-level exports - Rules
pub use rules::{combo_label, find_winning_combo, is_full, is_open_or_edge_win};

// Crate-level exports - Core types
pub use types::{Board, Coord, GameStatus, Player, Square};
