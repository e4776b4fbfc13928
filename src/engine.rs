//! The gomoku game engine.
//!
//! Owns board state, the player rotation, the precomputed winning-line
//! catalog, and win/tie bookkeeping. Pure state plus query/command
//! operations; no I/O. A front end drives the engine by submitting
//! candidate moves and querying results after each submission.

use crate::action::{Move, MoveError};
use crate::combos::{self, Combo};
use crate::contracts::LegalMove;
use crate::rules;
use crate::types::{Board, GameStatus, Player, Square};
use tracing::{debug, instrument};

/// Game-state engine for gomoku.
///
/// Constructed once per table; `reset` starts a fresh game on the same
/// board and catalog without recomputing either. The engine is
/// exclusively owned by its caller and is not shared across threads.
#[derive(Debug, Clone)]
pub struct GameEngine {
    players: Vec<Player>,
    current: usize,
    pub(crate) board: Board,
    combos: Vec<Combo>,
    pub(crate) has_winner: bool,
    winning_combo: Option<Combo>,
    history: Vec<Move>,
}

impl GameEngine {
    /// Creates an engine with the given players and board size.
    ///
    /// The first player in the sequence moves first. The winning-line
    /// catalog is computed here, once.
    ///
    /// # Panics
    ///
    /// Panics if `players` is empty or `board_size` cannot hold a
    /// winning line; both are configuration contract violations.
    #[instrument(skip(players))]
    pub fn new(players: Vec<Player>, board_size: usize) -> Self {
        assert!(!players.is_empty(), "at least one player is required");
        let combos = combos::catalog(board_size);
        debug!(board_size, combos = combos.len(), "catalog computed");
        Self {
            players,
            current: 0,
            board: Board::new(board_size),
            combos,
            has_winner: false,
            winning_combo: None,
            history: Vec::new(),
        }
    }

    /// Creates an engine with the default two players on the given board.
    pub fn with_defaults(board_size: usize) -> Self {
        Self::new(Player::defaults(), board_size)
    }

    /// Validates a move without applying it.
    ///
    /// Fails if a winner has already been declared or the target square
    /// is occupied. Turn order is not checked; the caller stamps moves
    /// with [`current_player`](Self::current_player)'s label.
    pub fn validate_move(&self, mov: &Move) -> Result<(), MoveError> {
        LegalMove::check(mov, self)
    }

    /// Returns true iff the move would pass validation.
    pub fn is_valid_move(&self, mov: &Move) -> bool {
        self.validate_move(mov).is_ok()
    }

    /// Applies a validated move and evaluates the winning-line catalog.
    ///
    /// The first catalog line confirmed by the open-line rule is
    /// recorded as the winning combo and the winner flag is set.
    ///
    /// Callers must validate first: this operation performs no
    /// validation of its own, and applying a move to an occupied square
    /// or a finished game corrupts state. Debug builds assert the
    /// precondition and re-check the engine invariants afterward.
    #[instrument(skip(self))]
    pub fn process_move(&mut self, mov: Move) {
        debug_assert!(
            self.is_valid_move(&mov),
            "process_move called with unvalidated move {}",
            mov
        );

        self.board.set(mov.coord, Square::Occupied(mov.label));
        self.history.push(mov);

        if let Some(combo) = rules::find_winning_combo(&self.board, &self.combos) {
            debug!(winner = %mov.label, combo = ?combo.cells(), "winner declared");
            self.winning_combo = Some(combo.clone());
            self.has_winner = true;
        }

        #[cfg(debug_assertions)]
        self.assert_invariants();
    }

    /// Returns true iff a winner has been declared.
    ///
    /// Reads the stored flag; nothing is recomputed.
    pub fn has_winner(&self) -> bool {
        self.has_winner
    }

    /// Returns true iff the board is full with no winner.
    pub fn is_tied(&self) -> bool {
        !self.has_winner && rules::is_full(&self.board)
    }

    /// Advances the rotation to the next player, wrapping after the last.
    #[instrument(skip(self))]
    pub fn toggle_player(&mut self) {
        self.current = (self.current + 1) % self.players.len();
    }

    /// Clears the board and winner bookkeeping for a fresh game.
    ///
    /// The player rotation keeps its position and the winning-line
    /// catalog is reused as computed at construction.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.has_winner = false;
        self.winning_combo = None;
        self.history.clear();
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Returns the configured players in rotation order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the board edge length.
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    /// Returns the recorded winning line, if a winner has been declared.
    ///
    /// Front ends use the coordinates for highlighting.
    pub fn winning_combo(&self) -> Option<&Combo> {
        self.winning_combo.as_ref()
    }

    /// Returns the moves applied since construction or the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the winning player, resolved from the recorded combo.
    pub fn winner(&self) -> Option<&Player> {
        let combo = self.winning_combo.as_ref()?;
        let label = rules::combo_label(combo, &self.board)?;
        self.players.iter().find(|p| *p.label() == label)
    }

    /// Returns the game status derived from winner and board state.
    pub fn status(&self) -> GameStatus {
        if let Some(combo) = self.winning_combo() {
            if let Some(label) = rules::combo_label(combo, &self.board) {
                return GameStatus::Won(label);
            }
        }
        if self.is_tied() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Replays a recorded move sequence on a fresh engine.
    ///
    /// Each move is validated before application and the rotation is
    /// toggled after every non-terminal move, so a sequence recorded
    /// from live play reproduces the same end state.
    #[instrument(skip(players, moves))]
    pub fn replay(players: Vec<Player>, board_size: usize, moves: &[Move]) -> Result<Self, MoveError> {
        let mut engine = Self::new(players, board_size);

        for mov in moves {
            engine.validate_move(mov)?;
            engine.process_move(*mov);
            if !engine.has_winner() && !engine.is_tied() {
                engine.toggle_player();
            }
        }

        Ok(engine)
    }

    /// Asserts the full invariant set (debug builds only).
    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        use crate::invariants::{GomokuInvariants, InvariantSet};

        if let Err(violations) = GomokuInvariants::check_all(self) {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            panic!("engine invariants violated: {}", descriptions);
        }
    }
}
