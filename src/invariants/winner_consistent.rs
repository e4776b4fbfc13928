//! Winner consistency invariant: flag and recorded combo agree.

use super::Invariant;
use crate::engine::GameEngine;
use crate::rules;

/// Invariant: `has_winner` and `winning_combo` are set together, and the
/// recorded combo is a homogeneous line on the current board.
pub struct WinnerConsistentInvariant;

impl Invariant<GameEngine> for WinnerConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        match engine.winning_combo() {
            None => !engine.has_winner(),
            Some(combo) => {
                engine.has_winner() && rules::combo_label(combo, engine.board()).is_some()
            }
        }
    }

    fn description() -> &'static str {
        "has_winner and winning_combo agree, and the combo is homogeneous"
    }
}
