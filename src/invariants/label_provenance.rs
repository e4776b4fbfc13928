//! Label provenance invariant: only configured labels reach the board.

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::Square;
use tracing::warn;

/// Invariant: every occupied square carries a configured player's label.
///
/// The engine trusts callers to stamp moves with `current_player`'s
/// label; this invariant catches stray labels slipping through.
pub struct LabelProvenanceInvariant;

impl Invariant<GameEngine> for LabelProvenanceInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let known = |label: char| engine.players().iter().any(|p| *p.label() == label);

        for square in engine.board().squares() {
            if let Square::Occupied(label) = *square
                && !known(label)
            {
                warn!(%label, "unconfigured label on board");
                return false;
            }
        }

        engine.history().iter().all(|mov| known(mov.label))
    }

    fn description() -> &'static str {
        "Every occupied square carries a configured player's label"
    }
}
