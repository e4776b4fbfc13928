//! Win detection logic for gomoku.
//!
//! A catalog line wins when all five squares carry the same label and
//! the run is "open" at either end: an end touching the board edge, an
//! empty neighbor, or a same-label neighbor all confirm the win. The one
//! rejecting case is a run flanked on both sides by opposing labels.

use crate::combos::Combo;
use crate::types::{Board, Square};
use tracing::instrument;

/// Returns the single label shared by all five squares of the line, or
/// `None` if any square is empty or the labels differ.
pub fn combo_label(combo: &Combo, board: &Board) -> Option<char> {
    let mut cells = combo.cells().iter();
    let first = board.get(*cells.next()?).label()?;
    for cell in cells {
        if board.get(*cell) != Square::Occupied(first) {
            return None;
        }
    }
    Some(first)
}

/// Decides whether a homogeneous line counts as a win.
///
/// Extends the line one step beyond each end. An end falling off the
/// board confirms unconditionally. Otherwise the win stands if either
/// neighboring square is empty or carries the line's own label; only two
/// on-board neighbors both holding a different label reject it. A run of
/// six or more therefore still wins through any of its five-long
/// sub-lines, since the overhanging neighbor shares the label.
///
/// Returns `false` if the line is not homogeneous.
#[instrument(skip(combo, board))]
pub fn is_open_or_edge_win(combo: &Combo, board: &Board) -> bool {
    let Some(label) = combo_label(combo, board) else {
        return false;
    };

    let step = combo.back_step();
    let size = board.size();
    let before = combo.first().offset(step, size);
    let after = combo.last().offset((-step.0, -step.1), size);

    match (before, after) {
        // Either end touches the board edge.
        (None, _) | (_, None) => true,
        (Some(before), Some(after)) => {
            let open = |square: Square| square == Square::Empty || square == Square::Occupied(label);
            open(board.get(before)) || open(board.get(after))
        }
    }
}

/// Scans the catalog in order and returns the first line confirmed as a
/// win, or `None` if no line wins.
#[instrument(skip(board, combos))]
pub fn find_winning_combo<'a>(board: &Board, combos: &'a [Combo]) -> Option<&'a Combo> {
    combos
        .iter()
        .find(|combo| is_open_or_edge_win(combo, board))
}
