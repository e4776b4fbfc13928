//! Game rules for gomoku.
//!
//! Pure functions for evaluating board state. Rules are separated from
//! board storage so win and draw logic can be tested in isolation.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{combo_label, find_winning_combo, is_open_or_edge_win};
