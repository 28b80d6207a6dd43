#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod types;
pub mod rules;
pub mod board;
pub mod position;

pub mod engine {
    pub mod apply;
    pub mod score;
}

pub mod solver;

// Re-exports: stable minimal API surface for external callers
pub use crate::board::Board;
pub use crate::engine::apply::play;
pub use crate::engine::score::{terminal_value, Orientation};
pub use crate::position::{is_legal_move, is_terminal, legal_moves, Position};
pub use crate::rules::{outcome, WIN_LINES};
pub use crate::solver::{
    best_cell, evaluate_all_moves, search, solve, MemoTable, MoveScore, Solver,
    ILLEGAL_MOVE_SCORE, SCORE_BOUND,
};
pub use crate::types::{idx_to_rc, rc_to_idx, Outcome, Player};
