pub mod memo;
pub mod minimax;

pub use memo::{MemoTable, Solver};
pub use minimax::{
    best_cell, evaluate_all_moves, search, solve, MoveScore, ILLEGAL_MOVE_SCORE, SCORE_BOUND,
};
