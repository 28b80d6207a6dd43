use crate::board::Board;
use crate::engine::apply::play;
use crate::engine::score::{terminal_value, Orientation};
use crate::position::Position;
use crate::types::Player;

/// Search window bound, wider than any reachable terminal value.
pub const SCORE_BOUND: i32 = 123_456;

/// Sentinel reported for occupied cells in a raw score vector. Kept
/// bit-for-bit stable: downstream consumers compare against it directly.
pub const ILLEGAL_MOVE_SCORE: i32 = -999_999;

/// Per-cell evaluation result; `raw` collapses it to the wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveScore {
    Score(i32),
    Illegal,
}

impl MoveScore {
    #[inline]
    pub fn raw(self) -> i32 {
        match self {
            MoveScore::Score(v) => v,
            MoveScore::Illegal => ILLEGAL_MOVE_SCORE,
        }
    }
}

/// Alpha-beta minimax over the full remaining tree. X maximises and O
/// minimises regardless of orientation; the orientation only flips
/// terminal values. Children are visited in ascending cell order and the
/// cutoff is the strict `beta < alpha`.
pub fn search(position: &Position, alpha: i32, beta: i32, orientation: Orientation) -> i32 {
    if let Some(value) = terminal_value(position, orientation) {
        return value;
    }

    let mut alpha = alpha;
    let mut beta = beta;

    if position.to_move() == Player::X {
        let mut best = -SCORE_BOUND;
        for cell in position.legal_moves() {
            if let Ok(child) = play(position, cell) {
                let value = search(&child, alpha, beta, orientation);
                best = best.max(value);
                alpha = alpha.max(value);
                if beta < alpha {
                    break;
                }
            }
        }
        best
    } else {
        let mut best = SCORE_BOUND;
        for cell in position.legal_moves() {
            if let Ok(child) = play(position, cell) {
                let value = search(&child, alpha, beta, orientation);
                best = best.min(value);
                beta = beta.min(value);
                if beta < alpha {
                    break;
                }
            }
        }
        best
    }
}

/// Evaluate every cell of `position`: occupied cells are `Illegal`, each
/// empty cell is scored by playing it and searching the reply tree with a
/// fresh full-width window.
pub fn evaluate_all_moves(position: &Position, orientation: Orientation) -> [MoveScore; 9] {
    let mut out = [MoveScore::Illegal; 9];
    for cell in 0u8..9u8 {
        if !position.is_legal(cell) {
            continue;
        }
        if let Ok(child) = play(position, cell) {
            out[cell as usize] =
                MoveScore::Score(search(&child, -SCORE_BOUND, SCORE_BOUND, orientation));
        }
    }
    out
}

/// Raw boundary entry: marks in (0 empty, 1 X, 2 O), scores out, with
/// `ILLEGAL_MOVE_SCORE` in every occupied slot.
pub fn solve(marks: &[u8], misere: bool) -> Result<[i32; 9], String> {
    let board = Board::from_marks(marks).map_err(|e| format!("Board parse error: {e}"))?;
    let position = Position::new(board);
    let evals = evaluate_all_moves(&position, Orientation::from_misere(misere));
    let mut scores = [0i32; 9];
    for (slot, eval) in scores.iter_mut().zip(evals.iter()) {
        *slot = eval.raw();
    }
    Ok(scores)
}

/// Move selection over an evaluation vector: highest score for X, lowest
/// for O, earliest cell on ties. `None` when no cell is legal.
pub fn best_cell(evals: &[MoveScore; 9], to_move: Player) -> Option<u8> {
    let mut best: Option<(u8, i32)> = None;
    for (idx, eval) in evals.iter().enumerate() {
        let MoveScore::Score(value) = *eval else {
            continue;
        };
        let better = match best {
            None => true,
            Some((_, best_value)) => match to_move {
                Player::X => value > best_value,
                Player::O => value < best_value,
            },
        };
        if better {
            best = Some((idx as u8, value));
        }
    }
    best.map(|(cell, _)| cell)
}
