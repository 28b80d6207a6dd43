use crate::board::Board;
use crate::types::{Outcome, Player};

/// The eight winning lines of the grid, scanned in fixed order:
/// rows top to bottom, columns left to right, main diagonal, anti-diagonal.
pub const WIN_LINES: [[u8; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Classify a board: the first completed line in `WIN_LINES` order wins,
/// a full board without one is a draw, anything else is still open.
/// The fixed scan order keeps the answer deterministic even for boards
/// holding completed lines for both players.
pub fn outcome(board: &Board) -> Outcome {
    for line in &WIN_LINES {
        if let Some(p) = board.get(line[0]) {
            if board.get(line[1]) == Some(p) && board.get(line[2]) == Some(p) {
                return Outcome::Win(p);
            }
        }
    }
    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Undecided
    }
}
