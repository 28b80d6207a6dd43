use crate::board::Board;
use crate::rules::outcome;
use crate::types::{Outcome, Player};

/// Immutable snapshot of a game. Whose turn it is, how far the game has
/// progressed and whether it is over are all derived from the cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
}

impl Position {
    #[inline]
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    #[inline]
    pub fn empty() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Number of marks on the board.
    #[inline]
    pub fn move_count(&self) -> u8 {
        self.board.filled_count()
    }

    /// X moves on even counts, O on odd ones.
    #[inline]
    pub fn to_move(&self) -> Player {
        if self.move_count() % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        outcome(&self.board)
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.outcome() != Outcome::Undecided
    }

    /// True iff `cell` is on the board and unoccupied. Out-of-range
    /// indices are merely illegal, never a panic.
    #[inline]
    pub fn is_legal(&self, cell: u8) -> bool {
        cell < 9 && self.board.is_empty(cell)
    }

    /// Ordered legal moves: empty cells by ascending index. Terminal
    /// status is not consulted, so a decided board that still has empty
    /// cells keeps them playable.
    pub fn legal_moves(&self) -> Vec<u8> {
        let mut moves = Vec::with_capacity((9 - self.board.filled_count()) as usize);
        for cell in 0u8..9u8 {
            if self.board.is_empty(cell) {
                moves.push(cell);
            }
        }
        moves
    }

    /// Canonical identity: the board read as a base-3 number (cell 0 most
    /// significant digit, cell 8 least), scaled by 100, plus the move count.
    pub fn key(&self) -> u32 {
        let marks = self.board.marks();
        let mut code: u32 = 0;
        for &mark in &marks {
            code = code * 3 + u32::from(mark);
        }
        code * 100 + u32::from(self.move_count())
    }
}

/// Re-export minimal surface for callers as free functions to align with the planned API.
#[inline]
pub fn legal_moves(position: &Position) -> Vec<u8> {
    position.legal_moves()
}

#[inline]
pub fn is_terminal(position: &Position) -> bool {
    position.is_terminal()
}

#[inline]
pub fn is_legal_move(position: &Position, cell: u8) -> bool {
    position.is_legal(cell)
}
