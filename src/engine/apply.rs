use crate::position::Position;

/// Apply a move as a pure transform: returns a new Position on success.
/// Validates: cell in range, cell empty. The mark placed is whatever
/// `to_move` derives for the input position.
pub fn play(position: &Position, cell: u8) -> Result<Position, String> {
    if cell >= 9 {
        return Err(format!("Cell index {cell} out of range"));
    }
    if !position.board.is_empty(cell) {
        return Err(format!("Cell {cell} is not empty"));
    }

    let mut next = position.clone();
    next.board.set(cell, Some(position.to_move()));
    Ok(next)
}
