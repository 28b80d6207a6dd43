use crate::types::Player;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    // Cells 0..=8 laid out row-major (r*3 + c)
    cells: [Option<Player>; 9],
}

impl Default for Board {
    fn default() -> Self {
        Self { cells: [None; 9] }
    }
}

impl Board {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from boundary marks: 0 empty, 1 X, 2 O.
    /// Anything other than exactly 9 such marks is rejected.
    pub fn from_marks(marks: &[u8]) -> Result<Self, String> {
        if marks.len() != 9 {
            return Err(format!("Expected 9 cells, got {}", marks.len()));
        }
        let mut cells: [Option<Player>; 9] = [None; 9];
        for (idx, &mark) in marks.iter().enumerate() {
            cells[idx] = match mark {
                0 => None,
                1 => Some(Player::X),
                2 => Some(Player::O),
                other => {
                    return Err(format!(
                        "Invalid mark {other} at cell {idx}, expected 0, 1 or 2"
                    ))
                }
            };
        }
        Ok(Self { cells })
    }

    /// Boundary marks for this board, same encoding as `from_marks`.
    #[inline]
    pub fn marks(&self) -> [u8; 9] {
        let mut out = [0u8; 9];
        for (idx, &cell) in self.cells.iter().enumerate() {
            out[idx] = cell.map_or(0, Player::mark);
        }
        out
    }

    #[inline]
    pub fn get(&self, idx: u8) -> Option<Player> {
        self.cells[idx as usize]
    }

    #[inline]
    pub fn set(&mut self, idx: u8, cell: Option<Player>) {
        self.cells[idx as usize] = cell;
    }

    #[inline]
    pub fn is_empty(&self, idx: u8) -> bool {
        self.cells[idx as usize].is_none()
    }

    #[inline]
    pub fn filled_count(&self) -> u8 {
        self.cells.iter().filter(|c| c.is_some()).count() as u8
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.filled_count() == 9
    }
}
