use serde::{Deserialize, Serialize};

use crate::position::Position;
use crate::types::{Outcome, Player};

/// Scoring orientation. `Misere` mirrors every terminal value, making
/// three in a row the losing achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Normal,
    Misere,
}

impl Orientation {
    #[inline]
    pub fn from_misere(misere: bool) -> Self {
        if misere {
            Orientation::Misere
        } else {
            Orientation::Normal
        }
    }

    /// Sign applied to every terminal value: +1 normal, -1 misere.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Orientation::Normal => 1,
            Orientation::Misere => -1,
        }
    }
}

/// Exact value of a finished position, `None` while the game is open.
/// Faster wins are worth more: with `m` marks on the board an X win is
/// `sign * (10 - m)`, an O win `sign * (m - 10)`, a draw 0.
#[inline]
pub fn terminal_value(position: &Position, orientation: Orientation) -> Option<i32> {
    let moves = i32::from(position.move_count());
    match position.outcome() {
        Outcome::Win(Player::X) => Some(orientation.sign() * (10 - moves)),
        Outcome::Win(Player::O) => Some(orientation.sign() * (moves - 10)),
        Outcome::Draw => Some(0),
        Outcome::Undecided => None,
    }
}
