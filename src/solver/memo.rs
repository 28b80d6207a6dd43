use std::collections::HashMap;

use crate::engine::apply::play;
use crate::engine::score::{terminal_value, Orientation};
use crate::position::Position;
use crate::solver::minimax::{MoveScore, SCORE_BOUND};
use crate::types::Player;

/// Simple in-memory value cache keyed by `Position::key`.
#[derive(Debug, Default)]
pub struct MemoTable {
    map: HashMap<u32, i32>,
}

impl MemoTable {
    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            map: HashMap::with_capacity(cap),
        }
    }

    #[inline]
    pub fn get(&self, key: u32) -> Option<i32> {
        self.map.get(&key).copied()
    }

    #[inline]
    pub fn put(&mut self, key: u32, value: i32) {
        self.map.insert(key, value);
    }

    #[inline]
    pub fn clear(&mut self) {
        self.map.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Memoised evaluator. One cache per orientation, because the cache key
/// carries only board and move count. Values come from plain unpruned
/// minimax, so a cached value is the exact value and stays valid for any
/// probe.
#[derive(Debug)]
pub struct Solver {
    orientation: Orientation,
    memo: MemoTable,
}

impl Solver {
    #[inline]
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            memo: MemoTable::default(),
        }
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline]
    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }

    /// Exact value of `position`, cached across calls.
    pub fn evaluate(&mut self, position: &Position) -> i32 {
        let key = position.key();
        if let Some(value) = self.memo.get(key) {
            return value;
        }

        let value = if let Some(v) = terminal_value(position, self.orientation) {
            v
        } else if position.to_move() == Player::X {
            let mut best = -SCORE_BOUND;
            for cell in position.legal_moves() {
                if let Ok(child) = play(position, cell) {
                    best = best.max(self.evaluate(&child));
                }
            }
            best
        } else {
            let mut best = SCORE_BOUND;
            for cell in position.legal_moves() {
                if let Ok(child) = play(position, cell) {
                    best = best.min(self.evaluate(&child));
                }
            }
            best
        };

        self.memo.put(key, value);
        value
    }

    /// Memoised counterpart of `evaluate_all_moves`: same vector, shared
    /// subtree values.
    pub fn evaluate_all_moves(&mut self, position: &Position) -> [MoveScore; 9] {
        let mut out = [MoveScore::Illegal; 9];
        for cell in 0u8..9u8 {
            if !position.is_legal(cell) {
                continue;
            }
            if let Ok(child) = play(position, cell) {
                out[cell as usize] = MoveScore::Score(self.evaluate(&child));
            }
        }
        out
    }
}
