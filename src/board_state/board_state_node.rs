//! Search node: a board snapshot plus the steps that produced it.
//!
//! Nodes are read-only outside the crate. The dedup key covers the mover and
//! the occupancy only, so different step histories that reach the same
//! board collapse to one frontier entry.

use std::hash::{Hash, Hasher};

use crate::board_state::arimaa_rules::MAX_STEPS_PER_TURN;
use crate::board_state::arimaa_types::*;
use crate::moves::step_token::{steps_to_notation, StepToken};
use crate::search::zobrist::side_key;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardStateNode {
    board: Board,
    side: Side,
    steps: Vec<StepToken>,
}

impl BoardStateNode {
    pub fn new(board: Board, side: Side) -> Self {
        Self {
            board,
            side,
            steps: Vec::with_capacity(MAX_STEPS_PER_TURN),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn steps(&self) -> &[StepToken] {
        &self.steps
    }

    #[inline]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn remaining_steps(&self) -> usize {
        MAX_STEPS_PER_TURN.saturating_sub(self.steps.len())
    }

    #[inline]
    pub fn dedup_key(&self) -> DedupKey {
        DedupKey {
            side: self.side,
            board: self.board,
        }
    }

    pub fn notation(&self) -> String {
        steps_to_notation(&self.steps)
    }

    #[inline]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[inline]
    pub(crate) fn push_step(&mut self, step: StepToken) {
        self.steps.push(step);
    }
}

/// Visited-set key: mover and occupancy, step history excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DedupKey {
    side: Side,
    board: Board,
}

impl Hash for DedupKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.board.zobrist_key ^ side_key(self.side));
    }
}
