//! Replays step tokens onto a board.
//!
//! Each token moves the named piece (of either side) one square and resolves
//! traps, exactly as the generators do. Freezing, domination, and rabbit
//! direction are not checked: this is the replay path shared with notation
//! consumers, not a legality test.

use crate::board_state::arimaa_types::*;
use crate::errors::StepError;
use crate::moves::step_token::StepToken;
use crate::move_generation::step_shared::perform_step;

pub fn apply_step(board: &mut Board, step: &StepToken) -> Result<(), StepError> {
    let matches_kind = board
        .piece_at(step.origin)
        .is_some_and(|piece| piece.kind == step.kind);
    if !matches_kind {
        return Err(StepError::NoPieceAtOrigin(step.to_string()));
    }

    let to = step
        .destination()
        .ok_or_else(|| StepError::OffBoard(step.to_string()))?;
    if !board.is_empty(to) {
        return Err(StepError::DestinationOccupied(step.to_string()));
    }

    perform_step(board, step.origin, step.direction)
        .map(|_| ())
        .ok_or_else(|| StepError::DestinationOccupied(step.to_string()))
}

pub fn apply_steps(board: &Board, steps: &[StepToken]) -> Result<Board, StepError> {
    let mut next = *board;
    for step in steps {
        apply_step(&mut next, step)?;
    }
    Ok(next)
}
