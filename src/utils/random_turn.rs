//! Random legal turns.
//!
//! Walks the child generator, picking uniformly among children that fit a
//! randomly chosen step budget. Used to drive property tests and the solver
//! benchmark with realistic before/after pairs.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::board_state::arimaa_rules::MAX_STEPS_PER_TURN;
use crate::board_state::arimaa_types::*;
use crate::move_generation::move_generator::{ChildGenerator, RulesAwareGenerator};

/// Play a random turn of 1..=`max_steps` steps for `mover`. Stops early when
/// no child fits the remaining budget; the returned node may then hold fewer
/// steps (possibly none).
pub fn random_turn<R: Rng + ?Sized>(
    board: &Board,
    mover: Side,
    max_steps: usize,
    rng: &mut R,
) -> BoardStateNode {
    let limit = max_steps.clamp(1, MAX_STEPS_PER_TURN);
    let target = rng.random_range(1..=limit);

    let mut node = BoardStateNode::new(*board, mover);
    let mut children = Vec::with_capacity(128);

    while node.step_count() < target {
        children.clear();
        RulesAwareGenerator.generate_children(&node, &mut children);
        children.retain(|child| child.step_count() <= target);

        let Some(picked) = children.as_slice().choose(rng) else {
            break;
        };
        node = picked.clone();
    }

    node
}
