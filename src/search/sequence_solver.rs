//! Breadth-first reconstruction of a single turn.
//!
//! Given the board before a turn, its mover, and the board after it, finds
//! the shortest sequence of one to four steps (slides, pushes, pulls) that
//! turns one into the other. Search is synchronous, owns its own frontier
//! and visited set, and performs no I/O.
//!
//! Pushes and pulls spend two steps in one expansion, so the frontier is kept
//! as one queue per step count and drained lowest first. The visited set
//! records the fewest steps a board was reached with; a later path reaching
//! the same board with as many steps or more is dropped.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use crate::board_state::arimaa_rules::MAX_STEPS_PER_TURN;
use crate::board_state::arimaa_types::*;
use crate::board_state::board_state_node::DedupKey;
use crate::errors::SolveError;
use crate::move_generation::move_generator::{ChildGenerator, RulesAwareGenerator};
use crate::moves::step_token::StepToken;

/// A successful reconstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnExplanation {
    pub steps: Vec<StepToken>,
    /// Steps joined with single spaces, e.g. `Rd5n Ed4n`.
    pub notation: String,
    pub board: Board,
    /// Opponent of the mover.
    pub side_to_move: Side,
    /// `board` encoded with `side_to_move`.
    pub position: String,
}

/// Counters from the last search, for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchCounts {
    pub expanded: usize,
    pub generated: usize,
    pub enqueued: usize,
}

pub struct SequenceSolver<G: ChildGenerator = RulesAwareGenerator> {
    generator: G,
}

impl SequenceSolver<RulesAwareGenerator> {
    pub fn new() -> Self {
        Self {
            generator: RulesAwareGenerator,
        }
    }
}

impl Default for SequenceSolver<RulesAwareGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: ChildGenerator> SequenceSolver<G> {
    pub fn with_generator(generator: G) -> Self {
        Self { generator }
    }

    pub fn solve(&self, before: &Board, mover: Side, after: &Board) -> Option<TurnExplanation> {
        self.solve_with_counts(before, mover, after).0
    }

    pub fn solve_with_counts(
        &self,
        before: &Board,
        mover: Side,
        after: &Board,
    ) -> (Option<TurnExplanation>, SearchCounts) {
        let mut counts = SearchCounts::default();

        // A turn must change the board.
        if before.same_occupancy(after) {
            return (None, counts);
        }

        let root = BoardStateNode::new(*before, mover);
        let mut best_steps: HashMap<DedupKey, usize> = HashMap::new();
        best_steps.insert(root.dedup_key(), 0);

        let mut frontier: Vec<VecDeque<BoardStateNode>> =
            vec![VecDeque::new(); MAX_STEPS_PER_TURN + 1];
        frontier[0].push_back(root);

        let mut children = Vec::with_capacity(128);

        for depth in 0..=MAX_STEPS_PER_TURN {
            while let Some(node) = frontier[depth].pop_front() {
                let superseded = best_steps
                    .get(&node.dedup_key())
                    .is_some_and(|&best| best < depth);
                if superseded {
                    continue;
                }

                if depth >= 1 && node.board().same_occupancy(after) {
                    return (Some(explain(&node)), counts);
                }

                if depth == MAX_STEPS_PER_TURN {
                    continue;
                }

                counts.expanded += 1;
                children.clear();
                self.generator.generate_children(&node, &mut children);
                counts.generated += children.len();

                for child in children.drain(..) {
                    let steps = child.step_count();
                    if steps > MAX_STEPS_PER_TURN {
                        continue;
                    }

                    match best_steps.entry(child.dedup_key()) {
                        Entry::Occupied(entry) if *entry.get() <= steps => continue,
                        Entry::Occupied(mut entry) => {
                            entry.insert(steps);
                        }
                        Entry::Vacant(entry) => {
                            entry.insert(steps);
                        }
                    }

                    counts.enqueued += 1;
                    frontier[steps].push_back(child);
                }
            }
        }

        (None, counts)
    }
}

fn explain(node: &BoardStateNode) -> TurnExplanation {
    let side_to_move = node.side().opposite();
    TurnExplanation {
        steps: node.steps().to_vec(),
        notation: node.notation(),
        board: *node.board(),
        side_to_move,
        position: node.board().to_wire(side_to_move),
    }
}

/// Decode both wire positions and reconstruct the turn between them.
///
/// The mover is the side named by `before`; the side marker of `after` is
/// ignored. Malformed input fails with `SolveError::Format` before any
/// search; every other failure is `SolveError::NoSequence`.
pub fn solve_turn(before: &str, after: &str) -> Result<TurnExplanation, SolveError> {
    let (before_board, mover) = Board::from_wire(before)?;
    let (after_board, _) = Board::from_wire(after)?;

    SequenceSolver::new()
        .solve(&before_board, mover, &after_board)
        .ok_or(SolveError::NoSequence)
}
