//! Child generation seam used by the sequence solver.
//!
//! A generator expands one node into every node reachable by one atomic
//! action (a slide, push, or pull) of the node's mover. Deduplication is the
//! caller's job.

use crate::board_state::arimaa_types::BoardStateNode;
use crate::move_generation::legal_pulls::generate_pulls;
use crate::move_generation::legal_pushes::generate_pushes;
use crate::move_generation::legal_slides::generate_slides;

pub trait ChildGenerator: Send + Sync {
    fn generate_children(&self, node: &BoardStateNode, out: &mut Vec<BoardStateNode>);
}

/// Slides, then pushes, then pulls, each scanning squares a1..h8 and
/// directions N, E, S, W.
pub struct RulesAwareGenerator;

impl ChildGenerator for RulesAwareGenerator {
    fn generate_children(&self, node: &BoardStateNode, out: &mut Vec<BoardStateNode>) {
        generate_slides(node, out);
        generate_pushes(node, out);
        generate_pulls(node, out);
    }
}
