use crate::board_state::arimaa_types::*;
use crate::move_generation::step_shared::{is_open_step, is_rabbit_retreat, perform_step};
use crate::rules::freezing::movable_pieces;

/// Single-step children: every unfrozen friendly piece into every empty
/// neighbour, rabbits never toward their home edge.
pub fn generate_slides(node: &BoardStateNode, out: &mut Vec<BoardStateNode>) {
    if node.remaining_steps() < 1 {
        return;
    }

    let board = node.board();
    let mut movers = movable_pieces(board, node.side());
    while movers != 0 {
        let from = movers.trailing_zeros() as Square;
        movers &= movers - 1;

        let Some(piece) = board.piece_at(from) else {
            continue;
        };

        for direction in ALL_DIRECTIONS {
            if is_rabbit_retreat(piece, direction) || !is_open_step(board, from, direction) {
                continue;
            }

            let mut child = node.clone();
            if let Some(step) = perform_step(child.board_mut(), from, direction) {
                child.push_step(step);
                out.push(child);
            }
        }
    }
}
