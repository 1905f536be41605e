use crate::board_state::arimaa_rules::dominates;
use crate::board_state::arimaa_types::*;
use crate::move_generation::step_shared::{is_open_step, is_rabbit_retreat, perform_step};
use crate::rules::freezing::movable_pieces;

/// Two-step pull children. The puller steps away from an adjacent weaker
/// enemy into any other empty neighbour, then the enemy follows into the
/// vacated square. Tokens are recorded puller first, enemy second.
pub fn generate_pulls(node: &BoardStateNode, out: &mut Vec<BoardStateNode>) {
    if node.remaining_steps() < 2 {
        return;
    }

    let board = node.board();
    let mut pullers = movable_pieces(board, node.side());
    while pullers != 0 {
        let from = pullers.trailing_zeros() as Square;
        pullers &= pullers - 1;

        let Some(puller) = board.piece_at(from) else {
            continue;
        };

        for enemy_direction in ALL_DIRECTIONS {
            let Some(enemy_sq) = enemy_direction.step_from(from) else {
                continue;
            };
            let Some(enemy) = board.piece_at(enemy_sq) else {
                continue;
            };
            if !dominates(puller, enemy) {
                continue;
            }

            for pull_direction in ALL_DIRECTIONS {
                if pull_direction == enemy_direction
                    || is_rabbit_retreat(puller, pull_direction)
                    || !is_open_step(board, from, pull_direction)
                {
                    continue;
                }

                if let Some(child) =
                    pull_child(node, enemy, from, enemy_sq, enemy_direction, pull_direction)
                {
                    out.push(child);
                }
            }
        }
    }
}

fn pull_child(
    node: &BoardStateNode,
    enemy: Piece,
    from: Square,
    enemy_sq: Square,
    enemy_direction: Direction,
    pull_direction: Direction,
) -> Option<BoardStateNode> {
    let mut child = node.clone();

    let puller_step = perform_step(child.board_mut(), from, pull_direction)?;

    // A capture during the first half may have taken the pulled piece.
    if child.board().piece_at(enemy_sq) != Some(enemy) {
        return None;
    }

    let enemy_step = perform_step(child.board_mut(), enemy_sq, enemy_direction.opposite())?;

    child.push_step(puller_step);
    child.push_step(enemy_step);
    Some(child)
}
