use crate::board_state::arimaa_rules::dominates;
use crate::board_state::arimaa_types::*;
use crate::move_generation::step_shared::{is_open_step, is_rabbit_retreat, perform_step};
use crate::rules::freezing::movable_pieces;

/// Two-step push children. The enemy is displaced one square further along
/// the pusher-to-enemy line, then the pusher follows into the vacated cell.
/// Tokens are recorded enemy first, pusher second.
pub fn generate_pushes(node: &BoardStateNode, out: &mut Vec<BoardStateNode>) {
    if node.remaining_steps() < 2 {
        return;
    }

    let board = node.board();
    let mut pushers = movable_pieces(board, node.side());
    while pushers != 0 {
        let from = pushers.trailing_zeros() as Square;
        pushers &= pushers - 1;

        let Some(pusher) = board.piece_at(from) else {
            continue;
        };

        for direction in ALL_DIRECTIONS {
            let Some(enemy_sq) = direction.step_from(from) else {
                continue;
            };
            let Some(enemy) = board.piece_at(enemy_sq) else {
                continue;
            };
            if !dominates(pusher, enemy)
                || is_rabbit_retreat(pusher, direction)
                || !is_open_step(board, enemy_sq, direction)
            {
                continue;
            }

            if let Some(child) = push_child(node, pusher, from, enemy_sq, direction) {
                out.push(child);
            }
        }
    }
}

fn push_child(
    node: &BoardStateNode,
    pusher: Piece,
    from: Square,
    enemy_sq: Square,
    direction: Direction,
) -> Option<BoardStateNode> {
    let mut child = node.clone();

    let enemy_step = perform_step(child.board_mut(), enemy_sq, direction)?;

    // The pusher must still stand behind an emptied square.
    if child.board().piece_at(from) != Some(pusher) || !child.board().is_empty(enemy_sq) {
        return None;
    }

    let pusher_step = perform_step(child.board_mut(), from, direction)?;

    child.push_step(enemy_step);
    child.push_step(pusher_step);
    Some(child)
}

#[cfg(test)]
mod tests {
    use super::generate_pushes;
    use crate::board_state::arimaa_types::*;
    use crate::rules::trap_resolution::unsupported_trap_occupants;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    fn node_with(side: Side, placements: &[(&str, PieceKind, Side)]) -> BoardStateNode {
        let mut board = Board::new_empty();
        for (name, kind, owner) in placements {
            board.place(sq(name), Piece::new(*kind, *owner));
        }
        BoardStateNode::new(board, side)
    }

    #[test]
    fn elephant_pushes_weaker_enemy_straight_ahead() {
        let node = node_with(
            Side::Gold,
            &[
                ("d4", PieceKind::Elephant, Side::Gold),
                ("d5", PieceKind::Rabbit, Side::Silver),
            ],
        );
        let mut children = Vec::new();
        generate_pushes(&node, &mut children);

        assert_eq!(children.len(), 1);
        let child = &children[0];
        assert_eq!(child.notation(), "Rd5n Ed4n");
        assert_eq!(
            child.board().piece_at(sq("d6")),
            Some(Piece::new(PieceKind::Rabbit, Side::Silver))
        );
        assert_eq!(
            child.board().piece_at(sq("d5")),
            Some(Piece::new(PieceKind::Elephant, Side::Gold))
        );
        assert!(child.board().is_empty(sq("d4")));
    }

    #[test]
    fn push_into_unsupported_trap_still_records_enemy_step() {
        let node = node_with(
            Side::Gold,
            &[
                ("c4", PieceKind::Elephant, Side::Gold),
                ("c5", PieceKind::Dog, Side::Silver),
            ],
        );
        let mut children = Vec::new();
        generate_pushes(&node, &mut children);

        assert_eq!(children.len(), 1);
        let child = &children[0];
        assert_eq!(child.notation(), "Dc5n Ec4n");
        assert_eq!(child.board().piece_count(), 1);
        assert_eq!(unsupported_trap_occupants(child.board()), 0);
    }

    #[test]
    fn blocked_beyond_square_prevents_push() {
        let node = node_with(
            Side::Gold,
            &[
                ("d4", PieceKind::Elephant, Side::Gold),
                ("d5", PieceKind::Rabbit, Side::Silver),
                ("d6", PieceKind::Rabbit, Side::Silver),
            ],
        );
        let mut children = Vec::new();
        generate_pushes(&node, &mut children);

        assert!(children.is_empty());
    }

    #[test]
    fn equal_strength_cannot_push() {
        let node = node_with(
            Side::Gold,
            &[
                ("d4", PieceKind::Horse, Side::Gold),
                ("d5", PieceKind::Horse, Side::Silver),
            ],
        );
        let mut children = Vec::new();
        generate_pushes(&node, &mut children);

        assert!(children.is_empty());
    }

    #[test]
    fn push_needs_two_remaining_steps() {
        let mut node = node_with(
            Side::Gold,
            &[
                ("d4", PieceKind::Elephant, Side::Gold),
                ("d5", PieceKind::Rabbit, Side::Silver),
            ],
        );
        for _ in 0..3 {
            node.push_step(crate::moves::step_token::StepToken::new(
                PieceKind::Elephant,
                sq("a1"),
                Direction::North,
            ));
        }
        let mut children = Vec::new();
        generate_pushes(&node, &mut children);

        assert!(children.is_empty());
    }
}
