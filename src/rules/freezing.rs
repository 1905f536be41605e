//! Freezing predicate.
//!
//! A piece is frozen when no friendly piece touches it and at least one
//! touching enemy is strictly stronger. Frozen pieces cannot slide, push, or
//! pull.

use crate::board_state::arimaa_types::*;
use crate::moves::orthogonal_steps::orthogonal_neighbors;

pub fn is_frozen(board: &Board, square: Square) -> bool {
    let Some(piece) = board.piece_at(square) else {
        return false;
    };

    if board.neighbors_of_side(square, piece.side) != 0 {
        return false;
    }

    let dominators = board.pieces_stronger_than(piece.side.opposite(), piece.kind);
    orthogonal_neighbors(square) & dominators != 0
}

/// Pieces of `side` that may start a step this instant.
pub fn movable_pieces(board: &Board, side: Side) -> u64 {
    let mut movable = 0u64;
    let mut pieces = board.occupancy_by_side[side.index()];
    while pieces != 0 {
        let sq = pieces.trailing_zeros() as Square;
        if !is_frozen(board, sq) {
            movable |= 1u64 << sq;
        }
        pieces &= pieces - 1;
    }
    movable
}

#[cfg(test)]
mod tests {
    use super::{is_frozen, movable_pieces};
    use crate::board_state::arimaa_types::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    fn board_with(placements: &[(&str, PieceKind, Side)]) -> Board {
        let mut board = Board::new_empty();
        for (name, kind, side) in placements {
            board.place(sq(name), Piece::new(*kind, *side));
        }
        board
    }

    #[test]
    fn stronger_adjacent_enemy_freezes_lone_piece() {
        let board = board_with(&[
            ("d4", PieceKind::Dog, Side::Gold),
            ("d5", PieceKind::Camel, Side::Silver),
        ]);
        assert!(is_frozen(&board, sq("d4")));
        assert!(!is_frozen(&board, sq("d5")));
        assert_eq!(movable_pieces(&board, Side::Gold), 0);
    }

    #[test]
    fn friendly_neighbor_unfreezes() {
        let board = board_with(&[
            ("d4", PieceKind::Dog, Side::Gold),
            ("c4", PieceKind::Rabbit, Side::Gold),
            ("d5", PieceKind::Camel, Side::Silver),
        ]);
        assert!(!is_frozen(&board, sq("d4")));
        assert_eq!(
            movable_pieces(&board, Side::Gold),
            (1u64 << sq("d4")) | (1u64 << sq("c4"))
        );
    }

    #[test]
    fn equal_strength_enemy_does_not_freeze() {
        let board = board_with(&[
            ("d4", PieceKind::Horse, Side::Gold),
            ("d5", PieceKind::Horse, Side::Silver),
        ]);
        assert!(!is_frozen(&board, sq("d4")));
        assert!(!is_frozen(&board, sq("d5")));
    }

    #[test]
    fn diagonal_enemy_does_not_freeze() {
        let board = board_with(&[
            ("d4", PieceKind::Rabbit, Side::Silver),
            ("e5", PieceKind::Elephant, Side::Gold),
        ]);
        assert!(!is_frozen(&board, sq("d4")));
    }

    #[test]
    fn empty_square_is_not_frozen() {
        assert!(!is_frozen(&Board::new_empty(), sq("a1")));
    }
}
