//! Trap captures.
//!
//! Runs after every atomic step, including each half of a push or pull: any
//! trap occupant without an adjacent friendly piece is removed.

use crate::board_state::arimaa_rules::TRAP_SQUARES;
use crate::board_state::arimaa_types::*;

/// Trap squares whose occupant currently lacks friendly support.
pub fn unsupported_trap_occupants(board: &Board) -> u64 {
    let mut unsupported = 0u64;
    for trap in TRAP_SQUARES {
        let Some(piece) = board.piece_at(trap) else {
            continue;
        };
        if board.neighbors_of_side(trap, piece.side) == 0 {
            unsupported |= 1u64 << trap;
        }
    }
    unsupported
}

/// Remove every unsupported trap occupant. Returns the emptied squares.
pub fn resolve_traps(board: &mut Board) -> u64 {
    let captured = unsupported_trap_occupants(board);
    let mut squares = captured;
    while squares != 0 {
        let sq = squares.trailing_zeros() as Square;
        board.remove(sq);
        squares &= squares - 1;
    }
    captured
}

#[cfg(test)]
mod tests {
    use super::{resolve_traps, unsupported_trap_occupants};
    use crate::board_state::arimaa_types::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    #[test]
    fn lone_trap_occupant_is_captured() {
        let mut board = Board::new_empty();
        board.place(sq("c3"), Piece::new(PieceKind::Elephant, Side::Gold));
        board.place(sq("c4"), Piece::new(PieceKind::Rabbit, Side::Silver));

        assert_eq!(resolve_traps(&mut board), 1u64 << sq("c3"));
        assert!(board.is_empty(sq("c3")));
        assert_eq!(board.piece_count(), 1);
    }

    #[test]
    fn supported_trap_occupant_survives() {
        let mut board = Board::new_empty();
        board.place(sq("f6"), Piece::new(PieceKind::Cat, Side::Silver));
        board.place(sq("f7"), Piece::new(PieceKind::Rabbit, Side::Silver));
        let before = board;

        assert_eq!(resolve_traps(&mut board), 0);
        assert_eq!(board, before);
    }

    #[test]
    fn several_traps_resolve_together() {
        let mut board = Board::new_empty();
        board.place(sq("c6"), Piece::new(PieceKind::Dog, Side::Silver));
        board.place(sq("f3"), Piece::new(PieceKind::Horse, Side::Gold));
        board.place(sq("c3"), Piece::new(PieceKind::Cat, Side::Gold));
        board.place(sq("d3"), Piece::new(PieceKind::Rabbit, Side::Gold));

        let expected = (1u64 << sq("c6")) | (1u64 << sq("f3"));
        assert_eq!(unsupported_trap_occupants(&board), expected);
        assert_eq!(resolve_traps(&mut board), expected);
        assert_eq!(unsupported_trap_occupants(&board), 0);
        assert_eq!(board.piece_count(), 2);
    }

    #[test]
    fn non_trap_squares_are_never_captured() {
        let mut board = Board::new_empty();
        board.place(sq("d4"), Piece::new(PieceKind::Rabbit, Side::Gold));
        assert_eq!(resolve_traps(&mut board), 0);
        assert_eq!(board.piece_count(), 1);
    }
}
