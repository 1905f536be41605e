//! Terminal-oriented board diagram.
//!
//! Renders rank 8 at the top, uppercase gold and lowercase silver letters,
//! `x` on empty trap squares and `·` on other empty squares.

use crate::board_state::arimaa_rules::TRAP_MASK;
use crate::board_state::arimaa_types::*;

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            let sq = rank * 8 + file;
            match board.piece_at(sq) {
                Some(piece) => out.push(piece_to_char(piece)),
                None if TRAP_MASK & (1u64 << sq) != 0 => out.push('x'),
                None => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_char(piece: Piece) -> char {
    match piece.side {
        Side::Gold => piece.kind.letter(),
        Side::Silver => piece.kind.letter().to_ascii_lowercase(),
    }
}
