use crate::board_state::arimaa_types::*;
use crate::utils::position_parser::{wire_index_to_square, BOARD_CELLS};

/// Encode a board and side as `g "<64 cells>"`.
pub fn generate_position(board: &Board, side: Side) -> String {
    format!("{} \"{}\"", side.wire_code(), generate_cells(board))
}

/// Full collaborator command line, `setposition g "<64 cells>"`.
pub fn setposition_command(board: &Board, side: Side) -> String {
    format!("setposition {}", generate_position(board, side))
}

fn generate_cells(board: &Board) -> String {
    let mut out = String::with_capacity(BOARD_CELLS);

    for index in 0..BOARD_CELLS {
        match board.piece_at(wire_index_to_square(index)) {
            Some(piece) => out.push(piece_to_wire_char(piece)),
            None => out.push(' '),
        }
    }

    out
}

fn piece_to_wire_char(piece: Piece) -> char {
    let letter = piece.kind.letter();
    match piece.side {
        Side::Gold => letter,
        Side::Silver => letter.to_ascii_lowercase(),
    }
}
