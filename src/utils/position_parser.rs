//! `setposition` wire string to `Board` parser.
//!
//! Accepts `g "<64 cells>"` or the full command form
//! `setposition g "<64 cells>"`. Wire cell 0 is a8 and cell 63 is h1; spaces
//! are empty cells, uppercase letters are gold pieces, lowercase silver.

use crate::board_state::arimaa_types::*;
use crate::errors::FormatError;

pub const BOARD_CELLS: usize = 64;

pub fn parse_position(wire: &str) -> Result<(Board, Side), FormatError> {
    let trimmed = wire.trim();
    let body = match trimmed.strip_prefix("setposition") {
        Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim_start(),
        _ => trimmed,
    };

    if body.starts_with('"') || body.is_empty() {
        return Err(FormatError::MissingSide);
    }

    let (side_part, payload_part) = body
        .split_once(char::is_whitespace)
        .ok_or(FormatError::MissingQuotes)?;
    let side = parse_side(side_part)?;

    let payload = payload_part
        .trim_start()
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or(FormatError::MissingQuotes)?;

    let board = parse_cells(payload)?;
    Ok((board, side))
}

/// Internal square for a wire cell index (row-major from a8).
#[inline]
pub const fn wire_index_to_square(index: usize) -> Square {
    ((7 - index / 8) * 8 + index % 8) as Square
}

fn parse_side(side_part: &str) -> Result<Side, FormatError> {
    let mut chars = side_part.chars();
    match (chars.next(), chars.next()) {
        (Some(code), None) => {
            Side::from_wire_code(code).ok_or_else(|| FormatError::InvalidSide(side_part.to_owned()))
        }
        _ => Err(FormatError::InvalidSide(side_part.to_owned())),
    }
}

fn parse_cells(payload: &str) -> Result<Board, FormatError> {
    let cell_count = payload.chars().count();
    if cell_count != BOARD_CELLS {
        return Err(FormatError::WrongLength(cell_count));
    }

    let mut board = Board::new_empty();
    for (index, ch) in payload.chars().enumerate() {
        if ch == ' ' {
            continue;
        }
        let piece = piece_from_wire_char(ch).ok_or(FormatError::InvalidCell(ch))?;
        board.place(wire_index_to_square(index), piece);
    }

    Ok(board)
}

fn piece_from_wire_char(ch: char) -> Option<Piece> {
    let side = if ch.is_ascii_uppercase() {
        Side::Gold
    } else if ch.is_ascii_lowercase() {
        Side::Silver
    } else {
        return None;
    };

    let kind = PieceKind::from_letter(ch.to_ascii_uppercase())?;
    Some(Piece::new(kind, side))
}

#[cfg(test)]
mod tests {
    use super::parse_position;
    use crate::board_state::arimaa_rules::STARTING_POSITION_WIRE;
    use crate::board_state::arimaa_types::*;
    use crate::errors::FormatError;
    use crate::utils::render_board::render_board;

    #[test]
    fn parse_starting_position_and_render_board() {
        let (board, side) = parse_position(STARTING_POSITION_WIRE).expect("start should parse");

        println!("\n{}", render_board(&board));

        assert_eq!(side, Side::Gold);
        assert_eq!(board.occupancy_by_side[Side::Gold.index()], 0x0000_0000_0000_FFFF);
        assert_eq!(board.occupancy_by_side[Side::Silver.index()], 0xFFFF_0000_0000_0000);
    }

    #[test]
    fn accepts_setposition_command_form() {
        let command = format!("setposition {STARTING_POSITION_WIRE}");
        let (from_command, side) = parse_position(&command).expect("command form should parse");
        let (bare, _) = parse_position(STARTING_POSITION_WIRE).expect("bare form should parse");
        assert_eq!(side, Side::Gold);
        assert_eq!(from_command, bare);
    }

    #[test]
    fn rejects_missing_quotes() {
        let unquoted = format!("g {}", " ".repeat(64));
        assert_eq!(parse_position(&unquoted), Err(FormatError::MissingQuotes));

        let half_quoted = format!("g \"{}", "r".repeat(64));
        assert_eq!(parse_position(&half_quoted), Err(FormatError::MissingQuotes));

        let bracketed = format!("g [{}]", "r".repeat(64));
        assert_eq!(parse_position(&bracketed), Err(FormatError::MissingQuotes));
    }

    #[test]
    fn rejects_wrong_payload_length() {
        let short = format!("s \"{}\"", "R".repeat(63));
        assert_eq!(parse_position(&short), Err(FormatError::WrongLength(63)));

        let long = format!("s \"{}\"", " ".repeat(65));
        assert_eq!(parse_position(&long), Err(FormatError::WrongLength(65)));
    }

    #[test]
    fn rejects_invalid_side_marker() {
        let payload = format!("\"{}\"", " ".repeat(64));
        assert_eq!(
            parse_position(&format!("w {payload}")),
            Err(FormatError::InvalidSide("w".to_owned()))
        );
        assert_eq!(
            parse_position(&format!("gold {payload}")),
            Err(FormatError::InvalidSide("gold".to_owned()))
        );
        assert_eq!(parse_position(&payload), Err(FormatError::MissingSide));
    }

    #[test]
    fn rejects_unknown_cell_characters() {
        let mut cells = " ".repeat(63);
        cells.push('k');
        assert_eq!(
            parse_position(&format!("g \"{cells}\"")),
            Err(FormatError::InvalidCell('k'))
        );

        let dotted = ".".repeat(64);
        assert_eq!(
            parse_position(&format!("g \"{dotted}\"")),
            Err(FormatError::InvalidCell('.'))
        );
    }
}
