//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `d4`) and internal
//! square indices, as used by step tokens and board diagrams.

use crate::board_state::arimaa_types::Square;

/// Convert algebraic notation (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {square}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    let file_index = file - b'a';
    let rank_index = rank - b'1';
    Ok(rank_index * 8 + file_index)
}

/// Convert a square index (`0..=63`) to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, String> {
    if square > 63 {
        return Err(format!("Square index out of bounds: {square}"));
    }

    Ok(format!("{}{}", file_char(square), rank_char(square)))
}

#[inline]
pub const fn file_char(square: Square) -> char {
    (b'a' + square % 8) as char
}

#[inline]
pub const fn rank_char(square: Square) -> char {
    (b'1' + (square / 8) % 8) as char
}
