//! Canonical Arimaa rule constants.
//!
//! Holds the fixed literals the rules are built from: the base setup in wire
//! form, the trap squares, the per-turn step budget, and the strength table.

use crate::board_state::arimaa_types::{Piece, PieceKind, Square};

/// Base setup in `setposition` wire form, gold to move.
pub const STARTING_POSITION_WIRE: &str =
    "g \"rrrrrrrrhcdmedch                                HCDMEDCHRRRRRRRR\"";

/// Steps a single turn may spend.
pub const MAX_STEPS_PER_TURN: usize = 4;

/// Trap squares c3, f3, c6, f6.
pub const TRAP_SQUARES: [Square; 4] = [18, 21, 42, 45];

pub const TRAP_MASK: u64 = (1u64 << 18) | (1u64 << 21) | (1u64 << 42) | (1u64 << 45);

const STRENGTH: [u8; 6] = [1, 2, 3, 4, 5, 6];

#[inline]
pub const fn strength(kind: PieceKind) -> u8 {
    STRENGTH[kind.index()]
}

/// True when `attacker` is an enemy of `defender` and strictly stronger.
#[inline]
pub const fn dominates(attacker: Piece, defender: Piece) -> bool {
    attacker.side.index() != defender.side.index()
        && strength(attacker.kind) > strength(defender.kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_state::arimaa_types::{Side, ALL_PIECE_KINDS};

    #[test]
    fn strength_order_is_total() {
        for pair in ALL_PIECE_KINDS.windows(2) {
            assert!(strength(pair[0]) < strength(pair[1]));
        }
        assert_eq!(strength(PieceKind::Rabbit), 1);
        assert_eq!(strength(PieceKind::Elephant), 6);
    }

    #[test]
    fn domination_needs_enemy_and_strictly_stronger() {
        let gold_elephant = Piece::new(PieceKind::Elephant, Side::Gold);
        let gold_cat = Piece::new(PieceKind::Cat, Side::Gold);
        let silver_cat = Piece::new(PieceKind::Cat, Side::Silver);
        let silver_camel = Piece::new(PieceKind::Camel, Side::Silver);

        assert!(dominates(gold_elephant, silver_camel));
        assert!(!dominates(gold_elephant, gold_cat));
        assert!(!dominates(gold_cat, silver_cat));
        assert!(!dominates(gold_cat, silver_camel));
        assert!(dominates(silver_camel, gold_cat));
    }

    #[test]
    fn trap_mask_matches_trap_squares() {
        let mask = TRAP_SQUARES.iter().fold(0u64, |acc, sq| acc | (1u64 << sq));
        assert_eq!(mask, TRAP_MASK);
    }
}
