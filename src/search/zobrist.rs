//! Zobrist hashing for search-frontier deduplication.
//!
//! Keys come from a fixed splitmix64 seed and are evaluated at compile time,
//! so hashes are deterministic across runs and no table is initialised (or
//! mutated) while a search runs.

use crate::board_state::arimaa_types::*;

#[derive(Debug)]
struct ZobristTables {
    piece_square: [[[u64; 64]; 6]; 2],
    silver_to_move: u64,
}

static TABLES: ZobristTables = build_tables();

const fn build_tables() -> ZobristTables {
    let mut seed: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut piece_square = [[[0u64; 64]; 6]; 2];

    let mut side = 0usize;
    while side < 2 {
        let mut kind = 0usize;
        while kind < 6 {
            let mut sq = 0usize;
            while sq < 64 {
                seed = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
                piece_square[side][kind][sq] = mix(seed);
                sq += 1;
            }
            kind += 1;
        }
        side += 1;
    }

    seed = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let silver_to_move = mix(seed);

    ZobristTables {
        piece_square,
        silver_to_move,
    }
}

#[inline]
const fn mix(state: u64) -> u64 {
    // splitmix64 finaliser
    let mut z = state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Return the Zobrist key for a `(side, kind, square)` occupancy term.
#[inline]
pub fn piece_square_key(piece: Piece, square: Square) -> u64 {
    TABLES.piece_square[piece.side.index()][piece.kind.index()][square as usize]
}

/// Return the side toggle key (xor in when silver is the mover).
#[inline]
pub fn side_key(side: Side) -> u64 {
    match side {
        Side::Gold => 0,
        Side::Silver => TABLES.silver_to_move,
    }
}

/// Compute the occupancy-only key of a board from scratch.
pub fn compute_board_key(board: &Board) -> u64 {
    let mut key = 0u64;

    for side in [Side::Gold, Side::Silver] {
        for kind in ALL_PIECE_KINDS {
            let mut bb = board.pieces[side.index()][kind.index()];
            while bb != 0 {
                let sq = bb.trailing_zeros() as Square;
                key ^= piece_square_key(Piece::new(kind, side), sq);
                bb &= bb - 1;
            }
        }
    }

    key
}
