//! Fixed-size Arimaa board snapshot.
//!
//! `Board` stores one occupancy bitboard per (side, kind) plus cached side
//! and total occupancies and an incrementally maintained Zobrist key. It is
//! `Copy`, so every search node owns its own snapshot.

use crate::board_state::arimaa_rules::strength;
use crate::board_state::arimaa_types::*;
use crate::errors::FormatError;
use crate::moves::orthogonal_steps::orthogonal_neighbors;
use crate::search::zobrist::piece_square_key;
use crate::utils::position_generator::generate_position;
use crate::utils::position_parser::parse_position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    // [side][piece_kind]
    pub pieces: [[u64; 6]; 2],

    pub occupancy_by_side: [u64; 2],
    pub occupancy_all: u64,

    /// Occupancy-only Zobrist key, side excluded.
    pub zobrist_key: u64,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            pieces: [[0; 6]; 2],
            occupancy_by_side: [0; 2],
            occupancy_all: 0,
            zobrist_key: 0,
        }
    }
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn from_wire(wire: &str) -> Result<(Self, Side), FormatError> {
        parse_position(wire)
    }

    #[inline]
    pub fn to_wire(&self, side: Side) -> String {
        generate_position(self, side)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        let mask = 1u64 << square;
        if self.occupancy_all & mask == 0 {
            return None;
        }

        for side in [Side::Gold, Side::Silver] {
            if self.occupancy_by_side[side.index()] & mask == 0 {
                continue;
            }
            for kind in ALL_PIECE_KINDS {
                if self.pieces[side.index()][kind.index()] & mask != 0 {
                    return Some(Piece::new(kind, side));
                }
            }
        }

        None
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.occupancy_all & (1u64 << square) == 0
    }

    /// Put `piece` on an empty `square`. An occupied square is left untouched.
    pub fn place(&mut self, square: Square, piece: Piece) {
        if !self.is_empty(square) {
            return;
        }

        let mask = 1u64 << square;
        self.pieces[piece.side.index()][piece.kind.index()] |= mask;
        self.occupancy_by_side[piece.side.index()] |= mask;
        self.occupancy_all |= mask;
        self.zobrist_key ^= piece_square_key(piece, square);
    }

    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        let piece = self.piece_at(square)?;

        let mask = 1u64 << square;
        self.pieces[piece.side.index()][piece.kind.index()] &= !mask;
        self.occupancy_by_side[piece.side.index()] &= !mask;
        self.occupancy_all &= !mask;
        self.zobrist_key ^= piece_square_key(piece, square);

        Some(piece)
    }

    /// Two boards hold exactly the same pieces on the same squares.
    #[inline]
    pub fn same_occupancy(&self, other: &Board) -> bool {
        self.pieces == other.pieces
    }

    /// Squares adjacent to `square` holding a piece of `side`.
    #[inline]
    pub fn neighbors_of_side(&self, square: Square, side: Side) -> u64 {
        orthogonal_neighbors(square) & self.occupancy_by_side[side.index()]
    }

    /// Every piece of `side` strictly stronger than `kind`.
    pub fn pieces_stronger_than(&self, side: Side, kind: PieceKind) -> u64 {
        ALL_PIECE_KINDS
            .iter()
            .filter(|other| strength(**other) > strength(kind))
            .fold(0u64, |acc, other| acc | self.pieces[side.index()][other.index()])
    }

    pub fn piece_count(&self) -> u32 {
        self.occupancy_all.count_ones()
    }
}
