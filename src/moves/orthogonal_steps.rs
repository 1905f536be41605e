//! Orthogonal neighbour bitboards.
//!
//! Every Arimaa rule that looks around a square (support, freezing, trap
//! captures) only needs the up-to-four orthogonally adjacent cells, so the
//! masks are built once at compile time.

pub const ORTHOGONAL_NEIGHBORS: [u64; 64] = generate_orthogonal_neighbors();

#[inline]
pub const fn orthogonal_neighbors(square: u8) -> u64 {
    ORTHOGONAL_NEIGHBORS[square as usize]
}

const fn generate_orthogonal_neighbors() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut neighbors = 0u64;

        neighbors |= set_if_valid(file, rank + 1);
        neighbors |= set_if_valid(file + 1, rank);
        neighbors |= set_if_valid(file, rank - 1);
        neighbors |= set_if_valid(file - 1, rank);

        table[sq] = neighbors;
        sq += 1;
    }

    table
}

const fn set_if_valid(file: i32, rank: i32) -> u64 {
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return 0;
    }

    let square = (rank as usize) * 8 + (file as usize);
    1u64 << square
}
