//! Core Arimaa value types shared by the board, the rules, and the search.
//!
//! Side is always carried explicitly next to the piece kind; letter case is
//! only interpreted at the wire codec boundary.

pub use crate::board_state::board::Board;
pub use crate::board_state::board_state_node::BoardStateNode;

/// Side owning a piece, and the side making the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Gold,
    Silver,
}

impl Side {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::Gold => 0,
            Side::Silver => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Gold => Side::Silver,
            Side::Silver => Side::Gold,
        }
    }

    /// Side marker used by the `setposition` wire format.
    #[inline]
    pub const fn wire_code(self) -> char {
        match self {
            Side::Gold => 'g',
            Side::Silver => 's',
        }
    }

    #[inline]
    pub const fn from_wire_code(code: char) -> Option<Self> {
        match code {
            'g' => Some(Side::Gold),
            's' => Some(Side::Silver),
            _ => None,
        }
    }

    /// Direction of this side's home edge. Rabbits may never step this way.
    #[inline]
    pub const fn home_direction(self) -> Direction {
        match self {
            Side::Gold => Direction::South,
            Side::Silver => Direction::North,
        }
    }
}

/// Piece kind, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Rabbit,
    Cat,
    Dog,
    Horse,
    Camel,
    Elephant,
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Rabbit,
    PieceKind::Cat,
    PieceKind::Dog,
    PieceKind::Horse,
    PieceKind::Camel,
    PieceKind::Elephant,
];

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Rabbit => 0,
            PieceKind::Cat => 1,
            PieceKind::Dog => 2,
            PieceKind::Horse => 3,
            PieceKind::Camel => 4,
            PieceKind::Elephant => 5,
        }
    }

    /// Canonical uppercase letter used in step tokens.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Rabbit => 'R',
            PieceKind::Cat => 'C',
            PieceKind::Dog => 'D',
            PieceKind::Horse => 'H',
            PieceKind::Camel => 'M',
            PieceKind::Elephant => 'E',
        }
    }

    /// Inverse of [`PieceKind::letter`]. Only uppercase letters are accepted.
    #[inline]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'R' => Some(PieceKind::Rabbit),
            'C' => Some(PieceKind::Cat),
            'D' => Some(PieceKind::Dog),
            'H' => Some(PieceKind::Horse),
            'M' => Some(PieceKind::Camel),
            'E' => Some(PieceKind::Elephant),
            _ => None,
        }
    }
}

/// A piece on the board: kind plus owning side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Self { kind, side }
    }
}

/// Orthogonal step direction. `North` points toward rank 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// Generation order for every scan over directions.
pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

impl Direction {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    #[inline]
    pub const fn letter(self) -> char {
        match self {
            Direction::North => 'n',
            Direction::East => 'e',
            Direction::South => 's',
            Direction::West => 'w',
        }
    }

    #[inline]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'n' => Some(Direction::North),
            'e' => Some(Direction::East),
            's' => Some(Direction::South),
            'w' => Some(Direction::West),
            _ => None,
        }
    }

    /// Square reached by one step from `square`, or `None` off the board edge.
    #[inline]
    pub const fn step_from(self, square: Square) -> Option<Square> {
        let file = square % 8;
        let rank = square / 8;
        match self {
            Direction::North if rank < 7 => Some(square + 8),
            Direction::East if file < 7 => Some(square + 1),
            Direction::South if rank > 0 => Some(square - 8),
            Direction::West if file > 0 => Some(square - 1),
            _ => None,
        }
    }
}

/// Board square index (`0..=63`, `a1 == 0`, `h8 == 63`).
pub type Square = u8;
