//! Error types surfaced by the position codec, the step replay helpers, and
//! the sequence solver.
//!
//! The solver deliberately has only two failure classes: malformed input
//! (`SolveError::Format`), reported before any search runs, and
//! `SolveError::NoSequence`, which covers every rule violation and every
//! genuinely unreachable transition without saying which one applied.

use std::error::Error;
use std::fmt;

/// A `setposition` wire string could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// No side marker precedes the quoted payload.
    MissingSide,
    /// The side marker is neither `g` nor `s`.
    InvalidSide(String),
    /// The payload is not wrapped in double quotes.
    MissingQuotes,
    /// The payload does not hold exactly 64 cells.
    ///
    /// Payload: the number of cells found.
    WrongLength(usize),
    /// A payload cell is neither a space nor a piece letter.
    InvalidCell(char),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::MissingSide => write!(f, "missing side marker before board payload"),
            FormatError::InvalidSide(side) => write!(f, "invalid side marker: {side}"),
            FormatError::MissingQuotes => write!(f, "board payload must be double-quoted"),
            FormatError::WrongLength(len) => {
                write!(f, "board payload must hold 64 cells, found {len}")
            }
            FormatError::InvalidCell(ch) => write!(f, "invalid board cell character '{ch}'"),
        }
    }
}

impl Error for FormatError {}

/// A step token could not be parsed or replayed onto a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    InvalidToken(String),
    NoPieceAtOrigin(String),
    OffBoard(String),
    DestinationOccupied(String),
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepError::InvalidToken(token) => write!(f, "invalid step token: {token}"),
            StepError::NoPieceAtOrigin(token) => {
                write!(f, "step {token} names a square without that piece")
            }
            StepError::OffBoard(token) => write!(f, "step {token} leaves the board"),
            StepError::DestinationOccupied(token) => {
                write!(f, "step {token} moves onto an occupied square")
            }
        }
    }
}

impl Error for StepError {}

/// Failure of [`crate::search::sequence_solver::solve_turn`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    Format(FormatError),
    NoSequence,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::Format(err) => write!(f, "malformed position: {err}"),
            SolveError::NoSequence => write!(f, "no legal step sequence explains the transition"),
        }
    }
}

impl Error for SolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SolveError::Format(err) => Some(err),
            SolveError::NoSequence => None,
        }
    }
}

impl From<FormatError> for SolveError {
    fn from(err: FormatError) -> Self {
        SolveError::Format(err)
    }
}
