//! Step token notation: `<Piece><file><rank><direction>`, e.g. `Ed4n`.
//!
//! The square is always the step's origin. The piece letter is uppercase for
//! both sides; side is implied by the board the token is read against.

use std::fmt;
use std::str::FromStr;

use crate::board_state::arimaa_types::*;
use crate::errors::StepError;
use crate::utils::algebraic::{algebraic_to_square, file_char, rank_char};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StepToken {
    pub kind: PieceKind,
    pub origin: Square,
    pub direction: Direction,
}

impl StepToken {
    #[inline]
    pub const fn new(kind: PieceKind, origin: Square, direction: Direction) -> Self {
        Self {
            kind,
            origin,
            direction,
        }
    }

    #[inline]
    pub const fn destination(&self) -> Option<Square> {
        self.direction.step_from(self.origin)
    }
}

impl fmt::Display for StepToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.kind.letter(),
            file_char(self.origin),
            rank_char(self.origin),
            self.direction.letter()
        )
    }
}

impl FromStr for StepToken {
    type Err = StepError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || StepError::InvalidToken(token.to_owned());

        if !token.is_ascii() || token.len() != 4 {
            return Err(invalid());
        }

        let mut chars = token.chars();
        let kind = chars.next().and_then(PieceKind::from_letter).ok_or_else(invalid)?;
        let origin = algebraic_to_square(&token[1..3]).map_err(|_| invalid())?;
        let direction = chars.nth(2).and_then(Direction::from_letter).ok_or_else(invalid)?;

        Ok(Self::new(kind, origin, direction))
    }
}

/// Join tokens with single spaces.
pub fn steps_to_notation(steps: &[StepToken]) -> String {
    steps
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a space-separated token list.
pub fn notation_to_steps(notation: &str) -> Result<Vec<StepToken>, StepError> {
    notation.split_whitespace().map(str::parse::<StepToken>).collect()
}

#[cfg(test)]
mod tests {
    use super::{notation_to_steps, steps_to_notation, StepToken};
    use crate::board_state::arimaa_types::*;
    use crate::errors::StepError;

    #[test]
    fn displays_origin_square_and_direction() {
        let token = StepToken::new(PieceKind::Horse, 15, Direction::North);
        assert_eq!(token.to_string(), "Hh2n");
        assert_eq!(token.destination(), Some(23));
    }

    #[test]
    fn parses_canonical_tokens() {
        let token: StepToken = "Md7w".parse().expect("token should parse");
        assert_eq!(token, StepToken::new(PieceKind::Camel, 51, Direction::West));
    }

    #[test]
    fn rejects_malformed_tokens() {
        for bad in ["", "Ed4", "ed4n", "Ei4n", "Ed9n", "Ed4x", "Rc3x", "Ed4nn", "Éd4n"] {
            assert_eq!(
                bad.parse::<StepToken>(),
                Err(StepError::InvalidToken(bad.to_owned())),
                "token {bad:?}"
            );
        }
    }

    #[test]
    fn notation_lists_round_trip() {
        let steps = notation_to_steps("Rd5n  Ed4n").expect("notation should parse");
        assert_eq!(steps.len(), 2);
        assert_eq!(steps_to_notation(&steps), "Rd5n Ed4n");
        assert!(notation_to_steps("").expect("empty notation is valid").is_empty());
    }
}
