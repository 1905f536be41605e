use crate::board_state::arimaa_types::*;
use crate::moves::step_token::StepToken;
use crate::rules::trap_resolution::resolve_traps;

/// Rabbits may never step toward their own home edge.
#[inline]
pub fn is_rabbit_retreat(piece: Piece, direction: Direction) -> bool {
    piece.kind == PieceKind::Rabbit && direction == piece.side.home_direction()
}

/// True when `direction` from `square` stays on the board and lands on an
/// empty cell.
#[inline]
pub fn is_open_step(board: &Board, square: Square, direction: Direction) -> bool {
    direction
        .step_from(square)
        .is_some_and(|to| board.is_empty(to))
}

/// Move the piece on `from` one square toward `direction`, then resolve
/// traps. Returns `None` (board untouched) when `from` is empty or the
/// destination is off the board or occupied.
pub fn perform_step(board: &mut Board, from: Square, direction: Direction) -> Option<StepToken> {
    let to = direction.step_from(from)?;
    if !board.is_empty(to) {
        return None;
    }

    let piece = board.remove(from)?;
    board.place(to, piece);
    resolve_traps(board);

    Some(StepToken::new(piece.kind, from, direction))
}
