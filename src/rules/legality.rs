//! Legality of spooky-mark placements.

use crate::core::{CellId, GameState, IllegalMove, Move, SubcellId};

/// Why `cell`/`subcell` cannot take the next half of a spooky mark.
///
/// Checks that the subcell is empty and that, when the first half is
/// already down, the second half goes into a different cell.
pub fn validate_spooky_mark(
    game: &GameState,
    cell: CellId,
    subcell: SubcellId,
) -> Result<(), IllegalMove> {
    if game.pending_pair.is_some_and(|pending| pending.cell == cell) {
        return Err(IllegalMove::SameCell { cell });
    }
    if game.cell(cell).is_occupied(subcell) {
        return Err(IllegalMove::Occupied { cell, subcell });
    }
    Ok(())
}

/// Whether `cell`/`subcell` may take the next half of a spooky mark.
#[must_use]
pub fn legal_spooky_mark(game: &GameState, cell: CellId, subcell: SubcellId) -> bool {
    validate_spooky_mark(game, cell, subcell).is_ok()
}

/// Like `validate_spooky_mark`, but also rejects placements while a
/// collapse is pending, since `play` then resolves instead of placing.
pub fn validate_move(game: &GameState, mv: Move) -> Result<(), IllegalMove> {
    if game.collapsing {
        return Err(IllegalMove::Collapsing);
    }
    validate_spooky_mark(game, mv.cell, mv.subcell)
}

/// Every placement `play` would accept right now.
///
/// Empty while a collapse is pending.
#[must_use]
pub fn legal_moves(game: &GameState) -> Vec<Move> {
    if game.collapsing {
        return Vec::new();
    }
    CellId::all()
        .flat_map(|cell| SubcellId::all().map(move |subcell| Move::at(cell, subcell)))
        .filter(|mv| legal_spooky_mark(game, mv.cell, mv.subcell))
        .collect()
}
