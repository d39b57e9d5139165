//! Previewing moves without committing them.
//!
//! A speculative snapshot is an ordinary `play` result made with
//! `PlayConfig::speculative()` that also carries the snapshot it came from.
//! `unspeculate` pops one level. Previews can be stacked.

use super::moves::play_with_resolver;
use super::resolver::{CollapseResolver, UnresolvedCollapse};
use crate::core::{CellId, GameState, PlayConfig, SubcellId};

/// Preview a play at `cell`/`subcell`.
#[must_use]
pub fn speculate(game: &GameState, cell: CellId, subcell: SubcellId) -> GameState {
    speculate_with_resolver(game, cell, subcell, &UnresolvedCollapse)
}

/// Preview a play, resolving collapses with `resolver`.
#[must_use]
pub fn speculate_with_resolver<R: CollapseResolver + ?Sized>(
    game: &GameState,
    cell: CellId,
    subcell: SubcellId,
    resolver: &R,
) -> GameState {
    let mut next = play_with_resolver(game, cell, subcell, PlayConfig::speculative(), resolver);
    next.set_previous(game.clone());
    next
}

/// Undo one level of speculation. Committed snapshots come back unchanged.
#[must_use]
pub fn unspeculate(game: &GameState) -> GameState {
    match game.previous() {
        Some(previous) => previous.clone(),
        None => game.clone(),
    }
}

/// Owning form of `unspeculate`; avoids cloning the previous snapshot.
#[must_use]
pub fn into_unspeculated(game: GameState) -> GameState {
    game.pop_previous()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::moves::play;

    fn cell(i: u8) -> CellId {
        CellId::new(i).unwrap()
    }

    fn sub(i: u8) -> SubcellId {
        SubcellId::new(i).unwrap()
    }

    #[test]
    fn test_round_trip() {
        let game = play(&GameState::new(), cell(0), sub(0));
        let preview = speculate(&game, cell(1), sub(0));

        assert!(preview.is_speculative());
        assert_eq!(preview.turn, 1);
        assert_eq!(unspeculate(&preview), game);
        assert_eq!(into_unspeculated(preview), game);
    }

    #[test]
    fn test_preview_focuses_pair() {
        let game = play(&GameState::new(), cell(0), sub(0));
        let preview = speculate(&game, cell(1), sub(0));

        assert!(preview.entry(cell(0), sub(0)).unwrap().focus);
        assert!(preview.entry(cell(1), sub(0)).unwrap().focus);
    }

    #[test]
    fn test_unspeculate_committed_is_noop() {
        let game = play(&GameState::new(), cell(4), sub(4));
        assert_eq!(unspeculate(&game), game);
        assert_eq!(into_unspeculated(game.clone()), game);
    }

    #[test]
    fn test_nested_previews_unwind_one_at_a_time() {
        let base = GameState::new();
        let first = speculate(&base, cell(0), sub(0));
        let second = speculate(&first, cell(1), sub(0));

        assert_eq!(second.speculation_depth(), 2);
        assert_eq!(unspeculate(&second), first);
        assert_eq!(unspeculate(&unspeculate(&second)), base);
    }

    #[test]
    fn test_illegal_preview_still_links() {
        let game = play(&GameState::new(), cell(0), sub(0));
        let preview = speculate(&game, cell(0), sub(1));

        assert_eq!(preview.previous(), Some(&game));
        assert_eq!(unspeculate(&preview), game);
    }
}
