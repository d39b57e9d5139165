//! Collapse resolution seam.
//!
//! Once a cycle closes, the next `play` is a resolution choice rather than a
//! placement. Which mark survives is game policy the engine does not decide;
//! hosts plug it in through `CollapseResolver`.

use log::warn;

use crate::core::{CellId, GameState, SubcellId};

/// Turns a collapse-time selection into a new snapshot.
///
/// ## Implementation Notes
///
/// - Called only when `game.collapsing` is true.
/// - `cell`/`subcell` is whatever the player selected; interpreting it is up
///   to the implementation.
/// - Must be pure: return a new snapshot, never mutate shared state.
/// - `settle_cell` assigns a classical value and recomputes collapse flags.
pub trait CollapseResolver {
    fn resolve(&self, game: &GameState, cell: CellId, subcell: SubcellId) -> GameState;
}

/// Default resolver: leaves the collapse pending.
///
/// The game stays in the collapsing state until a host supplies a resolver.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnresolvedCollapse;

impl CollapseResolver for UnresolvedCollapse {
    fn resolve(&self, game: &GameState, cell: CellId, subcell: SubcellId) -> GameState {
        warn!(
            "no collapse resolver configured; ignoring selection {}/{} at turn {}",
            cell, subcell, game.turn
        );
        game.clone()
    }
}

impl<F> CollapseResolver for F
where
    F: Fn(&GameState, CellId, SubcellId) -> GameState,
{
    fn resolve(&self, game: &GameState, cell: CellId, subcell: SubcellId) -> GameState {
        self(game, cell, subcell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_returns_input() {
        let mut game = GameState::new();
        game.collapsing = true;

        let resolved = UnresolvedCollapse.resolve(&game, CellId::ALL[0], SubcellId::ALL[0]);

        assert_eq!(resolved, game);
    }

    #[test]
    fn test_closure_resolver() {
        let clear = |game: &GameState, _: CellId, _: SubcellId| {
            let mut next = game.clone();
            next.collapsing = false;
            next
        };
        let mut game = GameState::new();
        game.collapsing = true;

        assert!(!clear.resolve(&game, CellId::ALL[4], SubcellId::ALL[4]).collapsing);
    }
}
