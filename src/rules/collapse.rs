//! Flagging marks that sit on entanglement cycles.

use std::collections::BTreeSet;

use log::info;

use crate::core::{CellId, ClassicalMark, GameState};
use crate::graph::detect_cycles;

/// Recompute the collapse flags for `game`.
///
/// With no cycle on the board the result only has `collapsing` cleared.
/// Otherwise `collapsing` is set, and so is the flag on every entry that
/// lies in a cycle cell and whose partner also lies in a cycle cell.
#[must_use]
pub fn check_collapses(game: &GameState) -> GameState {
    let cycles = detect_cycles(game);
    let mut next = game.clone();

    if cycles.is_empty() {
        next.collapsing = false;
        return next;
    }

    let collapsing_cells: BTreeSet<CellId> = cycles.iter().flatten().copied().collect();
    info!(
        "collapse at turn {}: {} cycle(s) over cells {:?}",
        game.turn,
        cycles.len(),
        collapsing_cells
    );

    next.collapsing = true;
    for &cell in &collapsing_cells {
        next.cell_mut(cell).update_entries(|entry| {
            if entry.pair.is_some_and(|pair| collapsing_cells.contains(&pair)) {
                entry.collapsing = true;
            }
        });
    }
    next
}

/// Assign a classical value to `cell` and recompute collapse state.
///
/// Building block for collapse resolvers. Existing collapse flags are
/// cleared first so that only cycles still present afterwards are flagged.
#[must_use]
pub fn settle_cell(game: &GameState, cell: CellId, mark: ClassicalMark) -> GameState {
    let mut next = game.with_classical(cell, mark);
    for id in CellId::all() {
        next.cell_mut(id).update_entries(|entry| entry.collapsing = false);
    }
    check_collapses(&next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Entry, PlayerId, SubcellId};

    fn cell(i: u8) -> CellId {
        CellId::new(i).unwrap()
    }

    fn sub(i: u8) -> SubcellId {
        SubcellId::new(i).unwrap()
    }

    fn link(game: GameState, turn: u32, (a, sa): (u8, u8), (b, sb): (u8, u8)) -> GameState {
        game.with_entry(cell(a), sub(sa), Entry::paired(PlayerId::FIRST, turn, cell(b)))
            .with_entry(cell(b), sub(sb), Entry::paired(PlayerId::FIRST, turn, cell(a)))
    }

    fn triangle() -> GameState {
        let game = link(GameState::new(), 0, (0, 0), (1, 0));
        let game = link(game, 1, (1, 1), (2, 0));
        link(game, 2, (2, 1), (0, 1))
    }

    #[test]
    fn test_no_cycle_clears_flag() {
        let mut game = link(GameState::new(), 0, (0, 0), (1, 0));
        game.collapsing = true;

        let checked = check_collapses(&game);

        assert!(!checked.collapsing);
        assert_eq!(checked.collapsing_entries().count(), 0);
    }

    #[test]
    fn test_cycle_flags_members_only() {
        // Triangle 0-1-2 plus a tail mark 2-5.
        let game = link(triangle(), 3, (2, 2), (5, 0));

        let checked = check_collapses(&game);

        assert!(checked.collapsing);
        let flagged: BTreeSet<(usize, usize)> = checked
            .collapsing_entries()
            .map(|(c, s, _)| (c.index(), s.index()))
            .collect();
        let expected: BTreeSet<(usize, usize)> =
            [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)].into_iter().collect();
        assert_eq!(flagged, expected);
        assert!(!checked.entry(cell(2), sub(2)).unwrap().collapsing);
        assert!(!checked.entry(cell(5), sub(0)).unwrap().collapsing);
    }

    #[test]
    fn test_check_is_idempotent() {
        let once = check_collapses(&triangle());
        let twice = check_collapses(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_settle_cell_breaks_cycle() {
        let collapsed = check_collapses(&triangle());
        assert!(collapsed.collapsing);

        let mark = ClassicalMark { player: PlayerId::FIRST, turn: 0 };
        let settled = settle_cell(&collapsed, cell(0), mark);

        assert!(!settled.collapsing);
        assert_eq!(settled.collapsing_entries().count(), 0);
        assert_eq!(settled.cell(cell(0)).classical, Some(mark));
    }
}
