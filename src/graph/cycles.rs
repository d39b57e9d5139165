//! Depth-first cycle search over the entanglement graph.
//!
//! ## Edge exclusion
//!
//! Arriving at a cell along the edge of turn `t`, the search never leaves
//! along another edge of turn `t`. Both halves of one mark carry the same
//! turn, so this stops the walk from bouncing straight back. It also means
//! two cells joined by a single mark never form a cycle on their own; two
//! cells joined by two different marks do.
//!
//! ## Cost
//!
//! `detect_cycles` restarts the search from every cell and re-explores shared
//! structure. The same cycle found from different starts is deduplicated
//! because cycles are compared as sets. With nine cells this is bounded and
//! small.

use std::collections::BTreeSet;

use log::trace;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::entanglement::{get_entanglements, Entanglement};
use crate::core::{CellId, GameState, BOARD_SIZE};

/// The cells making up one closed loop.
pub type Cycle = BTreeSet<CellId>;

/// Distinct cycles.
pub type CycleSet = FxHashSet<Cycle>;

type Path = SmallVec<[CellId; BOARD_SIZE]>;

/// Every cycle reachable from `cell`.
///
/// `path` holds the cells already visited, in traversal order, not including
/// `cell`. `from_turn` is the turn label of the edge used to reach `cell`, or
/// `None` at the root.
#[must_use]
pub fn cycle_search(
    game: &GameState,
    cell: CellId,
    path: &[CellId],
    from_turn: Option<u32>,
) -> CycleSet {
    let mut found = CycleSet::default();

    for Entanglement { partner, turn } in get_entanglements(game, cell) {
        if from_turn == Some(turn) {
            continue;
        }

        if let Some(start) = path.iter().position(|&visited| visited == partner) {
            let cycle: Cycle = path[start..].iter().copied().chain(std::iter::once(cell)).collect();
            trace!("cycle closed at {} via turn {}: {:?}", cell, turn, cycle);
            found.insert(cycle);
        } else {
            let mut next: Path = SmallVec::from_slice(path);
            next.push(cell);
            found.extend(cycle_search(game, partner, &next, Some(turn)));
        }
    }

    found
}

/// Every distinct cycle on the board.
#[must_use]
pub fn detect_cycles(game: &GameState) -> CycleSet {
    CellId::all()
        .flat_map(|cell| cycle_search(game, cell, &[], None))
        .collect()
}
