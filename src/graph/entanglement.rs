//! Adjacency view over the board.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{CellId, GameState, BOARD_SIZE};

/// One edge out of a cell: the partner cell and the turn of the mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entanglement {
    pub partner: CellId,
    pub turn: u32,
}

/// Edges out of one cell. A cell holds at most nine entries.
pub type Entanglements = SmallVec<[Entanglement; BOARD_SIZE]>;

/// Edges leaving `cell`, in subcell order.
///
/// Pending halves have no partner yet and contribute nothing. Edges into a
/// cell that already holds a classical value are dropped: a settled cell is
/// no longer part of the graph.
#[must_use]
pub fn get_entanglements(game: &GameState, cell: CellId) -> Entanglements {
    game.cell(cell)
        .entries()
        .filter_map(|(_, entry)| {
            let partner = entry.pair?;
            if game.cell(partner).is_classical() {
                return None;
            }
            Some(Entanglement { partner, turn: entry.turn })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ClassicalMark, Entry, PlayerId, SubcellId};

    fn cell(i: u8) -> CellId {
        CellId::new(i).unwrap()
    }

    fn sub(i: u8) -> SubcellId {
        SubcellId::new(i).unwrap()
    }

    #[test]
    fn test_empty_cell_has_no_edges() {
        let game = GameState::new();
        assert!(get_entanglements(&game, cell(0)).is_empty());
    }

    #[test]
    fn test_pending_half_is_not_an_edge() {
        let game = GameState::new().with_entry(cell(0), sub(0), Entry::pending(PlayerId::FIRST, 0));
        assert!(get_entanglements(&game, cell(0)).is_empty());
    }

    #[test]
    fn test_edges_in_subcell_order() {
        let game = GameState::new()
            .with_entry(cell(4), sub(6), Entry::paired(PlayerId::FIRST, 0, cell(1)))
            .with_entry(cell(4), sub(2), Entry::paired(PlayerId::SECOND, 1, cell(7)));

        let edges = get_entanglements(&game, cell(4));

        assert_eq!(
            edges.as_slice(),
            &[
                Entanglement { partner: cell(7), turn: 1 },
                Entanglement { partner: cell(1), turn: 0 },
            ]
        );
    }

    #[test]
    fn test_classical_partner_is_excluded() {
        let game = GameState::new()
            .with_entry(cell(0), sub(0), Entry::paired(PlayerId::FIRST, 0, cell(1)))
            .with_entry(cell(0), sub(1), Entry::paired(PlayerId::SECOND, 1, cell(2)))
            .with_classical(cell(1), ClassicalMark { player: PlayerId::FIRST, turn: 0 });

        let edges = get_entanglements(&game, cell(0));

        assert_eq!(edges.as_slice(), &[Entanglement { partner: cell(2), turn: 1 }]);
    }
}
