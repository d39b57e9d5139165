//! Cells and the spooky marks they hold.
//!
//! A `Cell` is one square of the outer board. It holds up to nine `Entry`
//! values, one per subcell, each being one half of a spooky mark. Once a
//! collapse is resolved the cell may also carry a `ClassicalMark`.

use im::OrdMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::coord::{CellId, SubcellId, BOARD_SIZE};
use super::player::PlayerId;

/// One half of a spooky mark, occupying a single subcell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    /// Owner of the mark.
    pub player: PlayerId,

    /// Turn at which this half was placed.
    pub turn: u32,

    /// Cell holding the other half. `None` while the partner is awaited.
    pub pair: Option<CellId>,

    /// Most recently touched half of a pair (display emphasis).
    pub focus: bool,

    /// Sits on a detected entanglement cycle.
    pub collapsing: bool,
}

impl Entry {
    /// First half of a spooky mark, still awaiting its partner.
    #[must_use]
    pub const fn pending(player: PlayerId, turn: u32) -> Self {
        Self {
            player,
            turn,
            pair: None,
            focus: true,
            collapsing: false,
        }
    }

    /// A half already linked to `pair`.
    #[must_use]
    pub const fn paired(player: PlayerId, turn: u32, pair: CellId) -> Self {
        Self {
            player,
            turn,
            pair: Some(pair),
            focus: false,
            collapsing: false,
        }
    }

    /// Whether this half is still waiting for its partner.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pair.is_none()
    }
}

/// A finalized mark assigned to a whole cell by collapse resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassicalMark {
    pub player: PlayerId,
    pub turn: u32,
}

impl From<Entry> for ClassicalMark {
    fn from(entry: Entry) -> Self {
        Self {
            player: entry.player,
            turn: entry.turn,
        }
    }
}

/// One cell of the outer board.
///
/// Entries live in a persistent ordered map so that cloning a cell (and so a
/// whole game snapshot) shares structure instead of copying.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    entries: OrdMap<SubcellId, Entry>,

    /// Finalized outcome, once resolution assigns one.
    pub classical: Option<ClassicalMark>,
}

impl Cell {
    /// Create an empty cell.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the entry at a subcell.
    #[must_use]
    pub fn entry(&self, subcell: SubcellId) -> Option<&Entry> {
        self.entries.get(&subcell)
    }

    /// Get a mutable entry at a subcell.
    pub fn entry_mut(&mut self, subcell: SubcellId) -> Option<&mut Entry> {
        self.entries.get_mut(&subcell)
    }

    /// Whether a subcell holds an entry.
    #[must_use]
    pub fn is_occupied(&self, subcell: SubcellId) -> bool {
        self.entries.contains_key(&subcell)
    }

    /// Place an entry, replacing whatever was there.
    pub fn set_entry(&mut self, subcell: SubcellId, entry: Entry) {
        self.entries.insert(subcell, entry);
    }

    /// Iterate over (subcell, entry) pairs in subcell order.
    pub fn entries(&self) -> impl Iterator<Item = (SubcellId, &Entry)> {
        self.entries.iter().map(|(subcell, entry)| (*subcell, entry))
    }

    /// Apply `f` to every entry in subcell order.
    pub fn update_entries(&mut self, mut f: impl FnMut(&mut Entry)) {
        let subcells: SmallVec<[SubcellId; BOARD_SIZE]> = self.entries.keys().copied().collect();
        for subcell in subcells {
            if let Some(entry) = self.entries.get_mut(&subcell) {
                f(entry);
            }
        }
    }

    /// Number of occupied subcells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no subcell is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a classical value has been assigned.
    #[must_use]
    pub fn is_classical(&self) -> bool {
        self.classical.is_some()
    }
}
