//! Game state snapshots.
//!
//! A `GameState` is an immutable value: every operation in `rules` takes a
//! snapshot by reference and returns a new one. The board is an `im`
//! persistent vector of cells, so deriving a new snapshot copies only the
//! touched cell and shares the rest.
//!
//! ## Speculation chain
//!
//! A previewed move carries a `previous` link to the snapshot it was derived
//! from. Each speculative state owns its link exclusively; committed states
//! have none.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::cell::{Cell, ClassicalMark, Entry};
use super::coord::{CellId, Move, SubcellId, BOARD_SIZE};
use super::player::PlayerId;

/// One snapshot of the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Completed spooky marks so far (starts at 0).
    pub turn: u32,

    /// Whose move it is.
    pub player: PlayerId,

    /// First half of the spooky mark currently being placed.
    pub pending_pair: Option<Move>,

    /// At least one unresolved entanglement cycle exists.
    pub collapsing: bool,

    board: Vector<Cell>,

    previous: Option<Box<GameState>>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create a fresh game: turn 0, first player to move, empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            turn: 0,
            player: PlayerId::FIRST,
            pending_pair: None,
            collapsing: false,
            board: (0..BOARD_SIZE).map(|_| Cell::new()).collect(),
            previous: None,
        }
    }

    // === Board Access ===

    /// Get a cell.
    #[must_use]
    pub fn cell(&self, cell: CellId) -> &Cell {
        &self.board[cell.index()]
    }

    /// Get a mutable cell. Only used while building a derived snapshot.
    pub(crate) fn cell_mut(&mut self, cell: CellId) -> &mut Cell {
        &mut self.board[cell.index()]
    }

    /// Get the entry at a subcell, if any.
    #[must_use]
    pub fn entry(&self, cell: CellId, subcell: SubcellId) -> Option<&Entry> {
        self.cell(cell).entry(subcell)
    }

    /// Iterate over (cell id, cell) pairs in board order.
    pub fn cells(&self) -> impl Iterator<Item = (CellId, &Cell)> {
        CellId::all().zip(self.board.iter())
    }

    /// Iterate over every entry on the board.
    pub fn entries(&self) -> impl Iterator<Item = (CellId, SubcellId, &Entry)> {
        self.cells()
            .flat_map(|(id, cell)| cell.entries().map(move |(sub, entry)| (id, sub, entry)))
    }

    /// Every entry currently flagged as sitting on a cycle.
    pub fn collapsing_entries(&self) -> impl Iterator<Item = (CellId, SubcellId, &Entry)> {
        self.entries().filter(|(_, _, entry)| entry.collapsing)
    }

    // === Derived Snapshots ===

    /// Copy of this state with `entry` placed at `cell`/`subcell`.
    ///
    /// This is raw board editing: no legality check, no turn change, no
    /// cycle detection. Intended for building positions and for resolvers.
    #[must_use]
    pub fn with_entry(&self, cell: CellId, subcell: SubcellId, entry: Entry) -> Self {
        let mut next = self.clone();
        next.cell_mut(cell).set_entry(subcell, entry);
        next
    }

    /// Copy of this state with a classical value assigned to `cell`.
    #[must_use]
    pub fn with_classical(&self, cell: CellId, mark: ClassicalMark) -> Self {
        let mut next = self.clone();
        next.cell_mut(cell).classical = Some(mark);
        next
    }

    // === Speculation ===

    /// The snapshot this one was speculatively derived from.
    #[must_use]
    pub fn previous(&self) -> Option<&GameState> {
        self.previous.as_deref()
    }

    /// Whether this snapshot is a preview.
    #[must_use]
    pub fn is_speculative(&self) -> bool {
        self.previous.is_some()
    }

    /// Length of the `previous` chain.
    #[must_use]
    pub fn speculation_depth(&self) -> usize {
        std::iter::successors(self.previous(), |state| state.previous()).count()
    }

    pub(crate) fn set_previous(&mut self, previous: GameState) {
        self.previous = Some(Box::new(previous));
    }

    /// The previous snapshot if there is one, otherwise `self`.
    pub(crate) fn pop_previous(mut self) -> GameState {
        match self.previous.take() {
            Some(previous) => *previous,
            None => self,
        }
    }
}
