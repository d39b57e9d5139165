//! # spooky-ttt
//!
//! Rules engine for quantum ultimate tic-tac-toe.
//!
//! Every cell of the outer 3×3 board is itself a 3×3 board. A move places a
//! *spooky mark*: two halves in two subcells of two different cells, played
//! one after the other. Each completed mark entangles the two cells. When
//! the entanglements close a loop the marks on it collapse.
//!
//! ## Design Principles
//!
//! 1. **Immutable snapshots**: `GameState` is never mutated in place. Every
//!    operation returns a new snapshot; `im` keeps clones cheap.
//!
//! 2. **Silent no-ops**: Illegal placements return the input unchanged.
//!    Hosts filter moves with `legal_spooky_mark` / `legal_moves`.
//!
//! 3. **Explicit configuration**: Preview mode is a `PlayConfig` value passed
//!    into the move engine, not ambient state.
//!
//! 4. **Pluggable resolution**: The engine detects and flags collapses.
//!    Choosing the classical outcome is a `CollapseResolver` the host owns.
//!
//! ## Example
//!
//! ```
//! use spooky_ttt::{new_game, play, CellId, PlayerId, SubcellId};
//!
//! let cell = |i| CellId::new(i).unwrap();
//! let sub = |i| SubcellId::new(i).unwrap();
//!
//! let game = new_game();
//! let game = play(&game, cell(0), sub(0));
//! assert!(game.pending_pair.is_some());
//!
//! let game = play(&game, cell(1), sub(0));
//! assert_eq!(game.turn, 1);
//! assert_eq!(game.player, PlayerId::SECOND);
//! assert_eq!(game.entry(cell(0), sub(0)).unwrap().pair, Some(cell(1)));
//! ```
//!
//! ## Modules
//!
//! - `core`: Coordinates, players, cells, snapshots, configuration, RNG
//! - `graph`: Entanglement adjacency and cycle detection
//! - `rules`: Legality, move engine, collapse flagging, speculation
//! - `playout`: Seeded random playouts

pub mod core;
pub mod graph;
pub mod rules;
pub mod playout;

// Re-export commonly used types
pub use crate::core::{
    CellId, SubcellId, Move, BOARD_SIZE,
    PlayerId,
    Cell, ClassicalMark, Entry,
    GameState, PlayConfig,
    CoordError, IllegalMove, PlayerOutOfRange,
    GameRng,
};

pub use crate::graph::{get_entanglements, detect_cycles, cycle_search, Entanglement, Cycle, CycleSet};

pub use crate::rules::{
    legal_spooky_mark, legal_moves, validate_spooky_mark, validate_move,
    check_collapses, settle_cell,
    spooky_mark, entangle, entangle_with, play, play_with, play_with_resolver,
    speculate, speculate_with_resolver, unspeculate, into_unspeculated,
    CollapseResolver, UnresolvedCollapse,
};

pub use crate::playout::{random_playout, Playout, PlayoutEnd};

/// Start a new game: turn 0, first player to move, empty board.
#[must_use]
pub fn new_game() -> GameState {
    GameState::new()
}
