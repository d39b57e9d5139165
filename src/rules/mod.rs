//! Game rules: legality, the move engine, collapse flagging, speculation.
//!
//! Every operation is a pure function from a `GameState` snapshot to a new
//! snapshot. Nothing here holds state between calls, so concurrent hosts
//! only need to serialize writes to whatever "current game" slot they keep.

pub mod legality;
pub mod collapse;
pub mod moves;
pub mod resolver;
pub mod speculation;

pub use legality::{legal_moves, legal_spooky_mark, validate_move, validate_spooky_mark};
pub use collapse::{check_collapses, settle_cell};
pub use moves::{entangle, entangle_with, play, play_with, play_with_resolver, spooky_mark};
pub use resolver::{CollapseResolver, UnresolvedCollapse};
pub use speculation::{into_unspeculated, speculate, speculate_with_resolver, unspeculate};
