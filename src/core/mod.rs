//! Core engine types: coordinates, players, cells, state, configuration, RNG.
//!
//! Nothing in here knows the rules; `graph` and `rules` build on these.

pub mod coord;
pub mod player;
pub mod cell;
pub mod state;
pub mod config;
pub mod error;
pub mod rng;

pub use coord::{CellId, SubcellId, Move, BOARD_SIZE};
pub use player::PlayerId;
pub use cell::{Cell, ClassicalMark, Entry};
pub use state::GameState;
pub use config::PlayConfig;
pub use error::{CoordError, CoordKind, IllegalMove, PlayerOutOfRange};
pub use rng::GameRng;
