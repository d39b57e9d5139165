//! Error types for the engine boundary.
//!
//! The move engine itself never fails: illegal placements are silent no-ops.
//! These errors exist for hosts that want to reject bad input up front or
//! explain why a move is unavailable.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::coord::{CellId, SubcellId};

/// Which kind of coordinate was being constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoordKind {
    Cell,
    Subcell,
}

impl std::fmt::Display for CoordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoordKind::Cell => write!(f, "cell"),
            CoordKind::Subcell => write!(f, "subcell"),
        }
    }
}

/// A board coordinate outside 0..=8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CoordError {
    #[error("{kind} index {index} out of range (expected 0..=8)")]
    OutOfRange { kind: CoordKind, index: u8 },
}

/// A player index other than 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("player index {0} out of range (expected 0 or 1)")]
pub struct PlayerOutOfRange(pub u8);

/// Reason a placement would be ignored by the move engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("{cell}/{subcell} already holds a mark")]
    Occupied { cell: CellId, subcell: SubcellId },

    #[error("both halves of a spooky mark cannot share {cell}")]
    SameCell { cell: CellId },

    #[error("a collapse is pending; the next play resolves it")]
    Collapsing,
}
