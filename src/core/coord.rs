//! Board coordinates.
//!
//! The outer board has nine cells and every cell has nine subcells, both
//! numbered row-major from 0 (top left) to 8 (bottom right):
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```
//!
//! ## Usage
//!
//! ```
//! use spooky_ttt::core::{CellId, Move};
//!
//! let center = CellId::new(4).unwrap();
//! assert_eq!(center.index(), 4);
//! assert!(CellId::new(9).is_err());
//!
//! let mv = Move::new(0, 8).unwrap();
//! assert_eq!(mv.subcell.index(), 8);
//! ```

use serde::{Deserialize, Serialize};

use super::error::{CoordError, CoordKind};

/// Number of cells on the outer board (and subcells per cell).
pub const BOARD_SIZE: usize = 9;

/// An outer-board cell, 0..=8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CellId(u8);

/// A subcell inside one cell, 0..=8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SubcellId(u8);

macro_rules! coord_impls {
    ($ty:ident, $kind:expr, $label:literal) => {
        impl $ty {
            /// Every valid id in ascending order.
            pub const ALL: [$ty; BOARD_SIZE] = [
                $ty(0), $ty(1), $ty(2), $ty(3), $ty(4), $ty(5), $ty(6), $ty(7), $ty(8),
            ];

            /// Create an id, rejecting indices outside 0..=8.
            pub const fn new(index: u8) -> Result<Self, CoordError> {
                if (index as usize) < BOARD_SIZE {
                    Ok(Self(index))
                } else {
                    Err(CoordError::OutOfRange { kind: $kind, index })
                }
            }

            /// Raw 0-based index.
            #[must_use]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            /// Iterate over all ids.
            pub fn all() -> impl Iterator<Item = $ty> {
                Self::ALL.into_iter()
            }
        }

        impl TryFrom<u8> for $ty {
            type Error = CoordError;

            fn try_from(index: u8) -> Result<Self, Self::Error> {
                Self::new(index)
            }
        }

        impl From<$ty> for u8 {
            fn from(id: $ty) -> u8 {
                id.0
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($label, " {}"), self.0)
            }
        }
    };
}

coord_impls!(CellId, CoordKind::Cell, "cell");
coord_impls!(SubcellId, CoordKind::Subcell, "subcell");

/// One placement: a subcell within a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub cell: CellId,
    pub subcell: SubcellId,
}

impl Move {
    /// Create a move from raw indices.
    pub fn new(cell: u8, subcell: u8) -> Result<Self, CoordError> {
        Ok(Self {
            cell: CellId::new(cell)?,
            subcell: SubcellId::new(subcell)?,
        })
    }

    /// Create a move from already-validated ids.
    #[must_use]
    pub const fn at(cell: CellId, subcell: SubcellId) -> Self {
        Self { cell, subcell }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.cell.0, self.subcell.0)
    }
}
