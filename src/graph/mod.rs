//! Entanglement graph and cycle detection.
//!
//! The graph is never stored. Nodes are the nine cells; every completed
//! spooky mark contributes one edge between the two cells holding its
//! halves, labelled with the turn it was played. Adjacency is recomputed
//! from the board on demand, which at nine nodes is cheaper than keeping
//! a second structure in sync with every snapshot.

pub mod entanglement;
pub mod cycles;

pub use entanglement::{get_entanglements, Entanglement, Entanglements};
pub use cycles::{cycle_search, detect_cycles, Cycle, CycleSet};
