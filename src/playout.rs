//! Random playouts for self-play and invariant fuzzing.

use log::debug;

use crate::core::{GameRng, GameState};
use crate::rules::{legal_moves, play};

/// Why a playout stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayoutEnd {
    /// A cycle closed; the next play would be a resolution choice.
    Collapse,
    /// No legal placement remains.
    Exhausted,
    /// The ply budget ran out.
    PlyLimit,
}

/// Snapshots visited by a playout, starting with the initial one.
#[derive(Clone, Debug)]
pub struct Playout {
    pub states: Vec<GameState>,
    pub end: PlayoutEnd,
}

impl Playout {
    /// The final snapshot.
    #[must_use]
    pub fn last(&self) -> &GameState {
        // `states` always holds at least the starting snapshot.
        &self.states[self.states.len() - 1]
    }
}

/// Play uniformly random legal placements from `game`.
///
/// Each ply is one half of a spooky mark. Stops at the first collapse, when
/// no placement is legal, or after `max_plies` plies.
pub fn random_playout(game: &GameState, rng: &mut GameRng, max_plies: usize) -> Playout {
    let mut states = vec![game.clone()];
    let mut current = game.clone();

    let end = loop {
        if current.collapsing {
            break PlayoutEnd::Collapse;
        }
        if states.len() > max_plies {
            break PlayoutEnd::PlyLimit;
        }
        let moves = legal_moves(&current);
        let Some(&mv) = rng.choose(&moves) else {
            break PlayoutEnd::Exhausted;
        };
        current = play(&current, mv.cell, mv.subcell);
        states.push(current.clone());
    };

    debug!("playout ended after {} plies: {:?}", states.len() - 1, end);
    Playout { states, end }
}
