//! The move engine.
//!
//! `play` is the single entry point and dispatches on the current snapshot:
//!
//! | state                 | `play` does                                   |
//! |-----------------------|-----------------------------------------------|
//! | `collapsing`          | hands the selection to a `CollapseResolver`   |
//! | `pending_pair` is set | `entangle`: places the second half            |
//! | otherwise             | `spooky_mark`: places the first half          |
//!
//! Illegal placements return the input snapshot unchanged. Hosts are
//! expected to filter with `legal_spooky_mark` before offering a move.

use log::debug;

use super::collapse::check_collapses;
use super::legality::legal_spooky_mark;
use super::resolver::{CollapseResolver, UnresolvedCollapse};
use crate::core::{CellId, Entry, GameState, Move, PlayConfig, SubcellId};

/// Place the first half of a spooky mark.
///
/// The new entry is focused and has no partner yet; `pending_pair` points at
/// it. Turn and player are unchanged until the pair is completed.
#[must_use]
pub fn spooky_mark(game: &GameState, cell: CellId, subcell: SubcellId) -> GameState {
    if game.pending_pair.is_some() || !legal_spooky_mark(game, cell, subcell) {
        debug!("ignoring spooky mark at {}/{}", cell, subcell);
        return game.clone();
    }

    let mut next = game.with_entry(cell, subcell, Entry::pending(game.player, game.turn));
    next.pending_pair = Some(Move::at(cell, subcell));
    debug!("{} opens turn {} at {}/{}", game.player, game.turn, cell, subcell);
    next
}

/// Place the second half of a spooky mark, committed.
#[must_use]
pub fn entangle(
    game: &GameState,
    cell: CellId,
    subcell: SubcellId,
    pair_cell: CellId,
    pair_subcell: SubcellId,
) -> GameState {
    entangle_with(game, cell, subcell, pair_cell, pair_subcell, PlayConfig::default())
}

/// Place the second half of a spooky mark, linking it to the pending half at
/// `pair_cell`/`pair_subcell`.
///
/// `pair_cell`/`pair_subcell` must be `game.pending_pair` and still await a
/// partner; anything else is ignored.
///
/// Both halves get `focus` equal to `config.speculative`. The turn advances,
/// the other player moves next and collapse flags are recomputed.
#[must_use]
pub fn entangle_with(
    game: &GameState,
    cell: CellId,
    subcell: SubcellId,
    pair_cell: CellId,
    pair_subcell: SubcellId,
    config: PlayConfig,
) -> GameState {
    if cell == pair_cell || !legal_spooky_mark(game, cell, subcell) {
        debug!("ignoring entangle at {}/{}", cell, subcell);
        return game.clone();
    }
    if game.pending_pair != Some(Move::at(pair_cell, pair_subcell)) {
        debug!("{}/{} is not the pending half", pair_cell, pair_subcell);
        return game.clone();
    }
    let pending = game.entry(pair_cell, pair_subcell).copied().filter(Entry::is_pending);
    let Some(mut partner) = pending else {
        debug!("no pending half at {}/{}", pair_cell, pair_subcell);
        return game.clone();
    };

    let mut placed = Entry::paired(game.player, game.turn, pair_cell);
    placed.focus = config.speculative;
    partner.focus = config.speculative;
    partner.pair = Some(cell);

    let mut next = game
        .with_entry(cell, subcell, placed)
        .with_entry(pair_cell, pair_subcell, partner);
    next.pending_pair = None;
    next.player = game.player.other();
    next.turn = game.turn + 1;

    debug!(
        "{} closes turn {}: {}/{} <-> {}/{}",
        game.player, game.turn, pair_cell, pair_subcell, cell, subcell
    );
    check_collapses(&next)
}

/// Play at `cell`/`subcell` as a committed move.
#[must_use]
pub fn play(game: &GameState, cell: CellId, subcell: SubcellId) -> GameState {
    play_with(game, cell, subcell, PlayConfig::default())
}

/// Play with explicit configuration and the default (no-op) resolver.
#[must_use]
pub fn play_with(game: &GameState, cell: CellId, subcell: SubcellId, config: PlayConfig) -> GameState {
    play_with_resolver(game, cell, subcell, config, &UnresolvedCollapse)
}

/// Play with explicit configuration and collapse resolver.
#[must_use]
pub fn play_with_resolver<R: CollapseResolver + ?Sized>(
    game: &GameState,
    cell: CellId,
    subcell: SubcellId,
    config: PlayConfig,
    resolver: &R,
) -> GameState {
    if game.collapsing {
        return resolver.resolve(game, cell, subcell);
    }
    match game.pending_pair {
        Some(pending) => entangle_with(game, cell, subcell, pending.cell, pending.subcell, config),
        None => spooky_mark(game, cell, subcell),
    }
}
