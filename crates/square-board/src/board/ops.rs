//! Slide/merge ops shared by every directional move.

use log::trace;

use super::grid::{Cell, Direction};
use super::store::GameBoard;

/// Compact a lane's values toward index 0 and merge equal adjacent pairs.
///
/// The lane must already be oriented so that index 0 faces the direction
/// of travel. `combine` produces the replacement for a merged pair; a
/// merged value is spent and never merges again with a third equal
/// neighbour, so `[a, a, a]` becomes `[combine(a), a]` and
/// `[a, a, a, a]` becomes `[combine(a), combine(a)]`.
pub fn move_and_merge<T, F>(values: &[Option<T>], combine: F) -> Vec<T>
where
    T: Clone + PartialEq,
    F: Fn(&T) -> T,
{
    let mut compacted = values.iter().filter_map(|value| value.as_ref());
    let mut merged = Vec::new();
    let mut pending = compacted.next();
    for current in compacted {
        match pending.take() {
            Some(prev) if prev == current => merged.push(combine(prev)),
            Some(prev) => {
                merged.push(prev.clone());
                pending = Some(current);
            }
            None => pending = Some(current),
        }
    }
    if let Some(last) = pending {
        merged.push(last.clone());
    }
    merged
}

/// Apply one directional move to the whole board.
///
/// Every lane is processed even after an earlier lane changes, so the
/// board always reflects one simultaneous move. Returns true iff any
/// lane changed; the 2048 engine uses that as its cue to spawn a tile.
pub fn move_values<T, F>(board: &mut GameBoard<T>, direction: Direction, combine: F) -> bool
where
    T: Clone + PartialEq,
    F: Fn(&T) -> T,
{
    let lanes = lanes_for(board, direction);
    let moved = lanes
        .into_iter()
        .fold(false, |acc, lane| move_lane(board, &lane, &combine) || acc);
    trace!("move {:?}: changed={}", direction, moved);
    moved
}

/// The `width` lanes for `direction`, each ordered so index 0 is the
/// cell nearest the edge the values travel toward.
fn lanes_for<T>(board: &GameBoard<T>, direction: Direction) -> Vec<Vec<Cell>> {
    let grid = board.grid();
    let w = grid.width();
    match direction {
        Direction::Up => (1..=w).map(|j| grid.column(1..=w, j)).collect(),
        Direction::Down => (1..=w).map(|j| grid.column((1..=w).rev(), j)).collect(),
        Direction::Left => (1..=w).map(|i| grid.row(i, 1..=w)).collect(),
        Direction::Right => (1..=w).map(|i| grid.row(i, (1..=w).rev())).collect(),
    }
}

/// Merge one lane and write it back: merged values fill the leading
/// cells, trailing cells are cleared. Returns whether the lane changed;
/// pure compaction counts as a change, an already-settled lane does not.
fn move_lane<T, F>(board: &mut GameBoard<T>, lane: &[Cell], combine: F) -> bool
where
    T: Clone + PartialEq,
    F: Fn(&T) -> T,
{
    let before: Vec<Option<T>> = lane.iter().map(|&cell| board.get(cell).cloned()).collect();
    let after = move_and_merge(&before, combine);
    let changed = before
        .iter()
        .enumerate()
        .any(|(k, value)| value.as_ref() != after.get(k));
    if changed {
        for (k, &cell) in lane.iter().enumerate() {
            board.set(cell, after.get(k).cloned());
        }
    }
    changed
}
