//! Transition engine - the line-merge algorithm
//!
//! One swipe turns into one transition: every row (Left/Right) or column
//! (Up/Down) is resolved independently as a "line" oriented so that index 0
//! is the edge tiles slide toward. Within a line, tiles are visited from the
//! target edge outward:
//!
//! - a tile whose level equals the previous unresolved tile's level merges
//!   into it (the survivor keeps its identity and gains a level), and the
//!   merged result is ineligible for further merges this transition;
//! - any other tile moves to the free cell closest to the target edge and
//!   becomes the new unresolved tile.
//!
//! The walk removes each tile before resolving it, so a tile's own cell is
//! a candidate destination; a tile that would land where it already stands
//! produces no event. An already-compacted line with no equal adjacent
//! pairs therefore yields nothing, and three equal tiles collapse to two
//! (never one) per swipe.
//!
//! Lines never read or write each other's cells, so per-line order is
//! irrelevant; this implementation resolves them sequentially in axis
//! order and emits the concatenated event list.

use crate::grid::{Grid, GridError};
use crate::types::{Direction, TransitionEvent};

/// Slide the whole grid in `direction`, mutating it in place.
///
/// Returns the transition's events in resolution order. An empty list means
/// the swipe changed nothing (the caller still owes the turn's spawn).
pub fn slide(grid: &mut Grid, direction: Direction) -> Result<Vec<TransitionEvent>, GridError> {
    let mut events = Vec::new();
    let lanes = if direction.is_horizontal() {
        grid.rows()
    } else {
        grid.columns()
    };

    for axis_index in 0..lanes {
        slide_line(grid, axis_index, direction, &mut events)?;
    }

    Ok(events)
}

/// Resolve a single line, appending its events.
fn slide_line(
    grid: &mut Grid,
    axis_index: u8,
    direction: Direction,
    events: &mut Vec<TransitionEvent>,
) -> Result<(), GridError> {
    let line = grid.line(axis_index, direction)?;

    let mut occupied = 0;
    for &(x, y) in &line {
        if !grid.is_free(x, y)? {
            occupied += 1;
        }
    }
    if occupied == 0 {
        return Ok(());
    }

    // Destination of the most recent slide that has not yet merged.
    let mut unresolved: Option<(u8, u8)> = None;

    for &(x, y) in &line {
        if grid.is_free(x, y)? {
            continue;
        }
        let tile = grid.remove_tile(x, y)?;

        if let Some((tx, ty)) = unresolved {
            if let Some(target) = grid.tile(tx, ty)? {
                if target.level == tile.level {
                    let upgraded = grid.upgrade_tile(tx, ty)?;
                    events.push(TransitionEvent::Merge {
                        moving: tile.id,
                        target: upgraded.id,
                        at: (tx, ty),
                        new_level: upgraded.level,
                    });
                    unresolved = None;
                    continue;
                }
            }
        }

        // First free cell from the target edge; the cell just vacated above
        // guarantees one exists at or before (x, y).
        let mut dest = (x, y);
        for &(fx, fy) in &line {
            if grid.is_free(fx, fy)? {
                dest = (fx, fy);
                break;
            }
        }

        grid.place_tile(dest.0, dest.1, tile)?;
        if dest != (x, y) {
            events.push(TransitionEvent::Slide {
                tile: tile.id,
                from: (x, y),
                to: dest,
                level: tile.level,
            });
        }
        unresolved = Some(dest);
    }

    Ok(())
}
