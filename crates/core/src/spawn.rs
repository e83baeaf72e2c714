//! Spawner - random tile placement and terminal detection
//!
//! All tile creation flows through the spawner: the initial board fill and
//! the per-swipe spawns use the same path, and tile ids are minted here.
//!
//! Placement re-rolls random (x, y) pairs until a free cell is hit rather
//! than drawing from the free-cell set. The board-full check runs before
//! each placement, so a full board is detected on the spawn attempt that
//! cannot be satisfied and never earlier.

use crate::grid::{Grid, GridError};
use crate::rng::SimpleRng;
use crate::types::{Tile, TileId, TransitionEvent};

/// Places new tiles into random free cells.
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: SimpleRng,
    next_id: TileId,
}

impl Spawner {
    /// Create a spawner with the given RNG seed.
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            next_id: 0,
        }
    }

    fn mint(&mut self, level: u8) -> Tile {
        let tile = Tile::new(self.next_id, level);
        self.next_id = self.next_id.wrapping_add(1);
        tile
    }

    /// Place up to `count` fresh tiles of `level` into random free cells,
    /// emitting a Place event per tile.
    ///
    /// Returns `false` when an attempt finds no free cell anywhere: the
    /// terminal condition. Remaining requested spawns are abandoned, so a
    /// full board reports exactly once per call and exactly `count_free()`
    /// tiles will have landed.
    pub fn spawn(
        &mut self,
        grid: &mut Grid,
        count: u32,
        level: u8,
        events: &mut Vec<TransitionEvent>,
    ) -> Result<bool, GridError> {
        for _ in 0..count {
            if grid.count_free() == 0 {
                return Ok(false);
            }

            loop {
                let x = self.rng.next_range(grid.columns() as u32) as u8;
                let y = self.rng.next_range(grid.rows() as u32) as u8;
                if grid.is_free(x, y)? {
                    let tile = self.mint(level);
                    grid.place_tile(x, y, tile)?;
                    events.push(TransitionEvent::Place {
                        tile: tile.id,
                        at: (x, y),
                        level,
                    });
                    break;
                }
            }
        }
        Ok(true)
    }
}
