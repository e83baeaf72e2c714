//! Game module - wires the grid, engine, and spawner into one session
//!
//! `Game` owns its collaborators outright: the grid is mutated only through
//! the transition engine and the spawner, and input reaches the engine as a
//! single discrete direction per call. One swipe resolves to completion
//! (transition, then spawn, then the game-over check inside the spawn)
//! before the next one is accepted; the caller's event loop provides that
//! serialization.

use crate::engine;
use crate::grid::{Grid, GridError};
use crate::spawn::Spawner;
use crate::types::{Direction, GameConfig, TransitionEvent};

/// What one swipe produced.
///
/// `events` is the complete, ordered animation contract for the transition
/// plus the spawns that followed it. An outcome with no events means the
/// swipe was inert (game already over, or nothing moved and the board was
/// full before the spawn could run).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwipeOutcome {
    pub events: Vec<TransitionEvent>,
    pub game_over: bool,
}

/// Complete game session state.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    grid: Grid,
    spawner: Spawner,
    started: bool,
    game_over: bool,
    moves: u32,
}

impl Game {
    /// Create a new game with the given configuration and RNG seed.
    pub fn new(config: GameConfig, seed: u32) -> Result<Self, GridError> {
        let grid = Grid::new(config.columns, config.rows)?;
        Ok(Self {
            config,
            grid,
            spawner: Spawner::new(seed),
            started: false,
            game_over: false,
            moves: 0,
        })
    }

    /// Place the initial tiles and return their Place events.
    ///
    /// A second call is a no-op. An initial fill larger than the board ends
    /// the game immediately.
    pub fn start(&mut self) -> Result<Vec<TransitionEvent>, GridError> {
        if self.started {
            return Ok(Vec::new());
        }
        self.started = true;

        let mut events = Vec::new();
        let placed = self.spawner.spawn(
            &mut self.grid,
            self.config.initial_fill,
            self.config.base_level,
            &mut events,
        )?;
        if !placed {
            self.game_over = true;
        }
        Ok(events)
    }

    /// Apply one swipe: slide and merge every line, then spawn.
    ///
    /// A swipe always consumes a turn and always attempts its spawns, even
    /// when no tile moved. The terminal condition is checked only by those
    /// spawn attempts: a spawn that finds no free cell sets `game_over`, and
    /// every later swipe is inert.
    pub fn swipe(&mut self, direction: Direction) -> Result<SwipeOutcome, GridError> {
        if !self.started || self.game_over {
            return Ok(SwipeOutcome {
                events: Vec::new(),
                game_over: self.game_over,
            });
        }

        let mut events = engine::slide(&mut self.grid, direction)?;
        self.moves += 1;

        let placed = self.spawner.spawn(
            &mut self.grid,
            self.config.spawn_per_swipe,
            self.config.base_level,
            &mut events,
        )?;
        if !placed {
            self.game_over = true;
        }

        Ok(SwipeOutcome {
            events,
            game_over: self.game_over,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Swipes accepted so far (inert swipes after game over do not count).
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Highest tile level on the board, or None while the board is empty.
    pub fn highest_level(&self) -> Option<u8> {
        self.grid
            .cells()
            .iter()
            .flatten()
            .map(|tile| tile.level)
            .max()
    }

    #[cfg(test)]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
}
