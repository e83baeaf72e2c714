//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the whole rule set of the tile-merging game. It has
//! **zero dependencies** on UI, input handling, or I/O, making it:
//!
//! - **Deterministic**: same seed and same swipes produce identical games
//! - **Testable**: every rule is exercised by unit and integration tests
//! - **Portable**: usable from a terminal frontend, a GUI, or headless
//!
//! # Module Structure
//!
//! - [`grid`]: cell storage, occupancy queries, and direction-oriented lines
//! - [`engine`]: the per-line slide/merge transition algorithm
//! - [`spawn`]: random placement of new tiles and terminal detection
//! - [`game`]: session wiring (initial fill, swipe turns, game over)
//! - [`rng`]: seedable LCG behind the spawner
//!
//! # Game Rules
//!
//! - Tiles slide toward the swiped edge; equal-level neighbors along the
//!   slide merge into the next level.
//! - A tile merges at most once per swipe; three equal tiles collapse to
//!   two, never one.
//! - Every swipe spawns new tiles, whether or not the swipe moved anything.
//! - The game is over the moment a spawn attempt finds no free cell.
//!
//! # Example
//!
//! ```
//! use tui_2048_core::Game;
//! use tui_2048_core::types::{Direction, GameConfig};
//!
//! let mut game = Game::new(GameConfig::default(), 12345).unwrap();
//! game.start().unwrap();
//!
//! let outcome = game.swipe(Direction::Left).unwrap();
//! assert!(!outcome.game_over);
//! // `outcome.events` is the animation script for this swipe.
//! ```

pub mod engine;
pub mod game;
pub mod grid;
pub mod rng;
pub mod spawn;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use engine::slide;
pub use game::{Game, SwipeOutcome};
pub use grid::{Grid, GridError};
pub use rng::SimpleRng;
pub use spawn::Spawner;
