//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Direction`] values, one
//! discrete swipe per key press. Gesture detection details stay here; the
//! engine only ever sees a direction.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit, should_restart};
