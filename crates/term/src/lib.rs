//! Terminal presentation layer.
//!
//! Three small pieces: a styled [`fb::FrameBuffer`], a pure
//! [`game_view::BoardView`] that maps game state into it, and a
//! [`renderer::TerminalRenderer`] that owns the raw-mode terminal and
//! flushes frames. Only the renderer performs I/O.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{BoardView, Viewport};
pub use renderer::TerminalRenderer;
