//! BoardView: maps a [`Game`](crate::core::Game) into a terminal framebuffer.
//!
//! This module is pure (no I/O). It draws the final state of the grid; the
//! engine's event list is for frontends that tween, which this one does not.

use crate::core::Game;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::BASE_VALUE;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the board.
pub struct BoardView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 8x3 leaves room for a centered six-digit value per tile.
        Self {
            cell_w: 8,
            cell_h: 3,
        }
    }
}

impl BoardView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport on every call.
    pub fn render_into(&self, game: &Game, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell::default());

        let columns = game.grid().columns() as u16;
        let rows = game.grid().rows() as u16;
        let board_px_w = columns * self.cell_w;
        let board_px_h = rows * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle {
            fg: Rgb::new(187, 173, 160),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for y in 0..rows {
            for x in 0..columns {
                let idx = (y as usize) * (columns as usize) + (x as usize);
                match game.grid().cells()[idx] {
                    Some(tile) => self.draw_tile(fb, start_x, start_y, x, y, tile.level),
                    None => self.draw_empty_cell(fb, start_x, start_y, x, y),
                }
            }
        }

        self.draw_side_panel(fb, game, viewport, start_x, start_y, frame_w);

        if game.game_over() {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &Game, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle {
            fg: Rgb::new(110, 100, 95),
            bg: Rgb::new(45, 42, 38),
            bold: false,
        };
        let (px, py) = self.cell_origin(start_x, start_y, x, y);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px + self.cell_w / 2, py + self.cell_h / 2, '·', style);
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        level: u8,
    ) {
        let style = CellStyle {
            fg: text_color(level),
            bg: level_color(level),
            bold: true,
        };
        let (px, py) = self.cell_origin(start_x, start_y, x, y);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

        let value = (BASE_VALUE << level).to_string();
        fb.put_str_centered(px, py + self.cell_h / 2, self.cell_w, &value, style);
    }

    fn cell_origin(&self, start_x: u16, start_y: u16, x: u16, y: u16) -> (u16, u16) {
        (
            start_x + 1 + x * self.cell_w,
            start_y + 1 + y * self.cell_h,
        )
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        game: &Game,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 10 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        let best = match game.highest_level() {
            Some(level) => (BASE_VALUE << level).to_string(),
            None => "-".to_string(),
        };
        fb.put_str(panel_x, y, &best, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &game.moves().to_string(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "FREE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &game.grid().count_free().to_string(), value);
        y = y.saturating_add(2);

        for help in ["←↑↓→ swipe", "r restart", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, help, value);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        fb.put_str_centered(start_x, mid_y, frame_w, text, style);
    }
}

/// Tile background per level, the classic ramp; saturates past 2048.
fn level_color(level: u8) -> Rgb {
    const RAMP: [Rgb; 11] = [
        Rgb::new(238, 228, 218), // 2
        Rgb::new(237, 224, 200), // 4
        Rgb::new(242, 177, 121), // 8
        Rgb::new(245, 149, 99),  // 16
        Rgb::new(246, 124, 95),  // 32
        Rgb::new(246, 94, 59),   // 64
        Rgb::new(237, 207, 114), // 128
        Rgb::new(237, 204, 97),  // 256
        Rgb::new(237, 200, 80),  // 512
        Rgb::new(237, 197, 63),  // 1024
        Rgb::new(237, 194, 46),  // 2048
    ];
    RAMP[(level as usize).min(RAMP.len() - 1)]
}

/// Dark text on the two lightest tiles, light text everywhere else.
fn text_color(level: u8) -> Rgb {
    if level < 2 {
        Rgb::new(119, 110, 101)
    } else {
        Rgb::new(249, 246, 242)
    }
}
