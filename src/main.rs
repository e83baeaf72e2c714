//! Terminal 2048 runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no ratatui widgets/layout).

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_2048::core::Game;
use tui_2048::input::{handle_key_event, should_quit, should_restart};
use tui_2048::term::{BoardView, FrameBuffer, TerminalRenderer, Viewport};
use tui_2048::types::GameConfig;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.subsec_nanos() ^ elapsed.as_secs() as u32)
        .unwrap_or(1)
}

fn new_game() -> Result<Game> {
    let mut game = Game::new(GameConfig::default(), clock_seed())?;
    game.start()?;
    Ok(game)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = new_game()?;
    let view = BoardView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // The board only changes on key presses; the timeout just lets
        // resizes repaint without a keypress.
        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if should_restart(key) {
                    game = new_game()?;
                    continue;
                }
                if let Some(direction) = handle_key_event(key) {
                    // One swipe resolves fully (transition, then spawn)
                    // before the next event is read.
                    game.swipe(direction)?;
                }
            }
            Event::Resize(..) => {
                // Next loop iteration redraws at the new size.
            }
            _ => {}
        }
    }
}
