//! Terminal party Tetris runner (default binary).
//!
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no ratatui widgets/layout). Soft drop is wired as a held key state:
//! the engine consumes it per tick instead of as discrete actions.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tetris_party::core::{GameSnapshot, GameState};
use tetris_party::input::{handle_key_event, should_quit, HeldKeys};
use tetris_party::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tetris_party::types::{GameAction, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn seed_from_clock() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game_state = GameState::new(seed_from_clock());

    let view = GameView::default();
    let mut held = HeldKeys::new();
    let mut snapshot = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game_state.snapshot_into(&mut snapshot);
        view.render_into(&snapshot, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }

                        // Held tracker owns movement and soft drop; the
                        // plain map covers the one-shot actions.
                        match handle_key_event(key) {
                            Some(GameAction::MoveLeft) | Some(GameAction::MoveRight) => {
                                if let Some(action) = held.handle_key_press(key.code) {
                                    game_state.apply_action(action);
                                }
                            }
                            Some(action) => {
                                game_state.apply_action(action);
                            }
                            None => {
                                // Down-family keys land here and set the
                                // soft-drop hold.
                                held.handle_key_press(key.code);
                            }
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Ignore terminal auto-repeat; DAS/ARR handles repeats internally.
                    }
                    KeyEventKind::Release => {
                        held.handle_key_release(key.code);
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            for action in held.update(TICK_MS) {
                game_state.apply_action(action);
            }

            game_state.tick(TICK_MS, held.soft_drop_held());
        }
    }
}
