//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the calculator,
//! and translates keyboard and mouse events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps until input arrives and redraws
//! once after draining every pending event. Each event runs to completion
//! through `update()` before the next one is read.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{KeypadEvent, KeypadState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core logic)
pub struct TuiState {
    pub keypad: KeypadState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            keypad: KeypadState::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Route one terminal event. Returns the effect of any resulting action.
fn handle_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    match event {
        TuiEvent::Quit => update(app, Action::Quit),
        TuiEvent::Resize => Effect::None,
        _ => match tui.keypad.handle_event(event) {
            Some(KeypadEvent::Press(key)) => update(app, Action::Press(key)),
            None => Effect::None,
        },
    }
}

pub fn run(mut app: App) -> std::io::Result<()> {
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => guard,
        Err(e) => return restore_with(Err(e)),
    };

    let idle_timeout = std::time::Duration::from_millis(500);
    let mut needs_redraw = true; // Force first frame

    let result = loop {
        if needs_redraw {
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &mut tui)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let first_event = match poll_event_timeout(idle_timeout) {
            Ok(event) => event,
            Err(e) => break Err(e),
        };
        let Some(first_event) = first_event else {
            continue;
        };

        // Process first event + drain ALL pending events before next draw
        needs_redraw = true;
        let mut should_quit = false;
        let mut next = Some(first_event);
        while let Some(event) = next {
            debug!("Event loop received: {:?}", event);
            if handle_event(&mut app, &mut tui, &event) == Effect::Quit {
                should_quit = true;
                break;
            }
            next = match poll_event_immediate() {
                Ok(event) => event,
                Err(e) => return restore_with(Err(e)),
            };
        }

        if should_quit {
            break Ok(());
        }
    };

    restore_with(result)
}

fn restore_with(result: std::io::Result<()>) -> std::io::Result<()> {
    ratatui::restore();
    result
}
