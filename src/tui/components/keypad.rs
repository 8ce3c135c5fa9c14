//! # Keypad Component
//!
//! The 4×4 button grid. Follows the persistent state + transient wrapper pattern:
//! - `KeypadState` lives in `TuiState` (focus, hover, cached button areas)
//! - `Keypad` is created each frame with borrowed state and the last pressed key
//!
//! Button areas are recorded during render so mouse clicks can be mapped
//! back to keys without recomputing the layout.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::core::key::{KEYPAD, Key};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const ROWS: usize = KEYPAD.len();
pub const COLS: usize = KEYPAD[0].len();
pub const BUTTON_HEIGHT: u16 = 3;
pub const KEYPAD_HEIGHT: u16 = BUTTON_HEIGHT * ROWS as u16;

/// High-level events emitted by the keypad
#[derive(Debug, Clone, PartialEq)]
pub enum KeypadEvent {
    Press(Key),
}

/// Persistent keypad state.
pub struct KeypadState {
    /// (row, col) of the keyboard-focused button
    pub focus: (usize, usize),
    /// (row, col) under the mouse pointer
    pub hovered: Option<(usize, usize)>,
    /// Button rectangles from the last render, row-major
    areas: Vec<(Rect, (usize, usize))>,
}

impl Default for KeypadState {
    fn default() -> Self {
        Self::new()
    }
}

impl KeypadState {
    pub fn new() -> Self {
        Self {
            focus: (0, 0),
            hovered: None,
            areas: Vec::with_capacity(ROWS * COLS),
        }
    }

    pub fn focused_key(&self) -> Key {
        KEYPAD[self.focus.0][self.focus.1]
    }

    /// Find the button at a screen position, using areas from the last render.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<(usize, usize)> {
        self.areas
            .iter()
            .find(|(rect, _)| {
                column >= rect.x
                    && column < rect.x + rect.width
                    && row >= rect.y
                    && row < rect.y + rect.height
            })
            .map(|(_, pos)| *pos)
    }

    fn focus_key(&mut self, key: Key) {
        if let Some(pos) = position_of(key) {
            self.focus = pos;
        }
    }

    fn move_focus(&mut self, d_row: isize, d_col: isize) {
        let (row, col) = self.focus;
        let row = (row as isize + d_row).clamp(0, ROWS as isize - 1) as usize;
        let col = (col as isize + d_col).clamp(0, COLS as isize - 1) as usize;
        self.focus = (row, col);
    }
}

fn position_of(key: Key) -> Option<(usize, usize)> {
    KEYPAD.iter().enumerate().find_map(|(r, row)| {
        row.iter().position(|k| *k == key).map(|c| (r, c))
    })
}

impl EventHandler for KeypadState {
    type Event = KeypadEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<KeypadEvent> {
        let key = match event {
            TuiEvent::InputChar(c) => Key::from_char(*c)?,
            TuiEvent::Submit => Key::Equals,
            TuiEvent::Clear => Key::Clear,
            TuiEvent::Activate => self.focused_key(),
            TuiEvent::MouseClick(column, row) => {
                let pos = self.hit_test(*column, *row)?;
                self.focus = pos;
                return Some(KeypadEvent::Press(KEYPAD[pos.0][pos.1]));
            }
            TuiEvent::MouseMove(column, row) => {
                self.hovered = self.hit_test(*column, *row);
                return None;
            }
            TuiEvent::CursorUp => {
                self.move_focus(-1, 0);
                return None;
            }
            TuiEvent::CursorDown => {
                self.move_focus(1, 0);
                return None;
            }
            TuiEvent::CursorLeft => {
                self.move_focus(0, -1);
                return None;
            }
            TuiEvent::CursorRight => {
                self.move_focus(0, 1);
                return None;
            }
            TuiEvent::Quit | TuiEvent::Resize => return None,
        };
        self.focus_key(key);
        Some(KeypadEvent::Press(key))
    }
}

/// Transient render wrapper.
pub struct Keypad<'a> {
    pub state: &'a mut KeypadState,
    /// Last key pressed (Prop), drawn bold
    pub last_key: Option<Key>,
}

impl<'a> Keypad<'a> {
    pub fn new(state: &'a mut KeypadState, last_key: Option<Key>) -> Self {
        Self { state, last_key }
    }
}

fn key_color(key: Key) -> Color {
    match key {
        Key::Digit(_) | Key::Point => Color::White,
        Key::Operator(_) => Color::Yellow,
        Key::Equals => Color::Green,
        Key::Clear => Color::Red,
    }
}

impl Component for Keypad<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rows = Layout::vertical([Constraint::Length(BUTTON_HEIGHT); ROWS]).split(area);
        self.state.areas.clear();

        for (r, row_area) in rows.iter().enumerate() {
            let cells =
                Layout::horizontal([Constraint::Ratio(1, COLS as u32); COLS]).split(*row_area);
            for (c, cell) in cells.iter().enumerate() {
                let key = KEYPAD[r][c];
                let mut style = Style::default().fg(key_color(key));
                if self.state.hovered == Some((r, c)) {
                    style = style.bg(Color::DarkGray);
                }
                if self.last_key == Some(key) {
                    style = style.add_modifier(Modifier::BOLD);
                }
                let border_style = if self.state.focus == (r, c) {
                    style.add_modifier(Modifier::REVERSED)
                } else {
                    style.add_modifier(Modifier::DIM)
                };

                let button = Paragraph::new(key.label())
                    .alignment(Alignment::Center)
                    .style(style)
                    .block(Block::bordered().border_style(border_style));
                frame.render_widget(button, *cell);
                self.state.areas.push((*cell, (r, c)));
            }
        }
    }
}
