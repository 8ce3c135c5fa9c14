//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: title and banner above the calculator
//! - `DisplayLine`: the one-line readout
//! - `StatusBar`: status message and key legend
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `Keypad`: the button grid, with focus, hover and mouse hit testing
//!
//! Components receive external data as props rather than reading `App`
//! directly, so each can be rendered on its own in tests:
//!
//! ```rust,ignore
//! let mut display = DisplayLine { text: app.display(), pending: None, is_error: false };
//! display.render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Heading)
//! ├── display_line.rs  (Readout)
//! ├── keypad.rs        (Button grid)
//! └── status_bar.rs    (Footer)
//! ```

pub mod display_line;
pub mod keypad;
pub mod status_bar;
mod title_bar;

pub use display_line::DisplayLine;
pub use keypad::{Keypad, KeypadEvent, KeypadState};
pub use status_bar::StatusBar;
pub use title_bar::TitleBar;
