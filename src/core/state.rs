//! # Application State
//!
//! Core state for the calculator app. No terminal types live here;
//! presentation state (focus, hover) belongs to the `tui` module.
//!
//! ```text
//! App
//! ├── calculator: Calculator       // evaluation engine
//! ├── title: String                // heading above the display
//! ├── banner: String               // line under the heading
//! ├── status_message: String       // footer text
//! └── last_key: Option<Key>        // most recent press, for highlighting
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::calculator::Calculator;
use crate::core::config::ResolvedConfig;
use crate::core::display::DisplaySettings;
use crate::core::key::Key;

pub const DEFAULT_TITLE: &str = "π-rates Calculator";
pub const DEFAULT_BANNER: &str = "Whitworth University";

pub struct App {
    pub calculator: Calculator,
    pub title: String,
    pub banner: String,
    pub status_message: String,
    pub last_key: Option<Key>,
}

impl App {
    pub fn new(calculator: Calculator) -> Self {
        Self {
            calculator,
            title: DEFAULT_TITLE.to_string(),
            banner: DEFAULT_BANNER.to_string(),
            status_message: String::from("Ready"),
            last_key: None,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let settings = DisplaySettings {
            error_token: config.error_token.clone(),
            precision: config.precision,
        };
        Self {
            title: config.title.clone(),
            banner: config.banner.clone(),
            ..Self::new(Calculator::new(settings))
        }
    }

    pub fn display(&self) -> String {
        self.calculator.current_display()
    }
}
