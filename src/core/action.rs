//! # Actions
//!
//! Everything that can happen in the app becomes an `Action`.
//! User clicks "7"? That's `Action::Press(Key::Digit(7))`.
//! User hits Esc? That's `Action::Quit`.
//!
//! The `update()` function takes the current state and an action, applies
//! it, and returns an `Effect` telling the adapter what to do next. No I/O
//! happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::calculator::Mode;
use crate::core::key::Key;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Press(Key),
    Quit,
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Press(key) => {
            app.calculator.press(key);
            app.last_key = Some(key);
            app.status_message = match app.calculator.mode() {
                // Calculator::fail already logs the transition
                Mode::Error(e) => format!("{} (press a digit or CE)", e),
                Mode::PendingOp => match app.calculator.pending() {
                    Some(p) => format!("Pressed {} | pending {}", key, p.operator.symbol()),
                    None => format!("Pressed {}", key),
                },
                Mode::Entry => format!("Pressed {}", key),
            };
            Effect::None
        }
        Action::Quit => {
            info!("Quit requested");
            Effect::Quit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::key::Operator;
    use crate::test_support::test_app;

    fn press(app: &mut App, label: &str) -> Effect {
        let key = Key::from_label(label).unwrap();
        update(app, Action::Press(key))
    }

    #[test]
    fn test_press_updates_display_and_last_key() {
        let mut app = test_app();
        assert_eq!(press(&mut app, "7"), Effect::None);
        assert_eq!(app.display(), "7");
        assert_eq!(app.last_key, Some(Key::Digit(7)));
        assert_eq!(app.status_message, "Pressed 7");
    }

    #[test]
    fn test_status_shows_pending_operator() {
        let mut app = test_app();
        press(&mut app, "7");
        press(&mut app, "*");
        assert_eq!(app.last_key, Some(Key::Operator(Operator::Multiply)));
        assert_eq!(app.status_message, "Pressed * | pending *");
    }

    #[test]
    fn test_status_reports_error() {
        let mut app = test_app();
        for label in ["6", "/", "0", "="] {
            press(&mut app, label);
        }
        assert_eq!(app.display(), "Error");
        assert!(app.status_message.starts_with("division by zero"));
    }

    #[test]
    fn test_ignored_keys_in_error_keep_error_status() {
        let mut app = test_app();
        for label in ["6", "/", "0", "="] {
            press(&mut app, label);
        }
        let status = app.status_message.clone();
        for label in ["+", "=", "*"] {
            press(&mut app, label);
            assert_eq!(app.status_message, status);
            assert_eq!(app.display(), "Error");
        }
        press(&mut app, "5");
        assert_eq!(app.status_message, "Pressed 5");
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
