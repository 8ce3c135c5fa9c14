//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::calculator::Calculator;
use crate::core::state::App;

/// Creates a calculator with default display settings.
pub fn test_calculator() -> Calculator {
    Calculator::default()
}

/// Creates a test App around a default calculator.
pub fn test_app() -> App {
    App::new(test_calculator())
}

/// Presses each label in order. Panics on an unknown label.
pub fn press_all(calc: &mut Calculator, labels: &[&str]) {
    for label in labels {
        calc.handle_key(label)
            .unwrap_or_else(|e| panic!("bad label in test: {e}"));
    }
}
