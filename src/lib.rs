//! π-rates Calculator library exports

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

use crate::core::calculator::Calculator;
use crate::core::key::KeyError;

/// Feed whitespace-separated key labels through a calculator and return
/// the final display. Stops at the first unrecognized label.
pub fn run_keys(calculator: &mut Calculator, keys: &str) -> Result<String, KeyError> {
    for label in keys.split_whitespace() {
        calculator.handle_key(label)?;
    }
    Ok(calculator.current_display())
}
