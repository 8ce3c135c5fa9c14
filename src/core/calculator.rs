//! # Calculator
//!
//! The evaluation engine behind the keypad. Three states:
//!
//! ```text
//!              digit                 operator
//!   ┌───────┐ ───────▶ ┌───────┐ ───────────▶ ┌───────────┐
//!   │ Entry │          │ Entry │              │ PendingOp │
//!   └───────┘ ◀─────── └───────┘ ◀─────────── └───────────┘
//!        ▲        =            digit / =           │
//!        │ CE / digit                              │ ÷ 0, bad number
//!        │                                         ▼
//!        └──────────────────────────────────── ┌───────┐
//!                                              │ Error │
//!                                              └───────┘
//! ```
//!
//! Every handler is synchronous and total: any key is valid in any state,
//! and failures become the `Error` state rather than a returned error.

use log::{debug, info};

use crate::core::accumulator::Accumulator;
use crate::core::dispatch::{CalcError, PendingOperation};
use crate::core::display::{self, DisplaySettings};
use crate::core::key::{Key, KeyError, Operator};

/// Coarse state, derived from the fields of `Calculator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Entry,
    PendingOp,
    Error(CalcError),
}

#[derive(Debug, Clone)]
pub struct Calculator {
    accumulator: Accumulator,
    pending: Option<PendingOperation>,
    error: Option<CalcError>,
    settings: DisplaySettings,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(DisplaySettings::default())
    }
}

impl Calculator {
    pub fn new(settings: DisplaySettings) -> Self {
        Self {
            accumulator: Accumulator::new(),
            pending: None,
            error: None,
            settings,
        }
    }

    /// Press the key printed with `label`. Unknown labels leave the state untouched.
    pub fn handle_key(&mut self, label: &str) -> Result<(), KeyError> {
        let key = Key::from_label(label)?;
        self.press(key);
        Ok(())
    }

    pub fn press(&mut self, key: Key) {
        debug!("Key pressed: {} (mode {:?})", key, self.mode());
        match key {
            Key::Digit(_) | Key::Point => {
                if let Some(c) = key.entry_char() {
                    self.on_digit(c);
                }
            }
            Key::Operator(op) => self.on_operator(op),
            Key::Equals => self.on_equals(),
            Key::Clear => self.on_clear(),
        }
    }

    /// Feed a digit or decimal point to the accumulator. Leaves the error
    /// state if one is showing. Returns the token as it now reads.
    pub fn on_digit(&mut self, c: char) -> &str {
        if self.error.take().is_some() {
            self.accumulator.clear();
        }
        self.accumulator.push(c)
    }

    pub fn on_operator(&mut self, op: Operator) {
        if self.error.is_some() {
            return;
        }

        // Two operators in a row: the second one wins.
        if let Some(pending) = self.pending.as_mut()
            && self.accumulator.is_empty()
        {
            pending.operator = op;
            return;
        }

        let lhs = match self.pending {
            Some(pending) => self.accumulator.value().and_then(|rhs| pending.resolve(rhs)),
            None => self.accumulator.value(),
        };

        match lhs {
            Ok(operand) => {
                self.pending = Some(PendingOperation::new(operand, op));
                self.accumulator.clear();
            }
            Err(e) => self.fail(e),
        }
    }

    pub fn on_equals(&mut self) {
        if self.error.is_some() {
            return;
        }
        let Some(pending) = self.pending else {
            return;
        };

        match self.accumulator.value().and_then(|rhs| pending.resolve(rhs)) {
            Ok(result) => {
                self.pending = None;
                // Full round-trip text; precision is applied when rendering
                let result = if result == 0.0 { 0.0 } else { result };
                self.accumulator.load_result(format!("{}", result));
            }
            Err(e) => self.fail(e),
        }
    }

    pub fn on_clear(&mut self) {
        self.accumulator.clear();
        self.pending = None;
        self.error = None;
    }

    fn fail(&mut self, error: CalcError) {
        info!("Calculation failed: {}", error);
        self.error = Some(error);
        self.pending = None;
        self.accumulator.clear();
    }

    pub fn current_display(&self) -> String {
        display::render(
            &self.accumulator,
            self.pending.as_ref(),
            self.error,
            &self.settings,
        )
    }

    /// `PendingOp` only while waiting for the second operand; once a digit
    /// of that operand is typed the calculator is back in `Entry`.
    pub fn mode(&self) -> Mode {
        match (self.error, self.pending) {
            (Some(e), _) => Mode::Error(e),
            (None, Some(_)) if self.accumulator.is_empty() => Mode::PendingOp,
            (None, _) => Mode::Entry,
        }
    }

    pub fn pending(&self) -> Option<&PendingOperation> {
        self.pending.as_ref()
    }

    pub fn error(&self) -> Option<CalcError> {
        self.error
    }

    pub fn settings(&self) -> &DisplaySettings {
        &self.settings
    }
}
