//! # Input Accumulator
//!
//! Builds the operand currently being typed, one character at a time.
//! The text is kept verbatim (leading zeros and a trailing point survive)
//! and only parsed when an operator or `=` needs the value.

use crate::core::dispatch::CalcError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Accumulator {
    text: String,
    /// Holds a result loaded by `=`; the next entry replaces it.
    from_result: bool,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a digit or decimal point. A second point in one token is ignored.
    pub fn push(&mut self, c: char) -> &str {
        if self.from_result {
            self.clear();
        }
        if c == '.' && self.has_point() {
            return &self.text;
        }
        self.text.push(c);
        &self.text
    }

    /// Replace the contents with a computed result.
    pub fn load_result(&mut self, text: String) {
        self.text = text;
        self.from_result = true;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.from_result = false;
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// True while holding a result loaded by `=` rather than typed text.
    pub fn is_result(&self) -> bool {
        self.from_result
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn has_point(&self) -> bool {
        self.text.contains('.')
    }

    /// Numeric value of the token. Empty reads as zero, matching what the
    /// display shows; a lone point or an unrepresentable value is malformed.
    pub fn value(&self) -> Result<f64, CalcError> {
        if self.text.is_empty() {
            return Ok(0.0);
        }
        match self.text.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(CalcError::MalformedNumber),
        }
    }
}
