//! # Keys
//!
//! The closed set of buttons on the keypad. Adapters never talk to the
//! calculator in raw strings: a label becomes a `Key` first, and only
//! recognised keys reach the state machine.
//!
//! ```text
//!  7   8   9   /
//!  4   5   6   *
//!  1   2   3   -
//!  0   CE  =   +
//! ```

use std::fmt;
use std::str::FromStr;

/// A binary operator on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' | 'x' | 'X' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }
}

/// A single button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// 0 through 9
    Digit(u8),
    /// Decimal point. Not on the printed keypad, reachable from the keyboard.
    Point,
    Operator(Operator),
    Equals,
    /// "CE"
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    Unrecognized(String),
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyError::Unrecognized(label) => write!(f, "unrecognized key label: {label:?}"),
        }
    }
}

impl std::error::Error for KeyError {}

/// Keypad layout, row by row. The source grid had a fifth, unlabeled column
/// with no defined behavior; it is not part of the layout.
pub const KEYPAD: [[Key; 4]; 4] = [
    [Key::Digit(7), Key::Digit(8), Key::Digit(9), Key::Operator(Operator::Divide)],
    [Key::Digit(4), Key::Digit(5), Key::Digit(6), Key::Operator(Operator::Multiply)],
    [Key::Digit(1), Key::Digit(2), Key::Digit(3), Key::Operator(Operator::Subtract)],
    [Key::Digit(0), Key::Clear, Key::Equals, Key::Operator(Operator::Add)],
];

impl Key {
    /// Parse a button label such as `"7"`, `"+"` or `"CE"`.
    pub fn from_label(label: &str) -> Result<Key, KeyError> {
        let trimmed = label.trim();
        if trimmed == "CE" {
            return Ok(Key::Clear);
        }

        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => match c {
                '0'..='9' | '.' | '=' | '+' | '-' | '*' | '/' => {
                    Key::from_char(c).ok_or_else(|| KeyError::Unrecognized(label.to_string()))
                }
                _ => Err(KeyError::Unrecognized(label.to_string())),
            },
            _ => Err(KeyError::Unrecognized(label.to_string())),
        }
    }

    /// Map a typed character to a key. Accepts a few keyboard aliases
    /// (`x` for multiply, `c` for clear) that are not valid labels.
    pub fn from_char(c: char) -> Option<Key> {
        if let Some(d) = c.to_digit(10) {
            return Some(Key::Digit(d as u8));
        }
        match c {
            '.' => Some(Key::Point),
            '=' => Some(Key::Equals),
            'c' | 'C' => Some(Key::Clear),
            _ => Operator::from_symbol(c).map(Key::Operator),
        }
    }

    /// The text printed on the button.
    pub fn label(self) -> String {
        match self {
            Key::Digit(d) => d.to_string(),
            Key::Point => ".".to_string(),
            Key::Operator(op) => op.symbol().to_string(),
            Key::Equals => "=".to_string(),
            Key::Clear => "CE".to_string(),
        }
    }

    /// Digits and the decimal point feed the accumulator.
    pub fn is_entry(self) -> bool {
        matches!(self, Key::Digit(_) | Key::Point)
    }

    /// The character this key contributes to the accumulator, if any.
    pub fn entry_char(self) -> Option<char> {
        match self {
            Key::Digit(d) => char::from_digit(d as u32, 10),
            Key::Point => Some('.'),
            _ => None,
        }
    }
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Key::from_label(s)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_keypad_label_parses_back() {
        for row in KEYPAD {
            for key in row {
                assert_eq!(Key::from_label(&key.label()), Ok(key));
            }
        }
    }

    #[test]
    fn test_from_label_trims_whitespace() {
        assert_eq!(Key::from_label("  CE "), Ok(Key::Clear));
        assert_eq!(Key::from_label(" 9"), Ok(Key::Digit(9)));
    }

    #[test]
    fn test_from_label_rejects_unknown() {
        assert_eq!(
            Key::from_label("?"),
            Err(KeyError::Unrecognized("?".to_string()))
        );
        assert!(Key::from_label("").is_err());
        assert!(Key::from_label("12").is_err());
        assert!(Key::from_label("ce").is_err());
    }

    #[test]
    fn test_keyboard_aliases_are_not_labels() {
        assert_eq!(Key::from_char('x'), Some(Key::Operator(Operator::Multiply)));
        assert_eq!(Key::from_char('c'), Some(Key::Clear));
        assert!(Key::from_label("x").is_err());
        assert!(Key::from_label("c").is_err());
    }

    #[test]
    fn test_point_parses_from_label() {
        assert_eq!(".".parse::<Key>(), Ok(Key::Point));
        assert_eq!(Key::Point.entry_char(), Some('.'));
        assert!(Key::Point.is_entry());
        assert!(!Key::Equals.is_entry());
    }

    #[test]
    fn test_keypad_has_no_unassigned_buttons() {
        let labels: Vec<String> = KEYPAD.iter().flatten().map(|k| k.label()).collect();
        assert_eq!(labels.len(), 16);
        assert!(!labels.iter().any(|l| l == "?"));
    }
}
