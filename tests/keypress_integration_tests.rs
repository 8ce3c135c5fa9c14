use pirates_calc::core::action::{Action, Effect, update};
use pirates_calc::core::display::DisplaySettings;
use pirates_calc::core::state::App;
use pirates_calc::core::{CalcError, Calculator, Key, KeyError, Mode};
use pirates_calc::run_keys;
use proptest::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

/// Presses every label and returns the display after the last one
fn display_after(labels: &str) -> String {
    let mut calc = Calculator::default();
    run_keys(&mut calc, labels).expect("all labels should be valid")
}

// ============================================================================
// Display Echo
// ============================================================================

proptest! {
    #[test]
    fn test_digit_sequences_echo_verbatim(digits in "[0-9]{1,12}") {
        let mut calc = Calculator::default();
        for c in digits.chars() {
            calc.handle_key(&c.to_string()).unwrap();
        }
        prop_assert_eq!(calc.current_display(), digits);
    }
}

#[test]
fn test_second_decimal_point_is_ignored() {
    assert_eq!(display_after("3 . . 4"), "3.4");
}

// ============================================================================
// Arithmetic
// ============================================================================

#[test]
fn test_seven_plus_eight() {
    assert_eq!(display_after("7 + 8 ="), "15");
}

#[test]
fn test_chained_operators_evaluate_left_to_right() {
    assert_eq!(display_after("2 + 3 * 4 ="), "20");
}

#[test]
fn test_subtraction_below_zero() {
    assert_eq!(display_after("3 - 9 ="), "-6");
}

#[test]
fn test_result_feeds_next_calculation() {
    assert_eq!(display_after("9 / 2 = * 4 ="), "18");
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_division_by_zero_then_digit() {
    let mut calc = Calculator::default();
    assert_eq!(run_keys(&mut calc, "6 / 0 =").unwrap(), "Error");
    assert_eq!(calc.mode(), Mode::Error(CalcError::DivisionByZero));
    assert_eq!(run_keys(&mut calc, "5").unwrap(), "5");
}

#[test]
fn test_custom_error_token() {
    let mut calc = Calculator::new(DisplaySettings {
        error_token: "Cannot divide by zero".to_string(),
        ..Default::default()
    });
    assert_eq!(
        run_keys(&mut calc, "1 / 0 =").unwrap(),
        "Cannot divide by zero"
    );
}

#[test]
fn test_unknown_label_stops_run() {
    let mut calc = Calculator::default();
    let result = run_keys(&mut calc, "4 ? 2");
    assert_eq!(result, Err(KeyError::Unrecognized("?".to_string())));
    // Keys before the bad label were applied
    assert_eq!(calc.current_display(), "4");
}

// ============================================================================
// Clear
// ============================================================================

#[test]
fn test_clear_from_any_state() {
    for prefix in ["", "1 2 3", "1 +", "1 + 2", "1 + 2 =", "1 / 0 =", "."] {
        let mut calc = Calculator::default();
        run_keys(&mut calc, prefix).unwrap();
        assert_eq!(run_keys(&mut calc, "CE").unwrap(), "0", "after {prefix:?}");
        assert!(calc.pending().is_none());
        assert_eq!(calc.mode(), Mode::Entry);
    }
}

// ============================================================================
// Reducer
// ============================================================================

#[test]
fn test_app_reducer_drives_calculator() {
    let mut app = App::new(Calculator::default());
    for key in [Key::Digit(1), Key::Digit(2), Key::Equals] {
        assert_eq!(update(&mut app, Action::Press(key)), Effect::None);
    }
    assert_eq!(app.display(), "12");
    assert_eq!(app.last_key, Some(Key::Equals));
    assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
}
