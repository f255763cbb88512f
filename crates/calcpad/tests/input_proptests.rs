//! Property-based tests for guarded input and evaluation
//!
//! Random key sequences must never break the buffer invariants, and
//! evaluation must never panic, whatever the buffer holds.

use calcpad::core::charset::{self, is_operator};
use calcpad::prelude::*;
use proptest::prelude::*;

// ===== Strategy definitions =====

fn digit_strategy() -> impl Strategy<Value = char> {
    (0u32..=9).prop_map(|d| char::from_digit(d, 10).unwrap())
}

fn operator_strategy() -> impl Strategy<Value = char> {
    prop_oneof![Just('+'), Just('-'), Just('*'), Just('/')]
}

/// Every character the keypad can append
fn keypad_char_strategy() -> impl Strategy<Value = char> {
    prop_oneof![
        4 => digit_strategy(),
        2 => operator_strategy(),
        1 => Just('.'),
        1 => Just('('),
        1 => Just(')'),
    ]
}

/// Key names a user might press, recognized or not
fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        6 => keypad_char_strategy().prop_map(String::from),
        1 => Just("Enter".to_string()),
        1 => Just("Backspace".to_string()),
        1 => Just("c".to_string()),
        1 => Just("Tab".to_string()),
        1 => Just("x".to_string()),
    ]
}

fn typed(chars: &[char]) -> Calculator<TextScreen> {
    let mut calc = Calculator::new(TextScreen::new());
    for &ch in chars {
        calc.append(ch);
    }
    calc
}

fn assert_buffer_invariants(buffer: &str) -> Result<(), TestCaseError> {
    let chars: Vec<char> = buffer.chars().collect();
    for pair in chars.windows(2) {
        prop_assert!(
            !(is_operator(pair[0]) && is_operator(pair[1])),
            "adjacent operators in {:?}",
            buffer
        );
    }
    for segment in buffer.split(charset::is_segment_boundary) {
        prop_assert!(
            segment.matches('.').count() <= 1,
            "segment {:?} of {:?} has two decimal points",
            segment,
            buffer
        );
    }
    if let Some(first) = chars.first() {
        prop_assert!(!matches!(first, '+' | '*' | '/'), "leading operator in {:?}", buffer);
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_appends_keep_buffer_invariants(chars in prop::collection::vec(keypad_char_strategy(), 0..40)) {
        let calc = typed(&chars);
        assert_buffer_invariants(calc.expression().as_str())?;
    }

    #[test]
    fn prop_key_sequences_keep_buffer_invariants(keys in prop::collection::vec(key_strategy(), 0..60)) {
        let mut calc = Calculator::new(TextScreen::new());
        for key in &keys {
            calc.press_key(key);
            assert_buffer_invariants(calc.expression().as_str())?;
        }
    }

    #[test]
    fn prop_input_line_mirrors_buffer(chars in prop::collection::vec(keypad_char_strategy(), 0..30)) {
        let calc = typed(&chars);
        let buffer = calc.expression().as_str();
        let expected = if buffer.is_empty() { "0" } else { buffer };
        prop_assert_eq!(calc.screen().input(), expected);
    }

    #[test]
    fn prop_evaluate_never_panics(text in "[0-9+*/().a-z \\-]{0,30}") {
        let mut calc = Calculator::new(TextScreen::new());
        for ch in text.chars() {
            calc.append(ch);
        }
        calc.evaluate();
        let result = calc.screen().result();
        prop_assert!(!result.is_empty());
    }

    #[test]
    fn prop_evaluate_leaves_buffer_alone(chars in prop::collection::vec(keypad_char_strategy(), 1..30)) {
        let mut calc = typed(&chars);
        let before = calc.expression().clone();
        calc.evaluate();
        prop_assert_eq!(calc.expression(), &before);
    }

    #[test]
    fn prop_evaluate_is_idempotent(chars in prop::collection::vec(keypad_char_strategy(), 1..30)) {
        let mut calc = typed(&chars);
        calc.evaluate();
        let first = calc.snapshot();
        calc.evaluate();
        prop_assert_eq!(calc.snapshot(), first);
    }

    #[test]
    fn prop_clear_always_resets(keys in prop::collection::vec(key_strategy(), 0..40)) {
        let mut calc = Calculator::new(TextScreen::new());
        for key in &keys {
            calc.press_key(key);
        }
        calc.clear();
        prop_assert_eq!(calc.expression().as_str(), "");
        prop_assert_eq!(calc.screen().input(), "0");
        prop_assert_eq!(calc.screen().result(), "0");
        prop_assert_eq!(calc.state(), BufferState::Empty);
    }

    #[test]
    fn prop_backspace_removes_one_char(chars in prop::collection::vec(keypad_char_strategy(), 1..30)) {
        let mut calc = typed(&chars);
        let mut expected = calc.expression().as_str().to_string();
        expected.pop();
        calc.backspace();
        prop_assert_eq!(calc.expression().as_str(), expected.as_str());
    }

    #[test]
    fn prop_sum_of_integers(a in 0u32..100_000, b in 0u32..100_000) {
        let mut calc = Calculator::new(TextScreen::new());
        for ch in format!("{a}+{b}").chars() {
            calc.append(ch);
        }
        calc.evaluate();
        let expected = (u64::from(a) + u64::from(b)).to_string();
        prop_assert_eq!(calc.screen().result(), expected.as_str());
    }

    #[test]
    fn prop_product_binds_tighter(a in 1u32..1000, b in 1u32..1000, c in 1u32..1000) {
        let mut calc = Calculator::new(TextScreen::new());
        for ch in format!("{a}+{b}*{c}").chars() {
            calc.append(ch);
        }
        calc.evaluate();
        let expected = (u64::from(a) + u64::from(b) * u64::from(c)).to_string();
        prop_assert_eq!(calc.screen().result(), expected.as_str());
    }
}

// ===== Property tests for keyboard mapping =====

proptest! {
    #[test]
    fn prop_keypad_chars_are_recognized_keys(ch in keypad_char_strategy()) {
        let key = ch.to_string();
        let action = KeypadAction::from_key(&key);
        prop_assert!(action.is_some());
        prop_assert_eq!(action.and_then(|a| a.to_char()), Some(ch));
    }

    #[test]
    fn prop_letters_other_than_c_are_ignored(ch in "[a-bd-zA-BD-Z]") {
        prop_assert_eq!(KeypadAction::from_key(&ch), None);
    }

    #[test]
    fn prop_every_char_has_a_button(ch in keypad_char_strategy()) {
        let keypad = Keypad::new();
        prop_assert!(keypad.find_button_by_char(ch).is_some());
    }
}
