//! Scenarios written once against `CalculatorDriver` and run on both the
//! mock DOM and the headless driver

use calcpad::prelude::*;

fn scenario_precedence<D: CalculatorDriver>(driver: &mut D) {
    driver.type_text("2+3*4");
    assert!(driver.press_key("Enter"));
    assert_eq!(driver.input_text(), "2+3*4");
    assert_eq!(driver.result_text(), "14");
}

fn scenario_buttons<D: CalculatorDriver>(driver: &mut D) {
    for id in [
        "btn-open-paren",
        "btn-2",
        "btn-plus",
        "btn-3",
        "btn-close-paren",
        "btn-times",
        "btn-4",
        "btn-equals",
    ] {
        assert!(driver.click_button(id), "{id} should be handled");
    }
    assert_eq!(driver.input_text(), "(2+3)*4");
    assert_eq!(driver.result_text(), "20");
}

fn scenario_guards<D: CalculatorDriver>(driver: &mut D) {
    // leading +, * and / are dropped; leading - is kept
    driver.type_text("+*/");
    assert_eq!(driver.input_text(), "0");
    driver.type_text("-");
    assert_eq!(driver.input_text(), "-");
    driver.press_key("c");

    driver.type_text("5+*");
    assert_eq!(driver.input_text(), "5+");
    driver.press_key("c");

    driver.type_text("3.14.");
    assert_eq!(driver.input_text(), "3.14");
    driver.press_key("C");

    driver.type_text(".");
    assert_eq!(driver.input_text(), "0.");
}

fn scenario_backspace<D: CalculatorDriver>(driver: &mut D) {
    assert!(driver.press_key("Backspace"));
    assert_eq!(driver.input_text(), "0");
    driver.type_text("12+3");
    driver.press_key("Backspace");
    assert_eq!(driver.input_text(), "12+");
}

fn scenario_clear_resets_both_lines<D: CalculatorDriver>(driver: &mut D) {
    driver.type_text("9/3");
    driver.press_key("Enter");
    assert_eq!(driver.result_text(), "3");
    driver.click_button("btn-clear");
    assert_eq!(driver.input_text(), "0");
    assert_eq!(driver.result_text(), "0");
}

fn scenario_errors<D: CalculatorDriver>(driver: &mut D) {
    driver.type_text("(2+3");
    driver.press_key("Enter");
    assert_eq!(driver.result_text(), "Error");
    // the buffer survives so the user can fix it
    driver.type_text(")");
    driver.press_key("Enter");
    assert_eq!(driver.result_text(), "5");
}

fn scenario_empty_evaluate_keeps_result<D: CalculatorDriver>(driver: &mut D) {
    driver.type_text("7*6");
    driver.press_key("Enter");
    for _ in 0..3 {
        driver.press_key("Backspace");
    }
    driver.press_key("Enter");
    assert_eq!(driver.input_text(), "0");
    assert_eq!(driver.result_text(), "42");
}

fn scenario_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.type_text("1/0");
    driver.press_key("Enter");
    assert_eq!(driver.result_text(), "Infinity");
}

fn scenario_unrecognized_keys<D: CalculatorDriver>(driver: &mut D) {
    for key in ["Tab", "Escape", "a", "=", "ArrowUp"] {
        assert!(!driver.press_key(key), "{key} should not be handled");
    }
    assert_eq!(driver.input_text(), "0");
}

fn run_all<D: CalculatorDriver>(make: impl Fn() -> D) {
    scenario_precedence(&mut make());
    scenario_buttons(&mut make());
    scenario_guards(&mut make());
    scenario_backspace(&mut make());
    scenario_clear_resets_both_lines(&mut make());
    scenario_errors(&mut make());
    scenario_empty_evaluate_keeps_result(&mut make());
    scenario_division_by_zero(&mut make());
    scenario_unrecognized_keys(&mut make());
}

#[test]
fn test_scenarios_on_mock_dom() {
    run_all(DomDriver::new);
}

#[test]
fn test_scenarios_headless() {
    run_all(HeadlessDriver::new);
}

#[test]
fn test_dom_prevents_default_only_for_handled_keys() {
    let mut driver = DomDriver::new();
    for key in ["1", "Tab", "Enter", "F5", "Backspace", "c"] {
        driver.press_key(key);
    }
    let prevented: Vec<bool> = driver
        .dom()
        .event_history()
        .iter()
        .map(|record| record.default_prevented)
        .collect();
    assert_eq!(prevented, vec![true, false, true, false, true, true]);
}

#[test]
fn test_drivers_agree_on_random_walk() {
    let keys = [
        "(", "1", ".", "5", "+", "+", ".", "2", ")", "*", "3", "Enter", "Backspace", "/", "0",
        "Enter", "c", "-", "8", "/", "(", "2", "-", "4", ")", "Enter", "x",
    ];
    let mut dom = DomDriver::new();
    let mut headless = HeadlessDriver::new();
    for key in keys {
        assert_eq!(dom.press_key(key), headless.press_key(key), "{key}");
        assert_eq!(dom.input_text(), headless.input_text(), "after {key}");
        assert_eq!(dom.result_text(), headless.result_text(), "after {key}");
    }
    assert_eq!(headless.result_text(), "4");
}
