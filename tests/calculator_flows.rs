use fraccalc::domain::MatrixSlot;
use fraccalc::math::MatrixOperation;
use fraccalc::{handle_event, initialize, Action, CalcError, Calculator, Config, Event};
use std::io::Write;

fn press(calc: &mut Calculator, labels: &[&str]) {
    for label in labels {
        let event = Event::from_label(label).unwrap_or_else(|| panic!("no button {label}"));
        handle_event(calc, &event);
    }
}

fn run(labels: &[&str]) -> Calculator {
    let mut calc = Calculator::default();
    press(&mut calc, labels);
    calc
}

#[test]
fn evaluation_is_left_to_right() {
    let calc = run(&["2", "+", "3", "*", "4", "="]);
    assert_eq!(calc.display(), "20");
}

#[test]
fn chained_subtraction_resolves_intermediate() {
    let mut calc = Calculator::default();
    press(&mut calc, &["1", "0", "+", "5", "-"]);
    assert_eq!(calc.display(), "15");
    assert_eq!(calc.expression_line(), "15 -");
    press(&mut calc, &["3", "="]);
    assert_eq!(calc.display(), "12");
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(run(&["5", "/", "0", "="]).display(), "Error");
    assert_eq!(run(&["6", "+", "1", "=", "/", "0", "="]).display(), "Error");
}

#[test]
fn error_is_cleared_by_next_digit() {
    let mut calc = run(&["5", "/", "0", "="]);
    press(&mut calc, &["4", "+", "1", "="]);
    assert_eq!(calc.display(), "5");
}

#[test]
fn fraction_entry_and_toggle() {
    let mut calc = run(&["2", "/", "4"]);
    press(&mut calc, &["F<=>D"]);
    assert_eq!(calc.display(), "1/2");
    press(&mut calc, &["F<=>D"]);
    assert_eq!(calc.display(), "0.5");
}

#[test]
fn decimal_addition_is_exact() {
    assert_eq!(run(&["1", ".", "2", "+", "3", ".", "4", "="]).display(), "4.6");
    assert_eq!(run(&["0", ".", "1", "+", "0", ".", "2", "="]).display(), "0.3");
}

#[test]
fn clear_resets_chain_state() {
    let mut calc = run(&["1", "+", "2", "C"]);
    press(&mut calc, &["3"]);
    assert_eq!(calc.display(), "3");
    assert_eq!(calc.expression_line(), "");
    press(&mut calc, &["="]);
    assert_eq!(calc.display(), "3");
}

#[test]
fn fraction_results_in_fraction_mode() {
    let calc = run(&["F<=>D", "1", "/", "3", "+", "1", "/", "6", "="]);
    // '/' after '+' is division: (1/3 + 1) / 6
    assert_eq!(calc.display(), "2/9");
    assert_eq!(calc.history.iter().next().unwrap().to_string(), "4/3 / 6 = 2/9");
}

#[test]
fn large_results_use_exponent_form() {
    let calc = run(&["1", "0", "^", "8", "="]);
    assert_eq!(calc.display(), "1.000000000e+8");
    assert_eq!(calc.history.iter().next().unwrap().to_string(), "10 ^ 8 = 100000000");
    // exact integer products print every digit
    let calc = run(&["9", "9", "9", "9", "*", "9", "9", "9", "9", "="]);
    assert_eq!(calc.display(), "99980001");
}

#[test]
fn chains_continue_past_huge_whole_numbers() {
    let calc = run(&["2", "^", "7", "0", "+", "1", "="]);
    assert_eq!(calc.display(), "1.180591621e+21");

    let mut calc = run(&["9", "9", "9", "9", "9", "9", "9", "9", "9", "9", "*"]);
    press(&mut calc, &["9", "9", "9", "9", "9", "9", "9", "9", "9", "9", "="]);
    press(&mut calc, &["+", "1", "="]);
    assert_eq!(calc.display(), "9.999999998e+19");
    assert_eq!(calc.history.len(), 2);
}

#[test]
fn tangent_of_ninety_degrees_is_error() {
    let calc = run(&["9", "0", "tan"]);
    assert_eq!(calc.display(), "Error");
}

#[test]
fn matrix_shape_guard_leaves_slots_untouched() {
    let mut calc = Calculator::default();
    handle_event(
        &mut calc,
        &Event::StoreMatrix {
            slot: MatrixSlot::A,
            text: "1,2;3,4".into(),
        },
    );
    handle_event(
        &mut calc,
        &Event::StoreMatrix {
            slot: MatrixSlot::B,
            text: "1,2,3;4,5,6".into(),
        },
    );
    let before = calc.matrices.clone();

    let (render, actions) = handle_event(&mut calc, &Event::Matrix(MatrixOperation::Add));
    assert!(render);
    assert!(actions.is_empty());
    assert_eq!(calc.display(), "Matrix Error: Size mismatch for add");
    assert_eq!(calc.matrices, before);

    handle_event(&mut calc, &Event::Matrix(MatrixOperation::Multiply));
    assert_eq!(calc.display(), "[[9,12,15],[19,26,33]]");
}

#[test]
fn history_keeps_twenty_most_recent() {
    let mut calc = Calculator::default();
    for i in 1..=25 {
        let digits = i.to_string();
        let mut labels: Vec<&str> = digits.split("").filter(|s| !s.is_empty()).collect();
        labels.extend(["+", "1", "="]);
        press(&mut calc, &labels);
    }

    assert_eq!(calc.history.len(), 20);
    let entries: Vec<String> = calc.history.iter().map(ToString::to_string).collect();
    assert_eq!(entries[0], "25 + 1 = 26");
    assert_eq!(entries[19], "6 + 1 = 7");
}

#[test]
fn failed_operations_are_not_recorded() {
    let calc = run(&["5", "/", "0", "=", "1", "+", "2", "^", "sqrt"]);
    assert_eq!(calc.history.len(), 1);
    assert_eq!(calc.history.iter().next().unwrap().to_string(), "sqrt(3) = 1.7320508075688772");
}

#[test]
fn clear_emits_reset_inputs() {
    let mut calc = run(&["4", "Add Data"]);
    let (_, actions) = handle_event(&mut calc, &Event::Clear);
    assert_eq!(actions, vec![Action::ResetInputs]);
    press(&mut calc, &["Mean"]);
    assert_eq!(calc.display(), "No Data");
}

#[test]
fn config_history_limit_is_honored() {
    let config = Config {
        history_limit: 2,
        ..Config::default()
    };
    let mut calc = initialize(&config);
    press(&mut calc, &["1", "sqrt", "4", "sqrt", "9", "sqrt"]);
    let entries: Vec<String> = calc.history.iter().map(ToString::to_string).collect();
    assert_eq!(entries, vec!["sqrt(9) = 3", "sqrt(4) = 2"]);
}

#[test]
fn config_from_toml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "history_limit = 5\nplot_width = 41\ntrace_level = \"debug\"").unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.history_limit, 5);
    assert_eq!(config.plot_width, 41);
    assert_eq!(config.plot_height, 21);
    assert_eq!(config.trace_level.as_deref(), Some("debug"));
    assert!(config.trace_file.is_none());
}

#[test]
fn config_file_errors() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "colour = \"blue\"").unwrap();
    assert!(matches!(Config::from_file(file.path()), Err(CalcError::Config(_))));

    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        Config::from_file(dir.path().join("absent.toml")),
        Err(CalcError::Io(_))
    ));
}
