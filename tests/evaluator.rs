use rpn_calc::{CalcError, Evaluator, Snapshot};

/// Evaluate each line in turn on one evaluator, checking the stack after each
fn assert_session(rows: &[(&str, &str)]) {
    let mut calc = Evaluator::new();
    for (input, expected) in rows {
        calc.evaluate(Some(*input))
            .unwrap_or_else(|e| panic!("{input:?} failed: {e}"));
        assert_eq!(calc.render_stack(), *expected, "after {input:?}");
    }
}

#[test]
fn test_push_only() {
    assert_session(&[("5 2", "5 2")]);
}

#[test]
fn test_sqrt() {
    assert_session(&[("2 sqrt", "1.4142135624"), ("clear 9 sqrt", "3")]);
}

#[test]
fn test_subtraction_and_clear() {
    assert_session(&[("5 2 -", "3"), ("3 -", "0"), ("clear", "")]);
}

#[test]
fn test_undo_walks_back() {
    assert_session(&[
        ("5 4 3 2", "5 4 3 2"),
        ("undo undo *", "20"),
        ("5 *", "100"),
        ("undo", "20 5"),
    ]);
}

#[test]
fn test_division() {
    assert_session(&[("7 12 2 /", "7 6"), ("*", "42"), ("4 /", "10.5")]);
}

#[test]
fn test_negative_result() {
    assert_session(&[
        ("1 2 3 4 5", "1 2 3 4 5"),
        ("*", "1 2 3 20"),
        ("clear 3 4 -", "-1"),
    ]);
}

#[test]
fn test_chained_multiplication() {
    assert_session(&[("1 2 3 4 5", "1 2 3 4 5"), ("* * * *", "120")]);
}

#[test]
fn test_insufficient_parameters_reports_position() {
    let mut calc = Evaluator::new();
    let err = calc.evaluate(Some("1 2 3 * 5 + * * 6 5")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "operator * (position: 8): insufficient parameters"
    );
    assert_eq!(calc.render_stack(), "11");
}

#[test]
fn test_illegal_format() {
    for input in [None, Some("1 2+"), Some(""), Some("1 2/"), Some("#% @")] {
        let mut calc = Evaluator::new();
        let err = calc.evaluate(input).unwrap_err();
        assert_eq!(err, CalcError::IllegalFormat);
        assert_eq!(err.to_string(), "Illegal input format, please enter again.");
        assert_eq!(calc.render_stack(), "");
        assert!(calc.history().is_empty());
    }
}

#[test]
fn test_divide_by_zero_keeps_operands() {
    let mut calc = Evaluator::new();
    let err = calc.evaluate(Some("1 0 /")).unwrap_err();
    assert_eq!(err.to_string(), "Divide by 0 is forbidden");
    assert_eq!(calc.render_stack(), "1 0");
    // Only the two pushes were recorded
    assert_eq!(calc.history(), &[Snapshot::Push, Snapshot::Push]);

    // The operands are still individually undoable
    calc.evaluate(Some("undo")).unwrap();
    assert_eq!(calc.render_stack(), "1");
}

#[test]
fn test_undo_every_instruction_returns_to_clear() {
    let mut calc = Evaluator::new();
    calc.evaluate(Some("9 9 clear")).unwrap();
    calc.evaluate(Some("3 4 + 2 * sqrt 16 sqrt /")).unwrap();
    let applied = calc.history().len();
    assert_eq!(applied, 9);

    for _ in 0..applied {
        calc.evaluate(Some("undo")).unwrap();
    }
    assert_eq!(calc.render_stack(), "");
    assert!(calc.history().is_empty());

    // Nothing left to undo, and the clear itself is not reversible
    calc.evaluate(Some("undo")).unwrap();
    assert_eq!(calc.render_stack(), "");
}

#[test]
fn test_undo_restores_binary_operand_order() {
    let mut calc = Evaluator::new();
    calc.evaluate(Some("10 4 -")).unwrap();
    assert_eq!(
        calc.history().last(),
        Some(&Snapshot::Binary {
            operand_a: 10.0,
            operand_b: 4.0,
            result_count: 1
        })
    );
    calc.evaluate(Some("undo -")).unwrap();
    assert_eq!(calc.render_stack(), "6");
}

#[test]
fn test_reset_all_matches_clear() {
    let mut via_clear = Evaluator::new();
    let mut via_reset = Evaluator::new();
    via_clear.evaluate(Some("1 2 3 clear")).unwrap();
    via_reset.evaluate(Some("1 2 3")).unwrap();
    via_reset.reset_all();
    assert_eq!(via_clear.render_stack(), via_reset.render_stack());
    assert_eq!(via_clear.history(), via_reset.history());
}

#[test]
fn test_sessions_are_independent() {
    let mut first = Evaluator::new();
    let mut second = Evaluator::new();
    first.evaluate(Some("1 2")).unwrap();
    second.evaluate(Some("3")).unwrap();
    first.evaluate(Some("undo")).unwrap();
    assert_eq!(first.render_stack(), "1");
    assert_eq!(second.render_stack(), "3");
}

#[test]
fn test_overflowing_literal_renders_infinity() {
    let huge = format!("1{}", "0".repeat(400));
    let mut calc = Evaluator::new();
    calc.evaluate(Some(&huge)).unwrap();
    assert_eq!(calc.render_stack(), "∞");

    calc.evaluate(Some(&format!("0 {huge} -"))).unwrap();
    assert_eq!(calc.render_stack(), "∞ -∞");
}
