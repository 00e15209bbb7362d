// tests/turtle_paths.rs
use glam::DVec2;
use symbios_fractal::{
    Color, FractalError, TurtleConfig, TurtleInterpreter, TurtleOp, interpret,
};

const EPS: f64 = 1e-9;

fn assert_close(actual: DVec2, expected: DVec2) {
    assert!(
        actual.abs_diff_eq(expected, EPS),
        "expected {expected:?}, got {actual:?}"
    );
}

#[test]
fn test_single_forward_step() {
    let drawing = interpret("F", 0.0, 37.0, Color::BLACK, false).unwrap();
    assert_eq!(drawing.paths.len(), 1);
    let points = &drawing.paths[0].points;
    assert_eq!(points.len(), 2);
    assert_close(points[0], DVec2::ZERO);
    assert_close(points[1], DVec2::new(1.0, 0.0));
}

#[test]
fn test_turn_then_advance() {
    let drawing = interpret("F+F", 0.0, 90.0, Color::RED, false).unwrap();
    assert_eq!(drawing.paths.len(), 1);
    let path = &drawing.paths[0];
    assert_eq!(path.color, Color::RED);
    assert_eq!(path.points.len(), 3);
    assert_close(path.points[0], DVec2::ZERO);
    assert_close(path.points[1], DVec2::new(1.0, 0.0));
    assert_close(path.points[2], DVec2::new(1.0, 1.0));
}

#[test]
fn test_minus_decreases_heading() {
    let drawing = interpret("-F", 90.0, 90.0, Color::BLACK, false).unwrap();
    assert_close(drawing.paths[0].points[1], DVec2::new(1.0, 0.0));
}

#[test]
fn test_branch_restores_state_exactly() {
    let drawing = interpret("F[+F]F", 0.0, 45.0, Color::BLACK, false).unwrap();
    // Trunk, then the restored path after `]`.
    assert_eq!(drawing.paths.len(), 2);

    let trunk = &drawing.paths[0];
    assert_eq!(trunk.points.len(), 3);
    let branch_point = trunk.points[1];

    let resumed = &drawing.paths[1];
    assert_eq!(resumed.points[0], branch_point);
    assert_eq!(resumed.points.len(), 2);
    // Heading restored to 0: the next step is straight along +X.
    assert_close(resumed.points[1], branch_point + DVec2::X);
}

#[test]
fn test_stack_underflow() {
    let err = interpret("]", 0.0, 90.0, Color::BLACK, false).unwrap_err();
    assert!(matches!(err, FractalError::StackUnderflow { index: 0 }));

    let err = interpret("F[F]]", 0.0, 90.0, Color::BLACK, true).unwrap_err();
    assert!(matches!(err, FractalError::StackUnderflow { index: 4 }));
}

#[test]
fn test_move_opens_new_path_unless_single_path() {
    let split = interpret("FfF", 0.0, 90.0, Color::BLACK, false).unwrap();
    assert_eq!(split.paths.len(), 2);
    assert_close(split.paths[1].points[0], DVec2::new(2.0, 0.0));
    assert_close(split.paths[1].points[1], DVec2::new(3.0, 0.0));

    let joined = interpret("FfF", 0.0, 90.0, Color::BLACK, true).unwrap();
    assert_eq!(joined.paths.len(), 1);
    // The jump leaves no point of its own.
    assert_eq!(joined.paths[0].points.len(), 3);
    assert_close(joined.paths[0].points[2], DVec2::new(3.0, 0.0));
}

#[test]
fn test_single_path_branches_stay_in_one_path() {
    let drawing = interpret("F[+F][-F]F", 0.0, 90.0, Color::BLACK, true).unwrap();
    assert_eq!(drawing.paths.len(), 1);
    assert_eq!(drawing.paths[0].points.len(), 5);
    assert_close(drawing.paths[0].points[4], DVec2::new(2.0, 0.0));
}

#[test]
fn test_unknown_symbols_are_ignored() {
    let drawing = interpret("XFYZ", 0.0, 90.0, Color::BLACK, false).unwrap();
    assert_eq!(drawing.paths.len(), 1);
    assert_eq!(drawing.paths[0].points.len(), 2);
}

#[test]
fn test_empty_input_yields_origin_path() {
    let drawing = interpret("", 0.0, 90.0, Color::BLACK, false).unwrap();
    assert_eq!(drawing.paths.len(), 1);
    assert_eq!(drawing.paths[0].points, vec![DVec2::ZERO]);
}

#[test]
fn test_custom_symbol_and_step_length() {
    let mut interpreter = TurtleInterpreter::new(TurtleConfig {
        step_length: 2.5,
        ..Default::default()
    });
    interpreter.set_op('G', TurtleOp::Draw);
    let drawing = interpreter.interpret("GF").unwrap();
    assert_close(drawing.paths[0].points[2], DVec2::new(5.0, 0.0));
}
