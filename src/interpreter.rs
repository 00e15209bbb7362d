//! Interpreter that walks an expanded L-System string with a plane turtle
//! and records the pen-down runs as a [`Drawing`].
//!
//! The entry point is [`TurtleInterpreter`]. Configure it with a
//! [`TurtleConfig`], optionally remap symbols with [`TurtleInterpreter::set_op`],
//! then call [`TurtleInterpreter::interpret`].

use crate::color::Color;
use crate::drawing::Drawing;
use crate::error::{FractalError, Result};
use crate::geometry::Point;
use crate::turtle::{TurtleOp, TurtleState};
use std::collections::HashMap;
use tracing::debug;

/// Configuration for turtle interpretation.
#[derive(Clone, Debug)]
pub struct TurtleConfig {
    /// Initial heading in degrees.
    pub start_heading: f64,
    /// Degrees added by `+` and subtracted by `-`.
    pub turn_angle: f64,
    /// Distance covered by `F` and `f`.
    pub step_length: f64,
    /// Colour given to every path.
    pub color: Color,
    /// Keep the whole output in one path: `f` and `]` move the pen without
    /// starting a new path.
    pub single_path: bool,
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self {
            start_heading: 0.0,
            turn_angle: 90.0,
            step_length: 1.0,
            color: Color::BLACK,
            single_path: false,
        }
    }
}

/// Interprets expanded L-System strings into drawings.
pub struct TurtleInterpreter {
    op_map: HashMap<char, TurtleOp>,
    config: TurtleConfig,
}

impl TurtleInterpreter {
    /// Creates an interpreter with the standard alphabet (`F f - + [ ]`) registered.
    pub fn new(config: TurtleConfig) -> Self {
        let mut interpreter = Self {
            op_map: HashMap::new(),
            config,
        };
        interpreter.populate_standard_symbols();
        interpreter
    }

    /// Assigns an operation to a symbol, replacing any previous mapping.
    pub fn set_op(&mut self, symbol: char, op: TurtleOp) {
        self.op_map.insert(symbol, op);
    }

    /// Registers the conventional plane turtle symbols.
    pub fn populate_standard_symbols(&mut self) {
        for symbol in ['F', 'f', '-', '+', '[', ']'] {
            self.set_op(symbol, TurtleOp::from_symbol(symbol));
        }
    }

    /// Walks `symbols` and returns every pen-down run as a path, in creation order.
    ///
    /// The turtle starts at the origin with `start_heading`; the first path
    /// starts there before any symbol is processed. Unmapped symbols are ignored.
    ///
    /// # Push / Pop
    ///
    /// `[` saves position and heading; `]` restores them and, unless
    /// `single_path` is set, starts a new path at the restored position.
    /// A `]` with nothing saved fails with [`FractalError::StackUnderflow`].
    pub fn interpret(&self, symbols: &str) -> Result<Drawing> {
        let cfg = &self.config;
        let mut drawing = Drawing::new();
        let mut turtle = TurtleState::new(Point::ZERO, cfg.start_heading);
        let mut stack: Vec<TurtleState> = Vec::new();

        drawing.move_to(turtle.position, cfg.color);

        for (index, c) in symbols.chars().enumerate() {
            let op = self.op_map.get(&c).copied().unwrap_or(TurtleOp::Ignore);
            match op {
                TurtleOp::Draw => {
                    turtle.advance(cfg.step_length);
                    drawing.line_to(turtle.position);
                }
                TurtleOp::Move => {
                    turtle.advance(cfg.step_length);
                    if !cfg.single_path {
                        drawing.move_to(turtle.position, cfg.color);
                    }
                }
                TurtleOp::TurnLeft => turtle.turn(-cfg.turn_angle),
                TurtleOp::TurnRight => turtle.turn(cfg.turn_angle),
                TurtleOp::Push => stack.push(turtle),
                TurtleOp::Pop => {
                    turtle = stack.pop().ok_or(FractalError::StackUnderflow { index })?;
                    if !cfg.single_path {
                        drawing.move_to(turtle.position, cfg.color);
                    }
                }
                TurtleOp::Ignore => {}
            }
        }

        debug!(
            paths = drawing.path_count(),
            points = drawing.point_count(),
            unclosed_branches = stack.len(),
            "interpretation complete"
        );
        Ok(drawing)
    }
}

/// Interprets `symbols` with the standard alphabet and unit step length.
pub fn interpret(
    symbols: &str,
    start_heading: f64,
    turn_angle: f64,
    color: Color,
    single_path: bool,
) -> Result<Drawing> {
    TurtleInterpreter::new(TurtleConfig {
        start_heading,
        turn_angle,
        color,
        single_path,
        ..Default::default()
    })
    .interpret(symbols)
}
