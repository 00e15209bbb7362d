//! Turtle state and the plane turtle alphabet.

use crate::geometry::{Point, point_from_heading};
use serde::{Deserialize, Serialize};

/// Position and heading of the pen.
///
/// This is also the branch-stack item: `[` pushes a copy, `]` restores it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current position of the pen.
    pub position: Point,

    /// Current heading in degrees, counter-clockwise from `+X`.
    pub heading: f64,
}

impl Default for TurtleState {
    fn default() -> Self {
        Self {
            position: Point::ZERO,
            heading: 0.0,
        }
    }
}

impl TurtleState {
    pub fn new(position: Point, heading: f64) -> Self {
        Self { position, heading }
    }

    /// Moves the pen `length` units along its heading.
    pub fn advance(&mut self, length: f64) {
        self.position = point_from_heading(self.position, self.heading, length);
    }

    /// Adds `delta` degrees to the heading.
    pub fn turn(&mut self, delta: f64) {
        self.heading += delta;
    }
}

/// Operations the plane turtle performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurtleOp {
    /// Advance one step, drawing a segment (`F`).
    Draw,
    /// Advance one step without drawing (`f`).
    Move,
    /// Decrease heading by the turn angle (`-`).
    TurnLeft,
    /// Increase heading by the turn angle (`+`).
    TurnRight,
    /// Save the turtle state onto the stack (`[`).
    Push,
    /// Restore the most recently pushed turtle state (`]`).
    Pop,
    /// No-op: symbol has no turtle meaning.
    Ignore,
}

impl TurtleOp {
    /// Maps a symbol of the expanded string to its operation. Case-sensitive.
    pub fn from_symbol(c: char) -> Self {
        match c {
            'F' => TurtleOp::Draw,
            'f' => TurtleOp::Move,
            '-' => TurtleOp::TurnLeft,
            '+' => TurtleOp::TurnRight,
            '[' => TurtleOp::Push,
            ']' => TurtleOp::Pop,
            _ => TurtleOp::Ignore,
        }
    }
}
