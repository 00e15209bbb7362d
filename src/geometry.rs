//! 2D primitives: points, rectangles and heading/length projections.
//!
//! Headings are in degrees, measured counter-clockwise from `+X` in the
//! y-up convention used by the interpreter.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A floating-point 2D point.
pub type Point = DVec2;

/// Axis-aligned rectangle given by its minimum and maximum corners.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// A zero-sized rectangle at `p`, the seed for accumulating bounds.
    pub fn from_point(p: Point) -> Self {
        Self { min: p, max: p }
    }

    /// Grows the rectangle so that it contains `p`.
    pub fn include(&mut self, p: Point) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Point {
        (self.min + self.max) / 2.0
    }

    /// Returns the rectangle with both corners multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.min * factor, self.max * factor)
    }

    /// True if `other` lies entirely inside `self`, allowing `eps` of slack.
    pub fn contains_rect(&self, other: &Rect, eps: f64) -> bool {
        other.min.x >= self.min.x - eps
            && other.min.y >= self.min.y - eps
            && other.max.x <= self.max.x + eps
            && other.max.y <= self.max.y + eps
    }
}

pub fn to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

pub fn to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Euclidean distance between `p0` and `p1`.
pub fn distance(p0: Point, p1: Point) -> f64 {
    p0.distance(p1)
}

/// Heading in degrees of the direction `p0 -> p1`.
///
/// Vertical directions resolve to exactly `90` (up) or `270` (down); the
/// result otherwise lies in `(-90, 270)`.
pub fn heading_between(p0: Point, p1: Point) -> f64 {
    let d = p1 - p0;
    let mut theta = if d.x == 0.0 {
        if d.y > 0.0 { 90.0 } else { 270.0 }
    } else {
        to_degrees((d.y / d.x).atan())
    };
    if p0.x > p1.x {
        theta += 180.0;
    }
    theta
}

/// The point reached from `p0` after travelling `length` along `heading` degrees.
pub fn point_from_heading(p0: Point, heading: f64, length: f64) -> Point {
    let rad = to_radians(heading);
    p0 + DVec2::new(rad.cos(), rad.sin()) * length
}
