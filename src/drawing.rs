//! Drawing buffer: an ordered set of coloured polylines, and the
//! transforms that normalize it for rendering.
//!
//! Every transform is expressed over the same traversal order: each
//! [`Path`] in creation order, then each of its points in order.

use crate::color::Color;
use crate::error::{FractalError, Result};
use crate::geometry::{Point, Rect, to_radians};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// One continuous pen-down polyline with a single colour.
///
/// The first point is where the pen went down; consecutive points define segments.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub points: Vec<Point>,
    pub color: Color,
}

impl Path {
    pub fn new(start: Point, color: Color) -> Self {
        Self {
            points: vec![start],
            color,
        }
    }

    /// Consecutive point pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }
}

/// Axis reflected by [`Drawing::flip`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipAxis {
    /// Mirror Y about the horizontal mid-line of the bounds (y-up <-> y-down).
    Vertical,
    /// Mirror X about the vertical mid-line of the bounds.
    Horizontal,
}

/// Read-only traversal over a drawing.
///
/// `visit_path` is called once per path before its points are visited.
pub trait DrawingVisitor {
    fn visit_path(&mut self, _path: &Path) {}
    fn visit_point(&mut self, _point: Point) {}
}

/// Accumulates the bounding rectangle of every visited point.
#[derive(Default)]
struct BoundsVisitor {
    rect: Option<Rect>,
}

impl DrawingVisitor for BoundsVisitor {
    fn visit_point(&mut self, point: Point) {
        match self.rect.as_mut() {
            Some(r) => r.include(point),
            None => self.rect = Some(Rect::from_point(point)),
        }
    }
}

/// An ordered sequence of paths produced for one fractal.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    pub paths: Vec<Path>,
}

impl Drawing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new path at `point`.
    pub fn move_to(&mut self, point: Point, color: Color) {
        self.paths.push(Path::new(point, color));
    }

    /// Extends the current path to `point`.
    ///
    /// With no open path, a new one in the default colour is started at `point`.
    pub fn line_to(&mut self, point: Point) {
        match self.paths.last_mut() {
            Some(path) => path.points.push(point),
            None => self.move_to(point, Color::default()),
        }
    }

    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    pub fn point_count(&self) -> usize {
        self.paths.iter().map(|p| p.points.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }

    /// Every point of every path, in traversal order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.paths.iter().flat_map(|p| p.points.iter().copied())
    }

    pub fn accept<V: DrawingVisitor + ?Sized>(&self, visitor: &mut V) {
        for path in &self.paths {
            visitor.visit_path(path);
            for &point in &path.points {
                visitor.visit_point(point);
            }
        }
    }

    /// Applies `f` to every point in traversal order.
    pub fn for_each_point_mut<F: FnMut(&mut Point)>(&mut self, mut f: F) {
        for path in &mut self.paths {
            path.points.iter_mut().for_each(&mut f);
        }
    }

    /// Componentwise min/max over all points.
    pub fn bounds(&self) -> Result<Rect> {
        let mut visitor = BoundsVisitor::default();
        self.accept(&mut visitor);
        visitor.rect.ok_or(FractalError::EmptyDrawing)
    }

    pub fn translate(&mut self, delta: DVec2) {
        self.for_each_point_mut(|p| *p += delta);
    }

    /// Uniform scale about the origin.
    pub fn scale(&mut self, factor: f64) {
        self.for_each_point_mut(|p| *p *= factor);
    }

    /// Rotates about the origin by `degrees`, counter-clockwise in y-up coordinates.
    pub fn rotate(&mut self, degrees: f64) {
        let rad = to_radians(degrees);
        let (sin, cos) = rad.sin_cos();
        self.for_each_point_mut(|p| {
            *p = DVec2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos);
        });
    }

    /// Reflects every point across the mid-line of the current bounds.
    pub fn flip(&mut self, axis: FlipAxis) -> Result<()> {
        let b = self.bounds()?;
        match axis {
            FlipAxis::Vertical => self.for_each_point_mut(|p| p.y = b.max.y - p.y + b.min.y),
            FlipAxis::Horizontal => self.for_each_point_mut(|p| p.x = b.max.x - p.x + b.min.x),
        }
        Ok(())
    }

    /// Scales and translates the drawing so that it is centred in `target`
    /// with `margin.x * width` and `margin.y * height` left blank on each side.
    ///
    /// One uniform factor is used for both axes. An axis with zero extent
    /// does not constrain the factor; a single-point drawing is only moved.
    pub fn center_with_margin(&mut self, target: Rect, margin: DVec2) -> Result<()> {
        let db = self.bounds()?;
        let available = target.size() - margin * 2.0 * target.size();
        let fit = |avail: f64, extent: f64| {
            if extent > 0.0 {
                avail / extent
            } else {
                f64::INFINITY
            }
        };
        let mut factor = fit(available.x, db.width()).min(fit(available.y, db.height()));
        if !factor.is_finite() {
            factor = 1.0;
        }

        self.scale(factor);
        let delta = target.center() - db.scaled(factor).center();
        self.translate(delta);
        Ok(())
    }
}
