//! Renderer adapters for normalized drawings.
//!
//! This module provides:
//! - [`normalize`] to flip a y-up drawing into device coordinates and fit it to a canvas
//! - [`DrawingRenderer`] trait with a PNG ([`RasterRenderer`]) and an SVG
//!   ([`VectorRenderer`]) implementation
//!
//! # Coordinate System
//!
//! Renderers expect device coordinates: origin at top-left, X rightward,
//! Y downward, one unit per pixel.

use crate::color::Color;
use crate::drawing::{Drawing, FlipAxis};
use crate::error::{FractalError, Result};
use crate::geometry::{Point, Rect};
use glam::DVec2;
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use svg::Document;
use svg::node::element::{Polyline, Rectangle};

/// Blank border reserved on each side, as a fraction of the canvas size.
pub const DEFAULT_MARGIN: DVec2 = DVec2::new(0.1, 0.1);

/// Integer-sized output surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::square(2000)
    }
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn square(size: u32) -> Self {
        Self::new(size, size)
    }

    /// The canvas in drawing coordinates: `(0, 0)` to the last pixel index on each axis.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            Point::ZERO,
            Point::new(
                f64::from(self.width.saturating_sub(1)),
                f64::from(self.height.saturating_sub(1)),
            ),
        )
    }
}

/// Output flavour of a render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderFormat {
    Png,
    Svg,
}

impl RenderFormat {
    pub fn extension(self) -> &'static str {
        match self {
            RenderFormat::Png => "png",
            RenderFormat::Svg => "svg",
        }
    }
}

/// Flips `drawing` into raster orientation and centres it on `canvas`
/// with [`DEFAULT_MARGIN`].
pub fn normalize(drawing: &mut Drawing, canvas: &Canvas) -> Result<()> {
    drawing.flip(FlipAxis::Vertical)?;
    drawing.center_with_margin(canvas.bounds(), DEFAULT_MARGIN)
}

/// Serializes a normalized drawing for a canvas.
///
/// Implementations are pure: the same drawing and canvas always give the same bytes.
pub trait DrawingRenderer {
    fn format(&self) -> RenderFormat;

    fn render(&self, drawing: &Drawing, canvas: &Canvas) -> Result<Vec<u8>>;
}

/// Returns the renderer for `format`.
pub fn renderer_for(format: RenderFormat) -> Box<dyn DrawingRenderer> {
    match format {
        RenderFormat::Png => Box::new(RasterRenderer::default()),
        RenderFormat::Svg => Box::new(VectorRenderer::default()),
    }
}

/// Rasterizes paths as one-pixel Bresenham lines and encodes PNG.
#[derive(Clone, Debug)]
pub struct RasterRenderer {
    pub background: Color,
}

impl Default for RasterRenderer {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
        }
    }
}

impl RasterRenderer {
    /// Draws every segment of `drawing` onto a fresh image of the canvas size.
    pub fn rasterize(&self, drawing: &Drawing, canvas: &Canvas) -> RgbaImage {
        let mut img =
            RgbaImage::from_pixel(canvas.width, canvas.height, Rgba(self.background.to_rgba()));
        for path in &drawing.paths {
            let color = Rgba(path.color.to_rgba());
            for (p0, p1) in path.segments() {
                draw_line(&mut img, p0, p1, color);
            }
        }
        img
    }
}

impl DrawingRenderer for RasterRenderer {
    fn format(&self) -> RenderFormat {
        RenderFormat::Png
    }

    fn render(&self, drawing: &Drawing, canvas: &Canvas) -> Result<Vec<u8>> {
        if drawing.is_empty() {
            return Err(FractalError::EmptyDrawing);
        }
        let img = self.rasterize(drawing, canvas);
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }
}

/// Bresenham's line between two points, truncated to pixel coordinates.
/// Pixels outside the image are skipped.
fn draw_line(img: &mut RgbaImage, p0: Point, p1: Point, color: Rgba<u8>) {
    let (mut x0, mut y0) = (p0.x as i64, p0.y as i64);
    let (x1, y1) = (p1.x as i64, p1.y as i64);
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (w, h) = (i64::from(img.width()), i64::from(img.height()));

    loop {
        if (0..w).contains(&x0) && (0..h).contains(&y0) {
            img.put_pixel(x0 as u32, y0 as u32, color);
        }
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Emits an SVG document with a border and one polyline per path.
#[derive(Clone, Debug)]
pub struct VectorRenderer {
    pub stroke_width: f64,
}

impl Default for VectorRenderer {
    fn default() -> Self {
        Self { stroke_width: 2.0 }
    }
}

impl VectorRenderer {
    pub fn document(&self, drawing: &Drawing, canvas: &Canvas) -> Document {
        let border = Rectangle::new()
            .set("x", 1)
            .set("y", 1)
            .set("width", canvas.width)
            .set("height", canvas.height)
            .set("fill", "none")
            .set("stroke", "black")
            .set("stroke-width", 1);

        let mut doc = Document::new()
            .set("width", canvas.width)
            .set("height", canvas.height)
            .add(border);

        for path in &drawing.paths {
            let points = path
                .points
                .iter()
                .map(|p| format!("{},{}", p.x, p.y))
                .collect::<Vec<_>>()
                .join(" ");
            doc = doc.add(
                Polyline::new()
                    .set("fill", "none")
                    .set("stroke", path.color.to_hex())
                    .set("stroke-width", self.stroke_width)
                    .set("points", points),
            );
        }
        doc
    }

    /// The document as SVG markup.
    pub fn render_text(&self, drawing: &Drawing, canvas: &Canvas) -> String {
        self.document(drawing, canvas).to_string()
    }
}

impl DrawingRenderer for VectorRenderer {
    fn format(&self) -> RenderFormat {
        RenderFormat::Svg
    }

    fn render(&self, drawing: &Drawing, canvas: &Canvas) -> Result<Vec<u8>> {
        if drawing.is_empty() {
            return Err(FractalError::EmptyDrawing);
        }
        Ok(self.render_text(drawing, canvas).into_bytes())
    }
}
