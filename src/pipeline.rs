//! End-to-end pipeline: rewrite, interpret, normalize, render.

use crate::catalog::{Catalog, FractalSpec};
use crate::color::Color;
use crate::drawing::Drawing;
use crate::error::{FractalError, Result};
use crate::grammar::RewriteConfig;
use crate::interpreter::TurtleInterpreter;
use crate::render::{Canvas, RenderFormat, normalize, renderer_for};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Settings shared by every render of a run.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub color: Color,
    pub canvas: Canvas,
    pub rewrite: RewriteConfig,
    /// Directory that receives `<name>.png` / `<name>.svg`.
    pub out_dir: PathBuf,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            canvas: Canvas::default(),
            rewrite: RewriteConfig::default(),
            out_dir: PathBuf::from("images"),
        }
    }
}

/// A rendered fractal held in memory.
#[derive(Clone, Debug)]
pub struct RenderedFractal {
    /// The normalized drawing the bytes were produced from.
    pub drawing: Drawing,
    pub format: RenderFormat,
    pub bytes: Vec<u8>,
}

/// Expands and interprets `spec` into a raw (y-up, unnormalized) drawing.
pub fn build_drawing(spec: &FractalSpec, color: Color, rewrite: &RewriteConfig) -> Result<Drawing> {
    let symbols = spec.expand(rewrite)?;
    debug!(name = %spec.name, symbols = symbols.len(), "expanded");
    TurtleInterpreter::new(spec.turtle_config(color)).interpret(&symbols)
}

/// Runs the full pipeline for `spec` without touching the filesystem.
pub fn render_fractal(
    spec: &FractalSpec,
    color: Color,
    canvas: &Canvas,
    format: RenderFormat,
    rewrite: &RewriteConfig,
) -> Result<RenderedFractal> {
    let mut drawing = build_drawing(spec, color, rewrite)?;
    normalize(&mut drawing, canvas)?;
    let bytes = renderer_for(format).render(&drawing, canvas)?;
    Ok(RenderedFractal {
        drawing,
        format,
        bytes,
    })
}

/// Renders `spec` to `<out_dir>/<name>.<ext>` and returns the summary
/// line `"<file>: <N> paths"`.
pub fn render_fractal_to_file(
    spec: &FractalSpec,
    format: RenderFormat,
    options: &RenderOptions,
) -> Result<String> {
    let rendered = render_fractal(spec, options.color, &options.canvas, format, &options.rewrite)?;
    let file = output_path(&options.out_dir, &spec.name, format);
    std::fs::write(&file, &rendered.bytes)?;
    info!(path = %file.display(), bytes = rendered.bytes.len(), "wrote render");
    Ok(format!(
        "{}: {} paths",
        file.display(),
        rendered.drawing.path_count()
    ))
}

pub fn output_path(out_dir: &Path, name: &str, format: RenderFormat) -> PathBuf {
    out_dir.join(format!("{name}.{}", format.extension()))
}

/// Renders every preset of `catalog` as SVG and PNG, writing a header and
/// one summary line per render to `out`.
///
/// The SVG variant always forces a single path; the PNG variant uses the
/// preset's own `one_path`. Stops at the first failure, naming the fractal.
pub fn render_catalog<W: Write>(
    catalog: &Catalog,
    options: &RenderOptions,
    out: &mut W,
) -> Result<()> {
    std::fs::create_dir_all(&options.out_dir)?;
    for spec in &catalog.fractals {
        writeln!(out, "{}", spec.describe())?;

        let single = FractalSpec {
            one_path: true,
            ..spec.clone()
        };
        let variants = [(&single, RenderFormat::Svg), (spec, RenderFormat::Png)];
        for (variant, format) in variants {
            let summary = render_fractal_to_file(variant, format, options).map_err(|e| {
                FractalError::Fractal {
                    name: spec.name.clone(),
                    source: Box::new(e),
                }
            })?;
            writeln!(out, "{summary}")?;
        }
    }
    Ok(())
}
