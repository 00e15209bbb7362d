//! # symbios-fractal
//!
//! Plane fractal curves from L-System grammars.
//!
//! The pipeline runs in four stages, each owning the [`Drawing`] it works on:
//! 1. [`Rewriter`] expands an axiom under production rules.
//! 2. [`TurtleInterpreter`] walks the expanded string and records pen-down runs as paths.
//! 3. [`normalize`] flips the y-up drawing into device coordinates and fits it to a [`Canvas`].
//! 4. A [`DrawingRenderer`] serializes it as PNG or SVG.
//!
//! Presets live in a [`Catalog`] loaded from TOML; [`render_catalog`] renders a whole catalog.

pub mod catalog;
pub mod color;
pub mod drawing;
pub mod error;
pub mod geometry;
pub mod grammar;
pub mod interpreter;
pub mod pipeline;
pub mod render;
pub mod turtle;

pub use catalog::*;
pub use color::*;
pub use drawing::*;
pub use error::*;
pub use geometry::*;
pub use grammar::*;
pub use interpreter::*;
pub use pipeline::*;
pub use render::*;
pub use turtle::*;
