//! Error type shared by every stage of the fractal pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while rewriting, interpreting, normalizing or rendering a fractal.
#[derive(Error, Debug)]
pub enum FractalError {
    /// A non-control symbol has no production rule.
    #[error("no rule for symbol '{symbol}' (rewrite pass {pass})")]
    UndefinedSymbol { symbol: char, pass: usize },

    /// The expanded string grew past [`RewriteConfig::max_length`](crate::RewriteConfig::max_length).
    #[error("expansion exceeded {limit} symbols at rewrite pass {pass}")]
    ExpansionLimit { limit: usize, pass: usize },

    /// `]` encountered with an empty branch stack.
    #[error("branch stack underflow at symbol index {index}")]
    StackUnderflow { index: usize },

    /// Bounds or normalization requested on a drawing without points.
    #[error("drawing has no points")]
    EmptyDrawing,

    /// Writing rendered output failed.
    #[error("render I/O error: {0}")]
    RenderIo(#[from] std::io::Error),

    /// The raster encoder rejected the image.
    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    /// No preset in the catalog has this name.
    #[error("no fractal by name: {0}")]
    UnknownFractalName(String),

    /// A catalog file could not be read.
    #[error("cannot read catalog {path}: {source}")]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A catalog document could not be parsed.
    #[error("invalid fractal catalog: {0}")]
    Catalog(#[from] toml::de::Error),

    /// A colour string was neither a palette name nor `#rrggbb[aa]`.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A batch render failed on the named fractal.
    #[error("fractal '{name}' failed: {source}")]
    Fractal {
        name: String,
        #[source]
        source: Box<FractalError>,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FractalError>;
