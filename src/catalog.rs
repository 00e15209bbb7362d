//! Fractal presets: grammar plus turtle parameters, loadable from TOML.

use crate::color::Color;
use crate::error::{FractalError, Result};
use crate::grammar::{RewriteConfig, Rewriter, Rules};
use crate::interpreter::TurtleConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

const BUILTIN_PRESETS: &str = include_str!("../presets/builtin.toml");

/// A named L-System fractal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FractalSpec {
    pub name: String,
    pub axiom: String,
    pub rules: Rules,
    /// Number of rewrite passes.
    pub levels: usize,
    /// Initial heading in degrees.
    #[serde(default)]
    pub theta: f64,
    /// Turn increment in degrees.
    pub angle: f64,
    /// Force the whole fractal into a single path.
    #[serde(default, alias = "onePath")]
    pub one_path: bool,
}

impl FractalSpec {
    /// Rewrites the axiom for `levels` passes.
    pub fn expand(&self, config: &RewriteConfig) -> Result<String> {
        Rewriter::new(config.clone()).rewrite(&self.axiom, &self.rules, self.levels)
    }

    pub fn turtle_config(&self, color: Color) -> TurtleConfig {
        TurtleConfig {
            start_heading: self.theta,
            turn_angle: self.angle,
            color,
            single_path: self.one_path,
            ..Default::default()
        }
    }

    /// One-line description: `== name == Angle: a, Axiom: x, Rules: k:v ...`.
    pub fn describe(&self) -> String {
        let rules = self
            .rules
            .iter()
            .map(|(k, v)| format!("{k}:{v}"))
            .collect::<Vec<_>>()
            .join(" ");
        format!(
            "== {} == Angle: {}, Axiom: {}, Rules: {}",
            self.name, self.angle, self.axiom, rules
        )
    }
}

/// An ordered collection of presets.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(rename = "fractal", default)]
    pub fractals: Vec<FractalSpec>,
}

impl Catalog {
    /// Parses a document of `[[fractal]]` tables.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| FractalError::CatalogIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// The presets bundled with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_PRESETS)
    }

    pub fn find(&self, name: &str) -> Result<&FractalSpec> {
        self.fractals
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| FractalError::UnknownFractalName(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fractals.iter().map(|f| f.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fractals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fractals.is_empty()
    }
}
