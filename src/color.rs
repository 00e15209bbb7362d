//! RGBA colour type and the named palette.

use crate::error::{FractalError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// RGBA colour with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque colour (alpha = 255).
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Every named palette entry, in display order.
    pub const PALETTE: [(&'static str, Color); 5] = [
        ("red", Color::RED),
        ("green", Color::GREEN),
        ("blue", Color::BLUE),
        ("white", Color::WHITE),
        ("black", Color::BLACK),
    ];

    /// `#rrggbbaa`, as used for SVG stroke attributes.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }

    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Color::PALETTE.iter().find(|(_, c)| c == self) {
            Some((name, _)) => f.write_str(name),
            None => f.write_str(&self.to_hex()),
        }
    }
}

impl FromStr for Color {
    type Err = FractalError;

    /// Accepts a palette name (case-insensitive), `#rrggbb` or `#rrggbbaa`.
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        if let Some((_, c)) = Color::PALETTE.iter().find(|(name, _)| *name == lower) {
            return Ok(*c);
        }

        let invalid = || FractalError::InvalidColor(s.to_string());
        let hex = lower.strip_prefix('#').ok_or_else(invalid)?;
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return Err(invalid());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let a = if hex.len() == 8 { byte(6)? } else { 255 };
        Ok(Color::new(byte(0)?, byte(2)?, byte(4)?, a))
    }
}
