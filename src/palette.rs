//! Ordered color palettes and the bucket lookup behind colorize
//!
//! A palette is a plain ordered list of color strings. The bucket rule
//! partitions the unit interval into `n` equal ranges; a normalized
//! weight selects the first range whose upper bound it does not exceed.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Built-in sequential blue ramp, light to dark
const BLUES_RAMP: &str = r##"
colors = ["#eff3ff", "#bdd7e7", "#6baed6", "#3182bd", "#08519c"]

[metadata]
name = "Blues"
description = "Sequential single-hue ramp, light to dark"
"##;

/// Errors from loading a palette file
#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("failed to read palette file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse palette file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// An ordered list of colors, optionally named
///
/// Order matters: position decides which slice of the unit interval each
/// color owns. Colors are opaque strings passed through to the rendering
/// engine unvalidated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Palette {
    /// Display name, if the palette came from a file that declared one
    pub name: Option<String>,
    /// Free-form description of the ramp
    pub description: Option<String>,
    /// The colors themselves, lowest bucket first
    pub colors: Vec<String>,
}

#[derive(Deserialize)]
struct TomlPalette {
    colors: Vec<String>,
    metadata: Option<TomlMetadata>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

impl Palette {
    /// Build a palette from a list of colors
    pub fn new<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: None,
            description: None,
            colors: colors.into_iter().map(Into::into).collect(),
        }
    }

    /// Load a palette from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, PaletteError> {
        let content = fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse a palette from TOML text
    pub fn from_str(content: &str) -> Result<Self, PaletteError> {
        let parsed: TomlPalette = toml::from_str(content)?;
        let metadata = parsed.metadata.unwrap_or(TomlMetadata {
            name: None,
            description: None,
        });
        Ok(Self {
            name: metadata.name,
            description: metadata.description,
            colors: parsed.colors,
        })
    }

    /// The built-in five-step blue ramp
    pub fn blues() -> Self {
        Self::from_str(BLUES_RAMP).expect("Built-in palette should be valid TOML")
    }

    /// Select the color whose bucket contains `weight`
    ///
    /// With `n` colors, color `i` covers weights up to `(i + 1) / n`.
    /// A weight of exactly a bucket boundary lands in the lower bucket.
    /// Returns None for an empty palette, for weights above 1, and for
    /// NaN, which fails every comparison.
    pub fn color_for(&self, weight: f64) -> Option<&str> {
        let n = self.colors.len() as f64;
        self.colors
            .iter()
            .enumerate()
            .find(|(i, _)| weight <= (*i as f64 + 1.0) / n)
            .map(|(_, color)| color.as_str())
    }

    /// Number of colors in the palette
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True if the palette holds no colors
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
