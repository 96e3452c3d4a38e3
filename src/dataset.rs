//! Dataset files pairing region values with presentation settings
//!
//! A dataset is a small TOML document: an optional canvas size, scale
//! factor and palette, plus the `[values]` table keyed by region id.
//! Value order in the file is preserved, matching the order in which
//! the map will process them.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

use crate::palette::Palette;
use crate::values::parse_int_prefix;

/// Errors that can occur when loading a dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse dataset file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Region values plus optional presentation settings
///
/// Values are kept as written; truncation to whole numbers happens
/// when they are loaded into a map. Textual values are coerced at
/// parse time through the same lenient integer-prefix rule the map
/// uses, so `"26km"` becomes 26 and `"n/a"` becomes NaN.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Canvas width override
    pub width: Option<f64>,
    /// Canvas height override
    pub height: Option<f64>,
    /// Uniform scale factor applied after drawing
    pub scale: Option<f64>,
    /// Palette override, lowest bucket first
    pub palette: Option<Palette>,
    /// Values keyed by region id, in file order
    pub values: IndexMap<String, f64>,
}

/// TOML structure for deserializing datasets
#[derive(Deserialize)]
struct TomlDataset {
    width: Option<f64>,
    height: Option<f64>,
    scale: Option<f64>,
    palette: Option<Vec<String>>,
    #[serde(default)]
    values: IndexMap<String, TomlValue>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TomlValue {
    Number(f64),
    Text(String),
}

impl Dataset {
    /// Load a dataset from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, DatasetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse a dataset from TOML text
    pub fn from_str(content: &str) -> Result<Self, DatasetError> {
        let parsed: TomlDataset = toml::from_str(content)?;

        let values = parsed
            .values
            .into_iter()
            .map(|(key, value)| {
                let value = match value {
                    TomlValue::Number(n) => n,
                    TomlValue::Text(t) => parse_int_prefix(&t),
                };
                (key, value)
            })
            .collect();

        Ok(Dataset {
            width: parsed.width,
            height: parsed.height,
            scale: parsed.scale,
            palette: parsed.palette.map(Palette::new),
            values,
        })
    }
}
