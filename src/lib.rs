//! Choropleth - color SVG path regions by their values
//!
//! This library parses an SVG source document, associates whole-number
//! values with its path regions, and recolors each region from an
//! ordered palette according to where its value falls in the observed
//! range.
//!
//! # Example
//!
//! ```rust
//! use choropleth::{ChoroplethMap, SourceDocument};
//!
//! let source = SourceDocument::parse(
//!     r#"<svg><path id="a" d="M0 0h4v4z"/><path id="b" d="M4 0h4v4z"/></svg>"#,
//! )
//! .unwrap();
//!
//! let mut map = ChoroplethMap::with_svg_engine(source);
//! map.set("a", 0.0)
//!     .set("b", 10.0)
//!     .colors(["#deebf7", "#3182bd"])
//!     .draw()
//!     .colorize(false);
//!
//! assert!(map.to_svg().contains(r##"fill="#3182bd""##));
//! ```

pub mod dataset;
pub mod engine;
pub mod error;
pub mod map;
pub mod palette;
pub mod source;
pub mod values;

pub use dataset::{Dataset, DatasetError};
pub use engine::{Easing, RecordingEngine, RenderEngine, ShapeId, StylePatch, SvgConfig, SvgEngine};
pub use error::SourceError;
pub use map::{ChoroplethMap, Region, Style};
pub use palette::{Palette, PaletteError};
pub use source::{PathElement, SourceDocument};
pub use values::ValueTable;

use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error reading or parsing the source document
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    /// Error reading or parsing the dataset
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Whether fills change through animated transitions
    pub animate: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            svg: SvgConfig::default(),
            animate: false,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Enable or disable animated fill transitions
    pub fn with_animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }
}

/// Render an SVG source document colored by a dataset
///
/// This is the main entry point for the library. It parses the source,
/// loads the dataset's values and palette into a map, draws it, and
/// returns the recolored SVG.
///
/// # Example
///
/// ```rust
/// use choropleth::{render, Dataset};
///
/// let dataset = Dataset::from_str(r##"
/// palette = ["#ff0000", "#00ff00", "#0000ff"]
///
/// [values]
/// a = 0
/// b = 5
/// c = 10
/// "##).unwrap();
///
/// let svg = render(
///     r#"<svg><path id="a" d="M0 0h4v4z"/><path id="b" d="M4 0h4v4z"/><path id="c" d="M8 0h4v4z"/></svg>"#,
///     &dataset,
/// ).unwrap();
///
/// assert!(svg.contains(r##"fill="#00ff00""##));
/// ```
pub fn render(source: &str, dataset: &Dataset) -> Result<String, RenderError> {
    render_with_config(source, dataset, RenderConfig::default())
}

/// Render an SVG source document with custom configuration
///
/// # Example
///
/// ```rust
/// use choropleth::{render_with_config, Dataset, RenderConfig, SvgConfig};
///
/// let dataset = Dataset::from_str("[values]\nusa = 3\n").unwrap();
/// let config = RenderConfig::new()
///     .with_svg(SvgConfig::new().with_pretty_print(false))
///     .with_animate(true);
///
/// let svg = render_with_config(
///     r#"<svg><path id="usa" d="M0 0h4v4z"/></svg>"#,
///     &dataset,
///     config,
/// ).unwrap();
/// assert!(svg.contains("<svg"));
/// ```
pub fn render_with_config(
    source: &str,
    dataset: &Dataset,
    config: RenderConfig,
) -> Result<String, RenderError> {
    let document = SourceDocument::parse(source)?;

    let mut map = ChoroplethMap::new(document, SvgEngine::with_config(config.svg));
    map.size(
        dataset.width.unwrap_or(map::DEFAULT_CANVAS),
        dataset.height.unwrap_or(map::DEFAULT_CANVAS),
    );
    map.set_palette(dataset.palette.clone().unwrap_or_else(Palette::blues));
    for (key, value) in &dataset.values {
        map.set(key.as_str(), *value);
    }

    map.draw();
    if let Some(scale) = dataset.scale {
        map.scale(scale);
    }
    map.colorize(config.animate);

    Ok(map.to_svg())
}
