//! The choropleth map itself
//!
//! A [`ChoroplethMap`] ties together a parsed source document, a value
//! table, a palette, and a rendering engine. Drawing rebuilds the
//! engine surface wholesale from the source paths; colorize computes a
//! normalized weight per value and recolors the matching regions.
//!
//! Every operation degrades leniently. Values that never match a
//! region, regions that never receive a value, weights outside the
//! palette, all of it is skipped silently rather than reported.

use crate::engine::{Easing, RenderEngine, ShapeId, StylePatch, SvgEngine};
use crate::palette::Palette;
use crate::source::SourceDocument;
use crate::values::ValueTable;

/// Default canvas width and height
pub const DEFAULT_CANVAS: f64 = 140.0;

/// Fill applied to freshly drawn regions
pub const DEFAULT_FILL: &str = "#cfd4d8";

/// Stroke applied to freshly drawn regions
pub const DEFAULT_STROKE: &str = "#ffffff";

/// Stroke width applied to freshly drawn regions
pub const DEFAULT_STROKE_WIDTH: f64 = 1.1;

/// Duration of the animated fill transition
const FILL_TRANSITION_MS: u32 = 1000;

/// Complete visual style of one region
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Interior paint
    pub fill: String,
    /// Outline paint
    pub stroke: String,
    /// Outline thickness
    pub stroke_width: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: DEFAULT_FILL.to_owned(),
            stroke: DEFAULT_STROKE.to_owned(),
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl Style {
    fn apply(&mut self, patch: &StylePatch) {
        if let Some(fill) = &patch.fill {
            self.fill = fill.clone();
        }
        if let Some(stroke) = &patch.stroke {
            self.stroke = stroke.clone();
        }
        if let Some(width) = patch.stroke_width {
            self.stroke_width = width;
        }
    }

    fn to_patch(&self) -> StylePatch {
        StylePatch::new()
            .with_fill(self.fill.clone())
            .with_stroke(self.stroke.clone())
            .with_stroke_width(self.stroke_width)
    }
}

/// One drawn region of the map
///
/// Regions are rebuilt wholesale on every [`ChoroplethMap::draw`], so
/// references into the region list never outlive a redraw.
#[derive(Debug, Clone)]
pub struct Region {
    key: Option<String>,
    geometry: String,
    style: Style,
    shape: ShapeId,
}

impl Region {
    /// Region key from the source element's id, if it had one
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// SVG path geometry of the region
    pub fn geometry(&self) -> &str {
        &self.geometry
    }

    /// Current style of the region
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Engine handle of the region's shape
    pub fn shape(&self) -> ShapeId {
        self.shape
    }
}

/// A map that colors source regions by their associated values
///
/// The engine is injected, so the same map logic drives real SVG
/// output and the recording engine used in tests.
#[derive(Debug)]
pub struct ChoroplethMap<E: RenderEngine> {
    source: SourceDocument,
    engine: E,
    width: f64,
    height: f64,
    values: ValueTable,
    palette: Palette,
    regions: Vec<Region>,
}

impl<E: RenderEngine> ChoroplethMap<E> {
    /// Create a map over a source document
    ///
    /// Nothing is drawn yet; call [`draw`](Self::draw) to build the
    /// surface. The canvas starts at 140 by 140 and the palette empty.
    pub fn new(source: SourceDocument, engine: E) -> Self {
        Self {
            source,
            engine,
            width: DEFAULT_CANVAS,
            height: DEFAULT_CANVAS,
            values: ValueTable::new(),
            palette: Palette::default(),
            regions: vec![],
        }
    }

    /// Set the canvas dimensions for the next draw
    pub fn size(&mut self, width: f64, height: f64) -> &mut Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Rebuild the surface from the source document
    ///
    /// Clears whatever was drawn before, then adds one region per
    /// source path with the default style. Elements without an id
    /// become keyless regions that values can never address.
    pub fn draw(&mut self) -> &mut Self {
        self.regions.clear();
        self.engine.reset_surface(self.width, self.height);
        for element in self.source.paths() {
            let shape = self.engine.add_path(element.geometry());
            if let Some(id) = element.id() {
                self.engine.set_data(shape, "id", id);
            }
            let style = Style::default();
            self.engine.apply_style(shape, &style.to_patch());
            self.regions.push(Region {
                key: element.id().map(str::to_owned),
                geometry: element.geometry().to_owned(),
                style,
                shape,
            });
        }
        self
    }

    /// Store a value for a region key, truncated toward zero
    pub fn set(&mut self, key: impl Into<String>, value: f64) -> &mut Self {
        self.values.insert(key, value);
        self
    }

    /// Store a textual value, coerced via integer-prefix parsing
    pub fn set_text(&mut self, key: impl Into<String>, value: &str) -> &mut Self {
        self.values.insert_text(key, value);
        self
    }

    /// Look up the stored value for a key
    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key)
    }

    /// Minimum over all stored values, `+∞` when none are stored
    pub fn min(&self) -> f64 {
        self.values.min()
    }

    /// Maximum over all stored values, `-∞` when none are stored
    pub fn max(&self) -> f64 {
        self.values.max()
    }

    /// Replace the palette with a plain list of colors
    pub fn colors<I, S>(&mut self, colors: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.palette = Palette::new(colors);
        self
    }

    /// Replace the palette wholesale
    pub fn set_palette(&mut self, palette: Palette) -> &mut Self {
        self.palette = palette;
        self
    }

    /// Apply a style patch to every drawn region
    ///
    /// Escape hatch for uniform restyling; per-region fills normally
    /// come from [`colorize`](Self::colorize).
    pub fn style(&mut self, patch: &StylePatch) -> &mut Self {
        for region in &mut self.regions {
            region.style.apply(patch);
            self.engine.apply_style(region.shape, patch);
        }
        self
    }

    /// Scale every drawn region uniformly about the surface origin
    ///
    /// The factor is absolute; calling `scale(2.0)` twice leaves the
    /// map at twice its drawn size, not four times.
    pub fn scale(&mut self, factor: f64) -> &mut Self {
        let shapes: Vec<ShapeId> = self.regions.iter().map(|r| r.shape).collect();
        self.engine.scale(&shapes, factor);
        self
    }

    /// Find the first drawn region with the given key
    pub fn find(&self, key: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.key.as_deref() == Some(key))
    }

    /// Color for a normalized weight under the current palette
    pub fn color(&self, weight: f64) -> Option<&str> {
        self.palette.color_for(weight)
    }

    /// Recolor regions according to their values
    ///
    /// Each value is normalized against the table's min and max, the
    /// weight picks a palette bucket, and the matching region's fill
    /// is updated, either immediately or through a one second eased
    /// transition. Entries with no matching region, weights without a
    /// color, and degenerate ranges (NaN weights) are skipped.
    pub fn colorize(&mut self, animate: bool) -> &mut Self {
        let min = self.values.min();
        let max = self.values.max();
        for (key, value) in self.values.iter() {
            let weight = (value - min) / (max - min);
            let Some(color) = self.palette.color_for(weight) else {
                continue;
            };
            let Some(region) = self.regions.iter_mut().find(|r| r.key.as_deref() == Some(key))
            else {
                continue;
            };
            region.style.fill = color.to_owned();
            if animate {
                self.engine
                    .animate_attr(region.shape, "fill", color, FILL_TRANSITION_MS, Easing::InOut);
            } else {
                self.engine.set_attr(region.shape, "fill", color);
            }
        }
        self
    }

    /// Regions from the most recent draw, in source order
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// The value table
    pub fn values(&self) -> &ValueTable {
        &self.values
    }

    /// The current palette
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The rendering engine
    pub fn engine(&self) -> &E {
        &self.engine
    }
}

impl ChoroplethMap<SvgEngine> {
    /// Create a map backed by the SVG engine with default settings
    pub fn with_svg_engine(source: SourceDocument) -> Self {
        Self::new(source, SvgEngine::new())
    }

    /// Serialize the drawn surface to SVG markup
    pub fn to_svg(&self) -> String {
        self.engine.to_svg()
    }
}
