//! Rendering engine abstraction behind the map
//!
//! The map never talks to a drawing surface directly; it goes through
//! the [`RenderEngine`] trait. [`svg::SvgEngine`] produces SVG markup,
//! [`recording::RecordingEngine`] captures calls for inspection in
//! tests. Both are lenient: operations addressing a vacant shape slot
//! are ignored rather than reported.

pub mod config;
pub mod recording;
pub mod svg;

pub use config::SvgConfig;
pub use recording::RecordingEngine;
pub use svg::SvgEngine;

/// Handle to a shape created by [`RenderEngine::add_path`]
///
/// A handle is a bare slot index into the current surface. Operations
/// on a vacant slot are ignored, but a handle held across a
/// [`RenderEngine::reset_surface`] is not detected as stale: it
/// addresses whatever shape occupies its slot afterwards. The map
/// reissues handles on every draw, so it never holds one across a
/// reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(pub usize);

/// Easing curve for animated attribute transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant rate from start to finish
    #[default]
    Linear,
    /// Slow start, fast middle, slow finish
    InOut,
}

/// A partial style update
///
/// Fields left as None are untouched on the target shape, so a patch
/// can adjust a single attribute without resetting the rest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StylePatch {
    /// Interior paint
    pub fill: Option<String>,
    /// Outline paint
    pub stroke: Option<String>,
    /// Outline thickness
    pub stroke_width: Option<f64>,
}

impl StylePatch {
    /// Create an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fill color
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Set the stroke color
    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    /// Set the stroke width
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }
}

/// Drawing surface the map renders onto
///
/// The contract is deliberately forgiving: no operation fails, and
/// calls referencing shapes the engine does not know are dropped
/// silently. That keeps the map free of error plumbing for conditions
/// it could not recover from anyway.
pub trait RenderEngine {
    /// Clear the surface and set its dimensions
    ///
    /// Handles issued before the reset must not be reused; see
    /// [`ShapeId`] for what a reused one addresses.
    fn reset_surface(&mut self, width: f64, height: f64);

    /// Add a path shape from SVG path geometry
    fn add_path(&mut self, geometry: &str) -> ShapeId;

    /// Attach an arbitrary key/value tag to a shape
    fn set_data(&mut self, shape: ShapeId, key: &str, value: &str);

    /// Read back a data tag
    fn data(&self, shape: ShapeId, key: &str) -> Option<&str>;

    /// Set a presentation attribute to a literal value
    fn set_attr(&mut self, shape: ShapeId, attr: &str, value: &str);

    /// Read back a presentation attribute
    fn attr(&self, shape: ShapeId, attr: &str) -> Option<&str>;

    /// Apply every field a patch carries to a shape
    fn apply_style(&mut self, shape: ShapeId, patch: &StylePatch);

    /// Scale shapes uniformly about the surface origin
    ///
    /// The factor is absolute, not cumulative: a later call replaces
    /// the effect of an earlier one rather than compounding it.
    fn scale(&mut self, shapes: &[ShapeId], factor: f64);

    /// Transition an attribute to a new value over a duration
    ///
    /// Fire and forget; the caller gets no completion signal.
    fn animate_attr(
        &mut self,
        shape: ShapeId,
        attr: &str,
        to: &str,
        duration_ms: u32,
        easing: Easing,
    );
}
