//! Call-recording engine for inspecting map behavior in tests
//!
//! Records every engine call in order and mirrors the shape state the
//! calls would produce, with one deliberate exception: animated
//! transitions are logged but never applied, so a test can distinguish
//! an immediate attribute change from an animated one.

use std::collections::BTreeMap;

use super::{Easing, RenderEngine, ShapeId, StylePatch};

/// One recorded engine call
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    ResetSurface {
        width: f64,
        height: f64,
    },
    AddPath {
        shape: ShapeId,
        geometry: String,
    },
    SetData {
        shape: ShapeId,
        key: String,
        value: String,
    },
    SetAttr {
        shape: ShapeId,
        attr: String,
        value: String,
    },
    ApplyStyle {
        shape: ShapeId,
        patch: StylePatch,
    },
    Scale {
        shapes: Vec<ShapeId>,
        factor: f64,
    },
    AnimateAttr {
        shape: ShapeId,
        attr: String,
        to: String,
        duration_ms: u32,
        easing: Easing,
    },
}

/// Shape state as the recorded calls left it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordedShape {
    /// The geometry the shape was created with
    pub geometry: String,
    /// Data tags attached to the shape
    pub data: BTreeMap<String, String>,
    /// Presentation attributes set on the shape
    pub attrs: BTreeMap<String, String>,
}

/// Render engine that records calls instead of drawing
///
/// Every call is logged, even one addressing a vacant shape slot; only
/// the shape mirror ignores those.
#[derive(Debug, Clone, Default)]
pub struct RecordingEngine {
    ops: Vec<Op>,
    shapes: Vec<RecordedShape>,
    width: f64,
    height: f64,
}

impl RecordingEngine {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls, oldest first
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Shapes on the current surface generation
    pub fn shapes(&self) -> &[RecordedShape] {
        &self.shapes
    }

    /// Dimensions from the most recent surface reset
    pub fn surface_size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Current value of a presentation attribute
    pub fn attr_of(&self, shape: ShapeId, attr: &str) -> Option<&str> {
        self.shapes.get(shape.0)?.attrs.get(attr).map(String::as_str)
    }

    /// Current value of a data tag
    pub fn data_of(&self, shape: ShapeId, key: &str) -> Option<&str> {
        self.shapes.get(shape.0)?.data.get(key).map(String::as_str)
    }

    fn shape_mut(&mut self, shape: ShapeId) -> Option<&mut RecordedShape> {
        self.shapes.get_mut(shape.0)
    }
}

impl RenderEngine for RecordingEngine {
    fn reset_surface(&mut self, width: f64, height: f64) {
        self.ops.push(Op::ResetSurface { width, height });
        self.width = width;
        self.height = height;
        self.shapes.clear();
    }

    fn add_path(&mut self, geometry: &str) -> ShapeId {
        let shape = ShapeId(self.shapes.len());
        self.ops.push(Op::AddPath {
            shape,
            geometry: geometry.to_owned(),
        });
        self.shapes.push(RecordedShape {
            geometry: geometry.to_owned(),
            ..Default::default()
        });
        shape
    }

    fn set_data(&mut self, shape: ShapeId, key: &str, value: &str) {
        self.ops.push(Op::SetData {
            shape,
            key: key.to_owned(),
            value: value.to_owned(),
        });
        if let Some(shape) = self.shape_mut(shape) {
            shape.data.insert(key.to_owned(), value.to_owned());
        }
    }

    fn data(&self, shape: ShapeId, key: &str) -> Option<&str> {
        self.data_of(shape, key)
    }

    fn set_attr(&mut self, shape: ShapeId, attr: &str, value: &str) {
        self.ops.push(Op::SetAttr {
            shape,
            attr: attr.to_owned(),
            value: value.to_owned(),
        });
        if let Some(shape) = self.shape_mut(shape) {
            shape.attrs.insert(attr.to_owned(), value.to_owned());
        }
    }

    fn attr(&self, shape: ShapeId, attr: &str) -> Option<&str> {
        self.attr_of(shape, attr)
    }

    fn apply_style(&mut self, shape: ShapeId, patch: &StylePatch) {
        self.ops.push(Op::ApplyStyle {
            shape,
            patch: patch.clone(),
        });
        let Some(shape) = self.shape_mut(shape) else {
            return;
        };
        if let Some(fill) = &patch.fill {
            shape.attrs.insert("fill".to_owned(), fill.clone());
        }
        if let Some(stroke) = &patch.stroke {
            shape.attrs.insert("stroke".to_owned(), stroke.clone());
        }
        if let Some(width) = patch.stroke_width {
            shape.attrs.insert("stroke-width".to_owned(), format!("{}", width));
        }
    }

    fn scale(&mut self, shapes: &[ShapeId], factor: f64) {
        self.ops.push(Op::Scale {
            shapes: shapes.to_vec(),
            factor,
        });
        for &shape in shapes {
            if let Some(shape) = self.shape_mut(shape) {
                shape
                    .attrs
                    .insert("transform".to_owned(), format!("scale({})", factor));
            }
        }
    }

    fn animate_attr(
        &mut self,
        shape: ShapeId,
        attr: &str,
        to: &str,
        duration_ms: u32,
        easing: Easing,
    ) {
        self.ops.push(Op::AnimateAttr {
            shape,
            attr: attr.to_owned(),
            to: to.to_owned(),
            duration_ms,
            easing,
        });
    }
}
