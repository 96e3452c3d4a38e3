//! SVG markup generation
//!
//! This engine accumulates shapes in memory and serializes the whole
//! surface on demand. Animated transitions become SMIL `<animate>`
//! children so the output stays a single self-contained document.

use std::collections::BTreeMap;

use super::{Easing, RenderEngine, ShapeId, StylePatch, SvgConfig};

/// Cubic bezier control points matching a slow-in slow-out curve
const EASE_IN_OUT_SPLINE: &str = "0.42 0 0.58 1";

#[derive(Debug, Clone)]
struct Transition {
    attr: String,
    to: String,
    duration_ms: u32,
    easing: Easing,
}

#[derive(Debug, Clone, Default)]
struct SvgShape {
    geometry: String,
    data: BTreeMap<String, String>,
    attrs: BTreeMap<String, String>,
    transitions: Vec<Transition>,
}

/// Render engine that serializes the surface to SVG markup
#[derive(Debug, Clone, Default)]
pub struct SvgEngine {
    config: SvgConfig,
    width: f64,
    height: f64,
    shapes: Vec<SvgShape>,
}

impl SvgEngine {
    /// Create an engine with the default configuration
    pub fn new() -> Self {
        Self::with_config(SvgConfig::default())
    }

    /// Create an engine with an explicit configuration
    pub fn with_config(config: SvgConfig) -> Self {
        Self {
            config,
            width: 0.0,
            height: 0.0,
            shapes: vec![],
        }
    }

    fn shape_mut(&mut self, shape: ShapeId) -> Option<&mut SvgShape> {
        self.shapes.get_mut(shape.0)
    }

    fn indent_str(&self, depth: usize) -> String {
        if self.config.pretty_print {
            "  ".repeat(depth)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Serialize the current surface to an SVG string
    pub fn to_svg(&self) -> String {
        let nl = self.newline();
        let mut svg = String::new();

        // XML declaration for standalone documents
        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        ));
        svg.push_str(nl);

        for shape in &self.shapes {
            svg.push_str(&self.render_shape(shape));
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }

    fn render_shape(&self, shape: &SvgShape) -> String {
        let mut element = format!(
            r#"{}<path d="{}""#,
            self.indent_str(1),
            escape_xml(&shape.geometry)
        );

        for (key, value) in &shape.data {
            element.push_str(&format!(r#" data-{}="{}""#, key, escape_xml(value)));
        }

        for (attr, value) in &shape.attrs {
            element.push_str(&format!(r#" {}="{}""#, attr, escape_xml(value)));
        }

        if shape.transitions.is_empty() {
            element.push_str("/>");
        } else {
            let nl = self.newline();
            element.push('>');
            element.push_str(nl);
            for transition in &shape.transitions {
                element.push_str(&self.render_transition(transition));
                element.push_str(nl);
            }
            element.push_str(&format!("{}</path>", self.indent_str(1)));
        }

        element
    }

    fn render_transition(&self, transition: &Transition) -> String {
        let timing = match transition.easing {
            Easing::Linear => String::new(),
            Easing::InOut => format!(
                r#" calcMode="spline" keyTimes="0;1" keySplines="{}""#,
                EASE_IN_OUT_SPLINE
            ),
        };
        format!(
            r#"{}<animate attributeName="{}" to="{}" dur="{}ms" fill="freeze"{}/>"#,
            self.indent_str(2),
            escape_xml(&transition.attr),
            escape_xml(&transition.to),
            transition.duration_ms,
            timing
        )
    }
}

impl RenderEngine for SvgEngine {
    fn reset_surface(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.shapes.clear();
    }

    fn add_path(&mut self, geometry: &str) -> ShapeId {
        self.shapes.push(SvgShape {
            geometry: geometry.to_owned(),
            ..Default::default()
        });
        ShapeId(self.shapes.len() - 1)
    }

    fn set_data(&mut self, shape: ShapeId, key: &str, value: &str) {
        if let Some(shape) = self.shape_mut(shape) {
            shape.data.insert(key.to_owned(), value.to_owned());
        }
    }

    fn data(&self, shape: ShapeId, key: &str) -> Option<&str> {
        self.shapes.get(shape.0)?.data.get(key).map(String::as_str)
    }

    fn set_attr(&mut self, shape: ShapeId, attr: &str, value: &str) {
        if let Some(shape) = self.shape_mut(shape) {
            shape.attrs.insert(attr.to_owned(), value.to_owned());
        }
    }

    fn attr(&self, shape: ShapeId, attr: &str) -> Option<&str> {
        self.shapes.get(shape.0)?.attrs.get(attr).map(String::as_str)
    }

    fn apply_style(&mut self, shape: ShapeId, patch: &StylePatch) {
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
        if let Some(shape) = self.shape_mut(shape) {
            // a new transition on an attribute supersedes any pending one
            shape.transitions.retain(|t| t.attr != attr);
            shape.transitions.push(Transition {
                attr: attr.to_owned(),
                to: to.to_owned(),
                duration_ms,
                easing,
            });
        }
    }
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
