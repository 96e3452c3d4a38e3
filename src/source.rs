//! Source-document parsing
//!
//! The map never touches raw markup itself; it consumes a
//! [`SourceDocument`], the parsed form of the host SVG fragment its
//! regions are drawn from. Parsing happens once, up front; every
//! [`draw`](crate::ChoroplethMap::draw) pass re-reads the retained
//! elements in document order.

use std::path::Path;

use crate::error::SourceError;

/// One `<path>` element extracted from the source markup
#[derive(Debug, Clone, PartialEq)]
pub struct PathElement {
    id: Option<String>,
    geometry: String,
}

impl PathElement {
    /// The identifier attribute, if the element carried one
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The path geometry string (`d` attribute)
    pub fn geometry(&self) -> &str {
        &self.geometry
    }
}

/// The parsed source fragment: every path element, in document order
///
/// Elements without a `d` attribute are skipped since there is nothing to
/// draw. Elements without an `id` are kept but yield keyless regions that
/// no lookup can match. Identifier uniqueness is the caller's concern.
#[derive(Debug, Clone, Default)]
pub struct SourceDocument {
    paths: Vec<PathElement>,
}

impl SourceDocument {
    /// Parse an SVG document or fragment
    pub fn parse(source: &str) -> Result<Self, SourceError> {
        let doc = roxmltree::Document::parse(source)?;
        let paths = doc
            .descendants()
            .filter(|node| node.is_element() && node.tag_name().name() == "path")
            .filter_map(|node| {
                let geometry = node.attribute("d")?;
                Some(PathElement {
                    id: node.attribute("id").map(str::to_owned),
                    geometry: geometry.to_owned(),
                })
            })
            .collect();
        Ok(Self { paths })
    }

    /// Read and parse an SVG document from a file
    pub fn from_file(path: &Path) -> Result<Self, SourceError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// All retained path elements, in document order
    pub fn paths(&self) -> &[PathElement] {
        &self.paths
    }

    /// Number of retained path elements
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// True if the fragment contained no drawable path elements
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_paths_in_document_order() {
        let doc = SourceDocument::parse(
            r#"<svg><path id="x" d="M0 0h1v1z"/><path id="y" d="M1 0h1v1z"/></svg>"#,
        )
        .expect("Should parse");

        assert_eq!(doc.len(), 2);
        assert_eq!(doc.paths()[0].id(), Some("x"));
        assert_eq!(doc.paths()[0].geometry(), "M0 0h1v1z");
        assert_eq!(doc.paths()[1].id(), Some("y"));
    }

    #[test]
    fn test_parse_finds_nested_paths() {
        let doc = SourceDocument::parse(
            r#"<svg><g><g><path id="deep" d="M0 0"/></g></g><path id="top" d="M1 1"/></svg>"#,
        )
        .expect("Should parse");

        assert_eq!(doc.len(), 2);
        assert_eq!(doc.paths()[0].id(), Some("deep"));
        assert_eq!(doc.paths()[1].id(), Some("top"));
    }

    #[test]
    fn test_parse_ignores_other_elements() {
        let doc = SourceDocument::parse(
            r#"<svg><rect width="5" height="5"/><circle r="2"/><path d="M0 0"/></svg>"#,
        )
        .expect("Should parse");

        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_parse_skips_paths_without_geometry() {
        let doc = SourceDocument::parse(r#"<svg><path id="empty"/><path id="ok" d="M0 0"/></svg>"#)
            .expect("Should parse");

        assert_eq!(doc.len(), 1);
        assert_eq!(doc.paths()[0].id(), Some("ok"));
    }

    #[test]
    fn test_parse_keeps_paths_without_id() {
        let doc = SourceDocument::parse(r#"<svg><path d="M0 0h1v1z"/></svg>"#)
            .expect("Should parse");

        assert_eq!(doc.len(), 1);
        assert_eq!(doc.paths()[0].id(), None);
    }

    #[test]
    fn test_parse_with_namespace() {
        let doc = SourceDocument::parse(
            r#"<svg xmlns="http://www.w3.org/2000/svg"><path id="a" d="M0 0"/></svg>"#,
        )
        .expect("Should parse");

        assert_eq!(doc.len(), 1);
        assert_eq!(doc.paths()[0].id(), Some("a"));
    }

    #[test]
    fn test_parse_empty_fragment() {
        let doc = SourceDocument::parse("<svg></svg>").expect("Should parse");
        assert!(doc.is_empty());
    }

    #[test]
    fn test_parse_unescapes_attributes() {
        let doc = SourceDocument::parse(r#"<svg><path id="a&amp;b" d="M0 0"/></svg>"#)
            .expect("Should parse");

        assert_eq!(doc.paths()[0].id(), Some("a&b"));
    }

    #[test]
    fn test_parse_malformed_markup() {
        let result = SourceDocument::parse("<svg><path d=");
        assert!(result.is_err());
    }
}
