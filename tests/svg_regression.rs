//! Exact-output regression tests for the SVG engine
//!
//! Output is fully deterministic: attributes are sorted, data tags come
//! before presentation attributes, and value order follows the dataset.
//! These tests pin the markup down to the byte so serializer changes
//! show up as diffs.

use pretty_assertions::assert_eq;

use choropleth::{render, render_with_config, Dataset, RenderConfig, SvgConfig};

const ONE_REGION: &str = r#"<svg><path id="a" d="M0 0h4v4z"/></svg>"#;
const TWO_REGIONS: &str = r#"<svg><path id="a" d="M0 0h4v4z"/><path id="b" d="M4 0h4v4z"/></svg>"#;

fn compact() -> RenderConfig {
    RenderConfig::new().with_svg(SvgConfig::new().with_pretty_print(false))
}

#[test]
fn test_compact_document_without_values() {
    let svg =
        render_with_config(ONE_REGION, &Dataset::default(), compact()).expect("Should render");

    assert_eq!(
        svg,
        r##"<?xml version="1.0" encoding="UTF-8"?><svg xmlns="http://www.w3.org/2000/svg" width="140" height="140" viewBox="0 0 140 140"><path d="M0 0h4v4z" data-id="a" fill="#cfd4d8" stroke="#ffffff" stroke-width="1.1"/></svg>"##
    );
}

#[test]
fn test_pretty_document_without_values() {
    let svg = render(ONE_REGION, &Dataset::default()).expect("Should render");

    let expected = r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="140" height="140" viewBox="0 0 140 140">
  <path d="M0 0h4v4z" data-id="a" fill="#cfd4d8" stroke="#ffffff" stroke-width="1.1"/>
</svg>"##;
    assert_eq!(svg, expected);
}

#[test]
fn test_compact_document_with_immediate_fills() {
    let dataset = Dataset::from_str(
        r##"
palette = ["#ff0000", "#0000ff"]

[values]
a = 0
b = 10
"##,
    )
    .expect("Should parse dataset");
    let svg = render_with_config(TWO_REGIONS, &dataset, compact()).expect("Should render");

    assert_eq!(
        svg,
        r##"<?xml version="1.0" encoding="UTF-8"?><svg xmlns="http://www.w3.org/2000/svg" width="140" height="140" viewBox="0 0 140 140"><path d="M0 0h4v4z" data-id="a" fill="#ff0000" stroke="#ffffff" stroke-width="1.1"/><path d="M4 0h4v4z" data-id="b" fill="#0000ff" stroke="#ffffff" stroke-width="1.1"/></svg>"##
    );
}

#[test]
fn test_compact_document_with_animated_fills() {
    let dataset = Dataset::from_str(
        r##"
palette = ["#ff0000", "#0000ff"]

[values]
a = 0
b = 10
"##,
    )
    .expect("Should parse dataset");
    let svg = render_with_config(TWO_REGIONS, &dataset, compact().with_animate(true))
        .expect("Should render");

    assert_eq!(
        svg,
        r##"<?xml version="1.0" encoding="UTF-8"?><svg xmlns="http://www.w3.org/2000/svg" width="140" height="140" viewBox="0 0 140 140"><path d="M0 0h4v4z" data-id="a" fill="#cfd4d8" stroke="#ffffff" stroke-width="1.1"><animate attributeName="fill" to="#ff0000" dur="1000ms" fill="freeze" calcMode="spline" keyTimes="0;1" keySplines="0.42 0 0.58 1"/></path><path d="M4 0h4v4z" data-id="b" fill="#cfd4d8" stroke="#ffffff" stroke-width="1.1"><animate attributeName="fill" to="#0000ff" dur="1000ms" fill="freeze" calcMode="spline" keyTimes="0;1" keySplines="0.42 0 0.58 1"/></path></svg>"##
    );
}

#[test]
fn test_scaled_document_carries_a_transform() {
    let dataset = Dataset::from_str("scale = 2\n[values]\na = 1\n").expect("Should parse dataset");
    let svg = render_with_config(ONE_REGION, &dataset, compact()).expect("Should render");

    // a single value is a degenerate range, so the fill stays default
    assert_eq!(
        svg,
        r##"<?xml version="1.0" encoding="UTF-8"?><svg xmlns="http://www.w3.org/2000/svg" width="140" height="140" viewBox="0 0 140 140"><path d="M0 0h4v4z" data-id="a" fill="#cfd4d8" stroke="#ffffff" stroke-width="1.1" transform="scale(2)"/></svg>"##
    );
}

#[test]
fn test_source_ids_are_reescaped_on_output() {
    let source = r#"<svg><path id="a&amp;b" d="M0 0h4v4z"/></svg>"#;
    let svg = render_with_config(source, &Dataset::default(), compact()).expect("Should render");

    assert_eq!(
        svg,
        r##"<?xml version="1.0" encoding="UTF-8"?><svg xmlns="http://www.w3.org/2000/svg" width="140" height="140" viewBox="0 0 140 140"><path d="M0 0h4v4z" data-id="a&amp;b" fill="#cfd4d8" stroke="#ffffff" stroke-width="1.1"/></svg>"##
    );
}

#[test]
fn test_pretty_animated_document_layout() {
    let dataset = Dataset::from_str(
        r##"
palette = ["#ff0000", "#0000ff"]

[values]
a = 0
b = 10
"##,
    )
    .expect("Should parse dataset");
    let config = RenderConfig::new().with_animate(true);
    let svg = render_with_config(TWO_REGIONS, &dataset, config).expect("Should render");

    let expected = r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="140" height="140" viewBox="0 0 140 140">
  <path d="M0 0h4v4z" data-id="a" fill="#cfd4d8" stroke="#ffffff" stroke-width="1.1">
    <animate attributeName="fill" to="#ff0000" dur="1000ms" fill="freeze" calcMode="spline" keyTimes="0;1" keySplines="0.42 0 0.58 1"/>
  </path>
  <path d="M4 0h4v4z" data-id="b" fill="#cfd4d8" stroke="#ffffff" stroke-width="1.1">
    <animate attributeName="fill" to="#0000ff" dur="1000ms" fill="freeze" calcMode="spline" keyTimes="0;1" keySplines="0.42 0 0.58 1"/>
  </path>
</svg>"##;
    assert_eq!(svg, expected);
}
