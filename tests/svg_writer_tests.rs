//! Integration tests for SVG rendering

mod common;

use common::{rectangle_document, CANONICAL_SAMPLE};
use geo_tools_rs::io::geo;
use geo_tools_rs::io::svg::{PartContent, SvgOptions, SvgWriter};
use geo_tools_rs::model::PartCopy;

#[test]
fn test_render_parsed_document() {
    let document = geo::read(CANONICAL_SAMPLE).unwrap();
    let svg = SvgWriter::new().to_svg(&document, &SvgOptions::default());

    assert!(svg.starts_with("<svg viewBox=\"0 -50 100 50\""));
    assert!(svg.contains("<symbol id=\"point\""));
    assert!(svg.contains("<g id=\"bracket:1\">"));
    assert!(svg.contains("<use href=\"#bracket:1\" />"));

    // The rectangle contour is stitched into one closed path
    assert!(svg.contains("d=\"M0 0 L100 0 L100 -50 L0 -50 L0 0 Z\""));
    assert!(svg.contains("<path fill=\"white\" stroke=\"black\""));

    // The free circle element renders standalone in its own color
    assert!(svg.contains("<circle fill=\"none\" stroke=\"red\" cx=\"0\" cy=\"0\" r=\"5\" />"));
}

#[test]
fn test_copies_reference_the_part_definition() {
    let mut document = rectangle_document();
    let mut copy = PartCopy::default();
    copy.transformation.rows[3][0] = 150.0;
    document.parts[0].copies.push(copy);

    let svg = SvgWriter::new().to_svg(&document, &SvgOptions::default());
    assert!(svg.contains("<use href=\"#rectangle:1\" />"));
    assert!(svg.contains("<use href=\"#rectangle:1\" transform=\"matrix(1, 0, 0, 1, 150, 0)\" />"));
}

#[test]
fn test_custom_palette() {
    let document = rectangle_document();
    let mut writer = SvgWriter::new();
    writer.set_colors(&["#000".to_string(), "#fff".to_string()]);
    let svg = writer.to_svg(&document, &SvgOptions::default());
    assert!(svg.contains("<g stroke=\"#fff\""));
    assert!(svg.contains("<path fill=\"#000\" stroke=\"#fff\""));
}

#[test]
fn test_prepend_and_append_part_content() {
    let document = rectangle_document();
    let options = SvgOptions {
        prepend_part: Some(PartContent::Literal("<!-- before -->".to_string())),
        append_part: Some(PartContent::Generate(Box::new(|part| {
            Some(format!("<title>{}</title>", part.name))
        }))),
        ..SvgOptions::default()
    };
    let svg = SvgWriter::new().to_svg(&document, &options);
    assert!(svg.contains("<g id=\"rectangle:1\"><!-- before -->"));
    assert!(svg.contains("<title>rectangle</title></g>"));
}

#[test]
fn test_get_defs_keyed_by_part_name() {
    let document = rectangle_document();
    let writer = SvgWriter::new();
    let defs = writer.get_defs(&document.parts, &SvgOptions::default());
    assert!(defs.symbol_defs.contains_key("point"));
    assert!(defs.part_defs.contains_key("rectangle"));
    assert!(defs.part_defs["rectangle"].starts_with("<g id=\"rectangle\">"));
}
