//! Integration tests for GEO reading and writing

mod common;

use common::{rectangle_document, CANONICAL_SAMPLE};
use geo_tools_rs::elements::Element;
use geo_tools_rs::io::geo::{self, WriteOptions};
use geo_tools_rs::model::GeoVersion;
use geo_tools_rs::Vector3;
use proptest::prelude::*;

#[test]
fn test_read_canonical_sample() {
    let document = geo::read(CANONICAL_SAMPLE).unwrap();

    assert_eq!(document.header.version, GeoVersion::V1_03);
    assert_eq!(document.header.parts_count, 1);
    assert_eq!(document.header.name.as_deref(), Some("bracket"));
    assert_eq!(document.header.sheet_thickness, Some(2.0));
    assert_eq!(document.header.repetition_count, Some(1));

    assert_eq!(document.parts.len(), 1);
    let part = &document.parts[0];
    assert_eq!(part.id.as_deref(), Some("P1"));
    assert_eq!(part.name, "bracket");
    assert_eq!(part.attributes["Order"], "4711");
    assert_eq!(part.points.len(), 4);
    assert_eq!(part.points[&3], Vector3::new(100.0, 0.0, 0.0));
    assert_eq!(part.elements.len(), 1);
    assert_eq!(part.contours.len(), 1);
    assert_eq!(part.contours[0].segments.len(), 4);
    assert!(part.contours[0].is_closed());
}

#[test]
fn test_canonical_sample_rewrites_identically() {
    let document = geo::read(CANONICAL_SAMPLE).unwrap();
    let written = geo::write(&document, &WriteOptions::default());
    assert_eq!(written, CANONICAL_SAMPLE);
}

#[test]
fn test_write_sorts_and_renumbers_points() {
    let document = rectangle_document();
    let written = geo::write(&document, &WriteOptions::default());

    let reread = geo::read(&written).unwrap();
    let part = &reread.parts[0];
    let keys: Vec<i32> = part.points.keys().copied().collect();
    assert_eq!(keys, vec![1, 2, 3, 4]);
    assert_eq!(part.points[&1], Vector3::new(0.0, 0.0, 0.0));
    assert_eq!(part.points[&2], Vector3::new(0.0, 50.0, 0.0));
    assert_eq!(part.points[&3], Vector3::new(100.0, 0.0, 0.0));
    assert_eq!(part.points[&4], Vector3::new(100.0, 50.0, 0.0));

    // Segment references follow the renumbering: the original (5, 99) edge
    // from (0,0) to (100,0) must now reference 1 and 3.
    match &part.contours[0].segments[0] {
        Element::Line(line) => {
            assert_eq!(line.start_point_index, 1);
            assert_eq!(line.end_point_index, 3);
        }
        other => panic!("expected line, got {other:?}"),
    }
}

#[test]
fn test_write_is_idempotent() {
    let once = geo::write(&rectangle_document(), &WriteOptions::default());
    let twice = geo::write(&geo::read(&once).unwrap(), &WriteOptions::default());
    assert_eq!(once, twice);
}

#[test]
fn test_crlf_input_and_output() {
    let crlf_input = CANONICAL_SAMPLE.replace('\n', "\r\n");
    let document = geo::read(&crlf_input).unwrap();
    let options = WriteOptions {
        newline: "\r\n".to_string(),
        ..WriteOptions::default()
    };
    assert_eq!(geo::write(&document, &options), crlf_input);
}

#[test]
fn test_skip_optional_mirror_flag() {
    let document = rectangle_document();
    let options = WriteOptions {
        skip_optional_mirror_flag: true,
        ..WriteOptions::default()
    };
    let written = geo::write(&document, &options);

    // Still readable, with the pair defaulting to zero
    let reread = geo::read(&written).unwrap();
    assert_eq!(reread.parts[0].is_mirrored, 0);
    assert_eq!(reread.parts[0].mirroring_index, 0);

    let default_output = geo::write(&document, &WriteOptions::default());
    assert_eq!(default_output.lines().count(), written.lines().count() + 2);
}

#[test]
fn test_unsupported_version_is_rejected() {
    let text = CANONICAL_SAMPLE.replace("1.03\n", "1.05\n");
    let err = geo::read(&text).unwrap_err();
    assert!(err.to_string().contains("Unknown GEO version 1.05"));
    assert!(err.line().is_some());
}

#[test]
fn test_unknown_element_discriminator_is_rejected() {
    let text = CANONICAL_SAMPLE.replace("CIR\n", "BLOB\n");
    let err = geo::read(&text).unwrap_err();
    assert!(err.to_string().contains("Unknown element type \"BLOB\""));
}

#[test]
fn test_malformed_named_attribute_is_rejected() {
    let text = CANONICAL_SAMPLE.replace("Order@4711\n", "no separator here\n");
    let err = geo::read(&text).unwrap_err();
    assert!(err
        .to_string()
        .contains("Invalid attribute 'no separator here'"));
}

#[test]
fn test_truncated_input_reports_end_of_input() {
    let cut = CANONICAL_SAMPLE.find("#~31\n").unwrap() + "#~31\n".len();
    let err = geo::read(&CANONICAL_SAMPLE[..cut]).unwrap_err();
    assert!(err.to_string().contains("unexpected end of input"));
}

#[test]
fn test_error_message_format() {
    let err = geo::read("#~2\nrest\n").unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("ERROR in line "), "{message}");
    assert!(message.contains("Expected section \"1\", but found \"2\""));
}

proptest! {
    /// Every double in the output carries exactly nine fractional digits,
    /// whatever the coordinate values are.
    #[test]
    fn test_doubles_always_have_nine_digits(x in -1e6..1e6f64, y in -1e6..1e6f64) {
        let mut document = rectangle_document();
        document.parts[0].points.insert(42, Vector3::new(x, y, 0.0));
        let written = geo_tools_rs::io::geo::write(&document, &WriteOptions::default());
        for line in written.lines() {
            for token in line.split(' ') {
                if token.parse::<f64>().is_ok() {
                    if let Some(dot) = token.find('.') {
                        prop_assert_eq!(token.len() - dot - 1, 9, "token {}", token);
                    }
                }
            }
        }
    }
}
