//! Shared test utilities for geo-tools-rs integration tests.

#![allow(dead_code)]

use geo_tools_rs::elements::{Element, ElementCommon, LineSegment};
use geo_tools_rs::model::{Contour, ContourType, Header, Part};
use geo_tools_rs::{GeoDocument, Vector3};

/// A canonical GEO document as the writer itself would emit it: sorted
/// point table, fixed section order, nine-digit doubles.  Reading and
/// rewriting this text must reproduce it byte for byte.
pub const CANONICAL_SAMPLE: &str = "#~1\n\
1.03\n\
0\n\
19.05.2021\n\
0.000000000 0.000000000 0.000000000\n\
100.000000000 50.000000000 0.000000000\n\
5000.000000000\n\
1\n\
0.001000000\n\
0\n\
1\n\
##~~\n\
#~11\n\
bracket\n\
\n\
ACME\n\
\n\
4711\n\
Steel\n\
2.000000000\n\
\n\
\n\
\n\
1\n\
0\n\
1\n\
0\n\
0\n\
0\n\
0\n\
0\n\
0\n\
\n\
##~~\n\
#~END\n\
#~3          P1\n\
bracket\n\
rev B\n\
laser\n\
0.000000000 0.000000000 1.000000000\n\
1.000000000 0.000000000 0.000000000 0.000000000\n\
0.000000000 1.000000000 0.000000000 0.000000000\n\
0.000000000 0.000000000 1.000000000 0.000000000\n\
0.000000000 0.000000000 0.000000000 1.000000000\n\
0.000000000 0.000000000 0.000000000\n\
100.000000000 50.000000000 0.000000000\n\
50.000000000 25.000000000 0.000000000\n\
5000.000000000\n\
1\n\
0\n\
0\n\
0\n\
0\n\
##~~\n\
#~30\n\
Order@4711\n\
#~TTINFO_END\n\
#~31\n\
P\n\
1\n\
0.000000000 0.000000000 0.000000000\n\
|~\n\
P\n\
2\n\
0.000000000 50.000000000 0.000000000\n\
|~\n\
P\n\
3\n\
100.000000000 0.000000000 0.000000000\n\
|~\n\
P\n\
4\n\
100.000000000 50.000000000 0.000000000\n\
|~\n\
##~~\n\
#~32\n\
CIR\n\
2 0\n\
1\n\
5.000000000\n\
|~\n\
##~~\n\
#~33\n\
outer\n\
1 24 0\n\
0\n\
0.000000000 0.000000000 1.000000000\n\
0.000000000 0.000000000 0.000000000\n\
100.000000000 50.000000000 0.000000000\n\
50.000000000 25.000000000 0.000000000\n\
5000.000000000\n\
0\n\
##~~\n\
#~331\n\
LIN\n\
1 0\n\
1 3\n\
|~\n\
LIN\n\
1 0\n\
3 4\n\
|~\n\
LIN\n\
1 0\n\
4 2\n\
|~\n\
LIN\n\
1 0\n\
2 1\n\
|~\n\
##~~\n\
#~KONT_END\n\
#~END\n\
#~EOF\n";

/// A rectangle part document built directly, with shuffled point keys so
/// writing exercises the sort-and-renumber path.
pub fn rectangle_document() -> GeoDocument {
    let mut document = GeoDocument::new();
    document.header = Header {
        date: "19.05.2021".to_string(),
        max: Vector3::new(100.0, 50.0, 0.0),
        area: 5000.0,
        unit: 1,
        tolerance: 0.001,
        parts_count: 1,
        ..Header::default()
    };

    let mut part = Part {
        name: "rectangle".to_string(),
        norm_direction: Vector3::UNIT_Z,
        max: Vector3::new(100.0, 50.0, 0.0),
        area: 5000.0,
        contours_count: 1,
        ..Part::default()
    };
    part.points.insert(17, Vector3::new(100.0, 50.0, 0.0));
    part.points.insert(5, Vector3::new(0.0, 0.0, 0.0));
    part.points.insert(99, Vector3::new(100.0, 0.0, 0.0));
    part.points.insert(23, Vector3::new(0.0, 50.0, 0.0));

    let segments = [(5, 99), (99, 17), (17, 23), (23, 5)]
        .into_iter()
        .map(|(start, end)| line(start, end))
        .collect();
    part.contours.push(Contour {
        info: "outer".to_string(),
        number: 1,
        contour_type: ContourType::Closed as i32,
        segments,
        ..Contour::default()
    });

    document.parts.push(part);
    document
}

pub fn line(start: i32, end: i32) -> Element {
    Element::Line(LineSegment {
        common: ElementCommon {
            color: 1,
            stroke: 0,
            ..ElementCommon::default()
        },
        start_point_index: start,
        end_point_index: end,
        is_chamfer: false,
    })
}
