//! Point table writer
//!
//! The table is renumbered on write: points sort by x then y ascending and
//! receive fresh indices starting at 1.  The returned map translates the
//! document's point keys to the written indices and is applied to every
//! point reference serialized afterwards.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::io::geo::constants;
use crate::io::geo::writer::line_writer::LineWriter;
use crate::types::Vector3;

pub(crate) fn write_points(
    points: &IndexMap<i32, Vector3>,
    writer: &mut LineWriter,
) -> HashMap<i32, i32> {
    let mut sorted: Vec<(&i32, &Vector3)> = points.iter().collect();
    // Stable sort: equal coordinates keep table insertion order
    sorted.sort_by(|(_, a), (_, b)| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));

    let point_index_map = sorted
        .iter()
        .enumerate()
        .map(|(i, (key, _))| (**key, i as i32 + 1))
        .collect();

    if !sorted.is_empty() {
        writer.write_section_line(constants::POINTS_SECTION, None);
        for (i, (_, point)) in sorted.iter().enumerate() {
            writer
                .write_token_line(constants::POINT_START, None)
                .write_int_line(i as i32 + 1)
                .write_vector_line(point)
                .write_token_line(constants::POINT_END, None);
        }
        writer.write_token_line(constants::SECTION_END, None);
    }

    point_index_map
}
