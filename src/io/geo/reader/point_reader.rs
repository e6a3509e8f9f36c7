//! Point table reader

use indexmap::IndexMap;

use crate::error::Result;
use crate::io::geo::constants;
use crate::io::geo::parser::Parser;
use crate::types::Vector3;

/// Read point records until the next section marker, then the table end
/// token.  A repeated key overwrites the earlier coordinate but keeps its
/// original position in the table.
pub(crate) fn read_points(parser: &mut Parser) -> Result<IndexMap<i32, Vector3>> {
    let mut points = IndexMap::new();
    while !parser.is_section_char() {
        parser.read_expected_token_line(constants::POINT_START, "point")?;
        let number = parser.read_int_line()?;
        let vector = parser.read_vector_line()?;
        points.insert(number, vector);
        parser.read_expected_section_end_line(constants::POINT_END)?;
    }
    parser.read_expected_section_end_line(constants::SECTION_END)?;
    Ok(points)
}
