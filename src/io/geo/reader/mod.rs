//! GEO document reader
//!
//! One reader struct per block kind, each driving the shared [`Parser`]
//! cursor.  [`GeoReader::read`] is the entry point: a header section
//! followed by part sections until the file end token.

mod bending_reader;
mod contour_reader;
mod element_reader;
mod header_reader;
mod part_reader;
mod point_reader;
mod subpart_reader;

use crate::document::GeoDocument;
use crate::error::Result;
use crate::io::geo::constants;
use crate::io::geo::parser::Parser;

use header_reader::HeaderReader;
use part_reader::PartReader;

pub(crate) struct GeoReader;

impl GeoReader {
    /// Parse a complete GEO document from text
    pub fn read(content: &str) -> Result<GeoDocument> {
        let mut parser = Parser::new(content);

        let id = parser.read_expected_section_start_line(constants::HEADER_SECTION)?;
        let header = HeaderReader::new(&mut parser).read(id)?;

        let part_section = format!("{}{}", constants::SECTION_TOKEN, constants::PART_SECTION);
        let mut parts = Vec::new();
        loop {
            let section = parser.read_token()?;
            if section == constants::FILE_END {
                break;
            }
            parser.ensure(
                section == part_section,
                format!("Expected section \"{part_section}\", but found \"{section}\""),
            )?;
            parser.skip_whitespace()?;
            let id = parser.read_token()?;
            parser.skip_whitespace()?;
            parser.read_new_line()?;

            let id = if id.is_empty() { None } else { Some(id) };
            parts.push(PartReader::new(&mut parser).read(id)?);
        }

        Ok(GeoDocument { header, parts })
    }
}
