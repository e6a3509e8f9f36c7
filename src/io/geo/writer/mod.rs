//! GEO document writer
//!
//! Serialization mirrors the reader hierarchy, one writer per block kind.
//! Output is canonical: per part the point table is sorted and renumbered,
//! sections are emitted in a fixed order and doubles carry nine fractional
//! digits, so writing a just-parsed document normalizes it.

mod bending_writer;
mod contour_writer;
mod element_writer;
mod header_writer;
mod line_writer;
mod part_writer;
mod point_writer;
mod subpart_writer;

use crate::document::GeoDocument;
use crate::io::geo::constants;

use line_writer::LineWriter;
use part_writer::PartWriter;

/// Output options for [`crate::io::geo::write`]
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Omit the trailing mirror field pair of a part when it is all zero,
    /// matching files produced by older tools
    pub skip_optional_mirror_flag: bool,
    /// Line terminator, `"\n"` unless overridden
    pub newline: String,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            skip_optional_mirror_flag: false,
            newline: "\n".to_string(),
        }
    }
}

pub(crate) struct GeoWriter;

impl GeoWriter {
    /// Serialize a complete document to GEO text
    pub fn write(document: &GeoDocument, options: &WriteOptions) -> String {
        let mut writer = LineWriter::new();

        header_writer::write(&document.header, &mut writer);
        PartWriter::new(&mut writer, options).write_list(&document.parts);
        writer.write_token_line(constants::FILE_END, None);

        writer.into_string(&options.newline)
    }
}
