//! Header block writer

use crate::io::geo::constants;
use crate::io::geo::writer::line_writer::LineWriter;
use crate::model::Header;

/// Write the header plus sub-header blocks.  The sub-header is always
/// emitted; fields the document never carried fall back to empty string or
/// zero defaults.
pub(crate) fn write(header: &Header, writer: &mut LineWriter) {
    writer
        .write_section_line(constants::HEADER_SECTION, header.id.as_deref())
        .write_token_line(header.version.as_str(), None)
        .write_int_line(header.revision)
        .write_token_line(&header.date, None)
        .write_vector_line(&header.min)
        .write_vector_line(&header.max)
        .write_double_line(header.area)
        .write_int_line(header.unit)
        .write_double_line(header.tolerance)
        .write_int_line(header.is_3d)
        .write_int_line(header.parts_count)
        .write_token_line(constants::SECTION_END, None);

    write_details(header, writer);

    writer.write_token_line(constants::BLOCK_END, None);
}

fn write_details(header: &Header, writer: &mut LineWriter) {
    writer
        .write_token_line(constants::SUBHEADER_SECTION, header.sub_header_id.as_deref())
        .write_text_line(header.name.as_deref().unwrap_or(""))
        .write_text_line(header.description.as_deref().unwrap_or(""))
        .write_text_line(header.customer.as_deref().unwrap_or(""))
        .write_text_line(header.author.as_deref().unwrap_or(""))
        .write_text_line(header.order_id.as_deref().unwrap_or(""))
        .write_text_line(header.material.as_deref().unwrap_or(""))
        .write_double_line(header.sheet_thickness.unwrap_or(0.0))
        .write_text_line(header.processing_rule.as_deref().unwrap_or(""))
        .write_text_line(header.processing_table.as_deref().unwrap_or(""))
        .write_text_line(header.machine_name.as_deref().unwrap_or(""))
        .write_int_line(header.is_rotatable.unwrap_or(0))
        .write_int_line(header.is_good_for_mini_nests.unwrap_or(0))
        .write_int_line(header.repetition_count.unwrap_or(0));

    if header.version.is_v1_03_or_later() {
        writer
            .write_int_line(header.is_good_for_twinline.unwrap_or(0))
            .write_int_line(header.should_nest_in_blocks.unwrap_or(0))
            .write_int_line(header.columns_count_in_block.unwrap_or(0))
            .write_int_line(header.rows_count_in_block.unwrap_or(0))
            .write_int_line(header.rolling_direction.unwrap_or(0))
            .write_int_line(header.is_assembly_part.unwrap_or(0))
            .write_text_line(header.assembly_name.as_deref().unwrap_or(""));
    }

    writer.write_token_line(constants::SECTION_END, None);
}
