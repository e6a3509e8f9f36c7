//! Part block writer
//!
//! Emission order is canonical regardless of how the sections were ordered
//! on input: details, named attributes, points, element attributes, bend
//! attributes, elements, contours, copies, subparts, bendings.

use indexmap::IndexMap;

use crate::io::geo::constants;
use crate::io::geo::writer::bending_writer::BendingWriter;
use crate::io::geo::writer::contour_writer::ContourWriter;
use crate::io::geo::writer::element_writer::ElementWriter;
use crate::io::geo::writer::line_writer::LineWriter;
use crate::io::geo::writer::point_writer;
use crate::io::geo::writer::subpart_writer::SubpartWriter;
use crate::io::geo::writer::WriteOptions;
use crate::model::{Attribute, Part};

pub(crate) struct PartWriter<'a> {
    writer: &'a mut LineWriter,
    options: &'a WriteOptions,
}

impl<'a> PartWriter<'a> {
    pub fn new(writer: &'a mut LineWriter, options: &'a WriteOptions) -> Self {
        Self { writer, options }
    }

    pub fn write_list(&mut self, parts: &[Part]) {
        for part in parts {
            self.write(part);
        }
    }

    pub fn write(&mut self, part: &Part) {
        self.writer
            .write_section_line(constants::PART_SECTION, part.id.as_deref());
        self.write_details(part);
        self.write_part_attributes(part);
        let point_index_map = point_writer::write_points(&part.points, self.writer);
        self.write_indexed_attributes(
            constants::ELEMENT_ATTRIBUTE_SECTION,
            constants::ELEMENT_ATTRIBUTE_START,
            constants::ELEMENT_ATTRIBUTE_SECTION_END,
            &part.element_attributes,
        );
        self.write_indexed_attributes(
            constants::BEND_ATTRIBUTE_SECTION,
            constants::BEND_ATTRIBUTE_START,
            constants::BEND_ATTRIBUTE_SECTION_END,
            &part.bending_attributes,
        );

        if !part.elements.is_empty() {
            ElementWriter::new(self.writer, &point_index_map)
                .write_list(constants::ELEMENT_SECTION, &part.elements);
        }
        ContourWriter::new(self.writer, &point_index_map).write_list(&part.contours);
        self.write_copies(part);
        for subpart in &part.subparts {
            SubpartWriter::new(self.writer).write(subpart);
        }
        BendingWriter::new(self.writer, &point_index_map).write_list(&part.bendings);

        self.writer
            .write_section_line(constants::PART_BLOCK_END, None);
    }

    fn write_details(&mut self, part: &Part) {
        self.writer
            .write_text_line(&part.name)
            .write_text_line(&part.info)
            .write_text_line(&part.processing_rule)
            .write_vector_line(&part.norm_direction)
            .write_matrix_lines(&part.transformation)
            .write_vector_line(&part.min)
            .write_vector_line(&part.max)
            .write_vector_line(&part.center_of_gravity)
            .write_double_line(part.area)
            .write_int_line(part.contours_count)
            .write_int_line(part.copies_count)
            .write_int_line(part.subparts_count);

        if part.is_mirrored != 0 || !self.options.skip_optional_mirror_flag {
            self.writer
                .write_int_line(part.is_mirrored)
                .write_int_line(part.mirroring_index);
        }

        self.writer.write_token_line(constants::SECTION_END, None);
    }

    fn write_copies(&mut self, part: &Part) {
        for copy in &part.copies {
            self.writer
                .write_section_line(constants::COPIES_SECTION, copy.id.as_deref())
                .write_text_line(&copy.info)
                .write_int_line(copy.number)
                .write_matrix_lines(&copy.transformation);
            if !copy.attributes.is_empty() {
                self.writer
                    .write_token_line(constants::COPY_ATTRIBUTE_START, None);
                self.write_named_attributes(&copy.attributes);
                self.writer
                    .write_token_line(constants::COPY_ATTRIBUTE_END, None);
            }
            self.writer.write_token_line(constants::SECTION_END, None);
        }
    }

    fn write_part_attributes(&mut self, part: &Part) {
        if !part.attributes.is_empty() {
            self.writer
                .write_section_line(constants::ATTRIBUTE_SECTION, None);
            self.write_named_attributes(&part.attributes);
            self.writer
                .write_token_line(constants::ATTRIBUTE_SECTION_END, None);
        }
    }

    fn write_indexed_attributes(
        &mut self,
        section_code: &str,
        start_token: &str,
        end_token: &str,
        attributes: &IndexMap<i32, Attribute>,
    ) {
        if attributes.is_empty() {
            return;
        }
        self.writer.write_section_line(section_code, None);
        for attribute in attributes.values() {
            self.writer
                .write_token_line(start_token, None)
                .write_int_line(attribute.number)
                .write_int_line(attribute.attribute_type);
            for data in &attribute.data {
                self.writer.write_text_line(data);
            }
            self.writer.write_token_line(constants::ELEMENT_END, None);
        }
        self.writer.write_token_line(end_token, None);
    }

    fn write_named_attributes(&mut self, attributes: &IndexMap<String, String>) {
        for (name, value) in attributes {
            let line = format!("{name}{}{value}", constants::ATTRIBUTE_SEPARATOR);
            self.writer.write_text_line(&line);
        }
    }
}
