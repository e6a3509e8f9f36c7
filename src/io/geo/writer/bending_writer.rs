//! Bending block writer

use std::collections::HashMap;

use crate::io::geo::constants;
use crate::io::geo::writer::element_writer::ElementWriter;
use crate::io::geo::writer::line_writer::LineWriter;
use crate::model::Bending;

pub(crate) struct BendingWriter<'a> {
    writer: &'a mut LineWriter,
    point_index_map: &'a HashMap<i32, i32>,
}

impl<'a> BendingWriter<'a> {
    pub fn new(writer: &'a mut LineWriter, point_index_map: &'a HashMap<i32, i32>) -> Self {
        Self {
            writer,
            point_index_map,
        }
    }

    pub fn write_list(&mut self, bendings: &[Bending]) {
        for bending in bendings {
            self.write(bending);
        }
    }

    pub fn write(&mut self, bending: &Bending) {
        self.writer
            .write_section_line(constants::BENDING_SECTION, bending.id.as_deref());
        self.write_details(bending);
        self.write_attributes(bending);
        self.writer.write_token_line(constants::SECTION_END, None);

        // The bend line section is present even when empty
        ElementWriter::new(self.writer, self.point_index_map)
            .write_list(constants::BENDING_ELEMENT_SECTION, &bending.bending_lines);

        self.writer
            .write_section_line(constants::BENDING_BLOCK_END, None);
    }

    fn write_details(&mut self, bending: &Bending) {
        self.writer
            .write_int_list_line(&[bending.bending_type, bending.method, bending.technique])
            .write_double_list_line(&[bending.angle, bending.pre_angle])
            .write_double_list_line(&[bending.start_radius, bending.radius_from_table])
            .write_double_line(bending.bending_factor)
            .write_text_line(&bending.upper_tool)
            .write_text_line(&bending.lower_tool);
    }

    fn write_attributes(&mut self, bending: &Bending) {
        if let Some(attributes) = &bending.attributes {
            if !attributes.is_empty() {
                self.writer.write_int_line(attributes.len() as i32);
                for attribute_index in attributes {
                    self.writer.write_int_line(*attribute_index);
                }
            }
        }
    }
}
