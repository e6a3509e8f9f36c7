//! Contour block writer

use std::collections::HashMap;

use crate::elements::Element;
use crate::io::geo::constants;
use crate::io::geo::writer::element_writer::ElementWriter;
use crate::io::geo::writer::line_writer::LineWriter;
use crate::model::Contour;

pub(crate) struct ContourWriter<'a> {
    writer: &'a mut LineWriter,
    point_index_map: &'a HashMap<i32, i32>,
}

impl<'a> ContourWriter<'a> {
    pub fn new(writer: &'a mut LineWriter, point_index_map: &'a HashMap<i32, i32>) -> Self {
        Self {
            writer,
            point_index_map,
        }
    }

    pub fn write_list(&mut self, contours: &[Contour]) {
        for contour in contours {
            self.write(contour);
        }
    }

    pub fn write(&mut self, contour: &Contour) {
        self.writer
            .write_section_line(constants::CONTOUR_SECTION, contour.id.as_deref())
            .write_text_line(&contour.info)
            .write_int_list_line(&[contour.number, contour.contour_type, contour.is_inner])
            .write_int_line(contour.inner_contours_count)
            .write_vector_line(&contour.orientation)
            .write_vector_line(&contour.min)
            .write_vector_line(&contour.max)
            .write_vector_line(&contour.center_of_gravity)
            .write_double_line(contour.area)
            .write_int_line(contour.parent_contour_number)
            .write_token_line(constants::SECTION_END, None);

        self.write_elements(constants::CONTOUR_ELEMENT_SECTION, &contour.segments);
        self.write_elements(
            constants::CONTOUR_OFFSET_ELEMENT_SECTION,
            &contour.offset_segments,
        );

        self.writer
            .write_section_line(constants::CONTOUR_BLOCK_END, None);
    }

    fn write_elements(&mut self, section_code: &str, segments: &[Element]) {
        if !segments.is_empty() {
            ElementWriter::new(self.writer, self.point_index_map).write_list(section_code, segments);
        }
    }
}
