//! Subpart block writer

use crate::elements::Element;
use crate::io::geo::constants;
use crate::io::geo::writer::contour_writer::ContourWriter;
use crate::io::geo::writer::element_writer::ElementWriter;
use crate::io::geo::writer::line_writer::LineWriter;
use crate::io::geo::writer::point_writer;
use crate::model::Subpart;

pub(crate) struct SubpartWriter<'a> {
    writer: &'a mut LineWriter,
}

impl<'a> SubpartWriter<'a> {
    pub fn new(writer: &'a mut LineWriter) -> Self {
        Self { writer }
    }

    /// Write one subpart block with its own renumbered point table
    pub fn write(&mut self, subpart: &Subpart) {
        self.writer
            .write_section_line(constants::SUBPART_SECTION, subpart.id.as_deref())
            .write_text_line(&subpart.name)
            .write_text_line(&subpart.info)
            .write_text_line(&subpart.number)
            .write_vector_line(&subpart.min)
            .write_vector_line(&subpart.max)
            .write_vector_line(&subpart.center_of_gravity)
            .write_double_line(subpart.area)
            .write_int_line(subpart.contours_count)
            .write_token_line(constants::SECTION_END, None);

        let point_index_map = point_writer::write_points(&subpart.points, self.writer);

        if !subpart.contours.is_empty() {
            ContourWriter::new(self.writer, &point_index_map).write_list(&subpart.contours);
        }
        self.write_elements(constants::ELEMENT_SECTION, &subpart.elements, &point_index_map);
        self.write_elements(
            constants::BENDING_SECTION,
            &subpart.bending_lines,
            &point_index_map,
        );

        self.writer
            .write_section_line(constants::SUBPART_BLOCK_END, None);
    }

    fn write_elements(
        &mut self,
        section_code: &str,
        elements: &[Element],
        point_index_map: &std::collections::HashMap<i32, i32>,
    ) {
        if !elements.is_empty() {
            ElementWriter::new(self.writer, point_index_map).write_list(section_code, elements);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{ElementCommon, LineSegment};
    use crate::types::Vector3;

    #[test]
    fn test_bend_lines_written_as_plain_element_section() {
        let mut subpart = Subpart {
            name: "flange".to_string(),
            ..Subpart::default()
        };
        subpart.points.insert(4, Vector3::new(0.0, 0.0, 0.0));
        subpart.points.insert(9, Vector3::new(1.0, 0.0, 0.0));
        subpart.bending_lines.push(Element::Line(LineSegment {
            common: ElementCommon {
                color: 6,
                stroke: 0,
                ..ElementCommon::default()
            },
            start_point_index: 4,
            end_point_index: 9,
            is_chamfer: false,
        }));

        let mut writer = LineWriter::new();
        SubpartWriter::new(&mut writer).write(&subpart);
        let out = writer.into_string("\n");
        assert!(out.contains("#~37\nLIN\n6 0\n1 2\n|~\n##~~\n"));
        assert!(out.ends_with("#~SUB_END\n"));
    }
}
