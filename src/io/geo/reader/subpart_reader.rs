//! Subpart block reader

use crate::error::Result;
use crate::io::geo::constants;
use crate::io::geo::parser::Parser;
use crate::io::geo::reader::contour_reader::ContourReader;
use crate::io::geo::reader::element_reader::ElementReader;
use crate::io::geo::reader::point_reader;
use crate::model::Subpart;

pub(crate) struct SubpartReader<'a> {
    parser: &'a mut Parser,
}

impl<'a> SubpartReader<'a> {
    pub fn new(parser: &'a mut Parser) -> Self {
        Self { parser }
    }

    /// Read one subpart block: details, then points / elements / contours /
    /// bend lines sections in any order until the subpart terminator
    pub fn read(&mut self, id: Option<String>) -> Result<Subpart> {
        let mut subpart = self.read_details(id)?;

        loop {
            let (section, id) = self.parser.read_section_start_line()?;
            match section.as_str() {
                constants::POINTS_SECTION => {
                    subpart.points = point_reader::read_points(self.parser)?;
                }
                constants::CONTOUR_SECTION => {
                    subpart
                        .contours
                        .push(ContourReader::new(self.parser).read(id)?);
                }
                constants::ELEMENT_SECTION => {
                    subpart.elements = ElementReader::new(self.parser).read_list()?;
                }
                constants::BENDING_SECTION => {
                    subpart.bending_lines = ElementReader::new(self.parser).read_list()?;
                }
                _ => {
                    self.parser
                        .assert_section_end(constants::SUBPART_BLOCK_END, &section)?;
                    break;
                }
            }
        }

        Ok(subpart)
    }

    fn read_details(&mut self, id: Option<String>) -> Result<Subpart> {
        let name = self.parser.read_text_line()?;
        let info = self.parser.read_text_line()?;
        let number = self.parser.read_text_line()?;
        let min = self.parser.read_vector_line()?;
        let max = self.parser.read_vector_line()?;
        let center_of_gravity = self.parser.read_vector_line()?;
        let area = self.parser.read_double_line()?;
        let contours_count = self.parser.read_int_line()?;
        self.parser
            .read_expected_section_end_line(constants::SECTION_END)?;
        Ok(Subpart {
            id,
            name,
            info,
            number,
            min,
            max,
            center_of_gravity,
            area,
            contours_count,
            ..Subpart::default()
        })
    }
}
