//! Bending block reader

use crate::error::Result;
use crate::io::geo::constants;
use crate::io::geo::parser::Parser;
use crate::io::geo::reader::element_reader::ElementReader;
use crate::model::Bending;

pub(crate) struct BendingReader<'a> {
    parser: &'a mut Parser,
}

impl<'a> BendingReader<'a> {
    pub fn new(parser: &'a mut Parser) -> Self {
        Self { parser }
    }

    /// Read one bending block: classification fields, tools, an optional
    /// attribute index list, then `371` bend line sections until the bending
    /// block terminator
    pub fn read(&mut self, id: Option<String>) -> Result<Bending> {
        let bending_type = self.parser.read_int()?;
        self.parser.skip_whitespace()?;
        let method = self.parser.read_int()?;
        self.parser.skip_whitespace()?;
        let technique = self.parser.read_int_line()?;

        let angle = self.parser.read_double()?;
        self.parser.skip_whitespace()?;
        let pre_angle = self.parser.read_double_line()?;

        let start_radius = self.parser.read_double()?;
        self.parser.skip_whitespace()?;
        let radius_from_table = self.parser.read_double_line()?;

        let bending_factor = self.parser.read_double_line()?;

        let upper_tool = self.parser.read_text_line()?;
        let lower_tool = self.parser.read_text_line()?;

        let attributes = if !self.parser.is_section_char() {
            self.read_attributes()?
        } else {
            None
        };

        self.parser
            .read_expected_section_end_line(constants::SECTION_END)?;

        let mut bending_lines = Vec::new();
        loop {
            let (section, _) = self.parser.read_section_start_line()?;
            if section == constants::BENDING_ELEMENT_SECTION {
                bending_lines.extend(ElementReader::new(self.parser).read_list()?);
            } else {
                self.parser
                    .assert_section_end(constants::BENDING_BLOCK_END, &section)?;
                break;
            }
        }

        Ok(Bending {
            id,
            bending_type,
            method,
            technique,
            angle,
            pre_angle,
            start_radius,
            radius_from_table,
            bending_factor,
            upper_tool,
            lower_tool,
            attributes,
            bending_lines,
        })
    }

    /// Count line plus count index lines; a zero count reads as no list
    fn read_attributes(&mut self) -> Result<Option<Vec<i32>>> {
        let count = self.parser.read_int_line()?;
        if count > 0 {
            let mut attributes = Vec::with_capacity(count as usize);
            for _ in 0..count {
                attributes.push(self.parser.read_int_line()?);
            }
            Ok(Some(attributes))
        } else {
            Ok(None)
        }
    }
}
