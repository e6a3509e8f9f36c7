//! Part block reader
//!
//! Dispatches on the numeric section codes below a `#~3` part until the part
//! terminator.  Sections may repeat; contours, copies, subparts and bendings
//! accumulate, the other sections replace.

use indexmap::IndexMap;

use crate::error::Result;
use crate::io::geo::constants;
use crate::io::geo::parser::Parser;
use crate::io::geo::reader::bending_reader::BendingReader;
use crate::io::geo::reader::contour_reader::ContourReader;
use crate::io::geo::reader::element_reader::ElementReader;
use crate::io::geo::reader::point_reader;
use crate::io::geo::reader::subpart_reader::SubpartReader;
use crate::model::{Attribute, Part, PartCopy};

pub(crate) struct PartReader<'a> {
    parser: &'a mut Parser,
}

impl<'a> PartReader<'a> {
    pub fn new(parser: &'a mut Parser) -> Self {
        Self { parser }
    }

    pub fn read(&mut self, id: Option<String>) -> Result<Part> {
        let mut part = self.read_details(id)?;

        loop {
            let (section, id) = self.parser.read_section_start_line()?;
            match section.as_str() {
                constants::ATTRIBUTE_SECTION => self.read_part_attributes(&mut part)?,
                constants::POINTS_SECTION => {
                    part.points = point_reader::read_points(self.parser)?;
                }
                constants::ELEMENT_SECTION => {
                    part.elements = ElementReader::new(self.parser).read_list()?;
                }
                constants::CONTOUR_SECTION => {
                    part.contours.push(ContourReader::new(self.parser).read(id)?);
                }
                constants::COPIES_SECTION => self.read_copy(&mut part, id)?,
                constants::SUBPART_SECTION => {
                    part.subparts.push(SubpartReader::new(self.parser).read(id)?);
                }
                constants::ELEMENT_ATTRIBUTE_SECTION => self.read_element_attributes(&mut part)?,
                constants::BENDING_SECTION => {
                    part.bendings.push(BendingReader::new(self.parser).read(id)?);
                }
                constants::BEND_ATTRIBUTE_SECTION => self.read_bend_attributes(&mut part)?,
                _ => {
                    self.parser
                        .assert_section_end(constants::PART_BLOCK_END, &section)?;
                    return Ok(part);
                }
            }
        }
    }

    fn read_details(&mut self, id: Option<String>) -> Result<Part> {
        let name = self.parser.read_text_line()?;
        let info = self.parser.read_text_line()?;
        let processing_rule = self.parser.read_text_line()?;
        let norm_direction = self.parser.read_vector_line()?;
        let transformation = self.parser.read_matrix_lines()?;
        let min = self.parser.read_vector_line()?;
        let max = self.parser.read_vector_line()?;
        let center_of_gravity = self.parser.read_vector_line()?;
        let area = self.parser.read_double_line()?;
        let contours_count = self.parser.read_int_line()?;
        let copies_count = self.parser.read_int_line()?;
        let subparts_count = self.parser.read_int_line()?;

        // Trailing mirror pair is absent in older files
        let mut is_mirrored = 0;
        let mut mirroring_index = 0;
        if !self.parser.is_section_char() {
            is_mirrored = self.parser.read_int_line()?;
            mirroring_index = self.parser.read_int_line()?;
        }

        self.parser
            .read_expected_section_end_line(constants::SECTION_END)?;

        Ok(Part {
            id,
            name,
            info,
            processing_rule,
            norm_direction,
            transformation,
            min,
            max,
            center_of_gravity,
            area,
            contours_count,
            copies_count,
            subparts_count,
            is_mirrored,
            mirroring_index,
            ..Part::default()
        })
    }

    fn read_copy(&mut self, part: &mut Part, id: Option<String>) -> Result<()> {
        let info = self.parser.read_text_line()?;
        let number = self.parser.read_int_line()?;
        let transformation = self.parser.read_matrix_lines()?;

        self.parser
            .read_expected_token_line(constants::COPY_ATTRIBUTE_START, "section start")?;
        let attributes = self.read_named_attributes(constants::COPY_ATTRIBUTE_END)?;

        part.copies.push(PartCopy {
            id,
            info,
            number,
            transformation,
            attributes,
        });

        self.parser
            .read_expected_section_end_line(constants::SECTION_END)
    }

    fn read_part_attributes(&mut self, part: &mut Part) -> Result<()> {
        part.attributes = self.read_named_attributes(constants::ATTRIBUTE_SECTION_END)?;
        Ok(())
    }

    fn read_element_attributes(&mut self, part: &mut Part) -> Result<()> {
        while !self.parser.is_section_char() {
            self.parser
                .read_expected_token_line(constants::ELEMENT_ATTRIBUTE_START, "attribute")?;
            let attribute = self.read_indexed_attribute()?;
            part.element_attributes.insert(attribute.number, attribute);
        }
        self.parser
            .read_expected_section_end_line(constants::ELEMENT_ATTRIBUTE_SECTION_END)
    }

    fn read_bend_attributes(&mut self, part: &mut Part) -> Result<()> {
        while !self.parser.is_section_char() {
            self.parser
                .read_expected_token_line(constants::BEND_ATTRIBUTE_START, "attribute")?;
            let attribute = self.read_indexed_attribute()?;
            part.bending_attributes.insert(attribute.number, attribute);
        }
        self.parser
            .read_expected_section_end_line(constants::BEND_ATTRIBUTE_SECTION_END)
    }

    fn read_indexed_attribute(&mut self) -> Result<Attribute> {
        let number = self.parser.read_int_line()?;
        let attribute_type = self.parser.read_int_line()?;
        let mut data = Vec::new();
        loop {
            let line = self.parser.read_text_line()?;
            if line == constants::ELEMENT_END {
                break;
            }
            data.push(line);
        }
        Ok(Attribute {
            number,
            attribute_type,
            data,
        })
    }

    /// `name@value` lines up to the end token; the separator must not be the
    /// first character, a repeated name overwrites
    fn read_named_attributes(&mut self, end_token: &str) -> Result<IndexMap<String, String>> {
        let mut attributes = IndexMap::new();
        loop {
            let line = self.parser.read_text_line()?;
            if line == end_token {
                break;
            }

            let i = line.find(constants::ATTRIBUTE_SEPARATOR).unwrap_or(0);
            self.parser
                .ensure(i > 0, format!("Invalid attribute '{line}'"))?;

            attributes.insert(line[..i].to_string(), line[i + 1..].to_string());
        }
        Ok(attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAILS: &str = "bracket\n\
        rev B\n\
        laser\n\
        0.000000000 0.000000000 1.000000000\n\
        1.000000000 0.000000000 0.000000000 0.000000000\n\
        0.000000000 1.000000000 0.000000000 0.000000000\n\
        0.000000000 0.000000000 1.000000000 0.000000000\n\
        0.000000000 0.000000000 0.000000000 1.000000000\n\
        0.000000000 0.000000000 0.000000000\n\
        100.000000000 50.000000000 0.000000000\n\
        50.000000000 25.000000000 0.000000000\n\
        5000.000000000\n\
        1\n\
        0\n\
        0\n\
        0\n\
        0\n";

    fn part_text(sections: &str) -> String {
        format!("{DETAILS}##~~\n{sections}#~END\n#~x\n")
    }

    #[test]
    fn test_read_part_details() {
        let text = part_text("");
        let mut parser = Parser::new(&text);
        let part = PartReader::new(&mut parser).read(None).unwrap();
        assert_eq!(part.name, "bracket");
        assert_eq!(part.info, "rev B");
        assert_eq!(part.area, 5000.0);
        assert_eq!(part.contours_count, 1);
        assert_eq!(part.is_mirrored, 0);
    }

    #[test]
    fn test_read_part_without_mirror_pair() {
        let text = part_text("").replace("0\n0\n0\n0\n##~~", "0\n0\n##~~");
        let mut parser = Parser::new(&text);
        let part = PartReader::new(&mut parser).read(None).unwrap();
        assert_eq!(part.is_mirrored, 0);
        assert_eq!(part.mirroring_index, 0);
    }

    #[test]
    fn test_read_named_attributes() {
        let text = part_text("#~30\nOrder@4711\nMaterial@Steel\nOrder@4712\n#~TTINFO_END\n");
        let mut parser = Parser::new(&text);
        let part = PartReader::new(&mut parser).read(None).unwrap();
        assert_eq!(part.attributes.len(), 2);
        assert_eq!(part.attributes["Order"], "4712");
        assert_eq!(part.attributes["Material"], "Steel");
    }

    #[test]
    fn test_invalid_named_attribute_is_rejected() {
        let text = part_text("#~30\n@broken\n#~TTINFO_END\n");
        let mut parser = Parser::new(&text);
        let err = PartReader::new(&mut parser).read(None).unwrap_err();
        assert!(err.to_string().contains("Invalid attribute"));
    }

    #[test]
    fn test_read_element_attributes() {
        let sections = "#~36\nATT\n3\n1\nfirst data line\nsecond\n|~\n#~ATTRIBUTE_END\n";
        let text = part_text(sections);
        let mut parser = Parser::new(&text);
        let part = PartReader::new(&mut parser).read(None).unwrap();
        let attribute = &part.element_attributes[&3];
        assert_eq!(attribute.attribute_type, 1);
        assert_eq!(attribute.data, vec!["first data line", "second"]);
    }

    #[test]
    fn test_repeated_attribute_number_overwrites() {
        let sections = "#~36\n\
            ATT\n\
            3\n\
            1\n\
            first\n\
            |~\n\
            ATT\n\
            3\n\
            2\n\
            second\n\
            |~\n\
            #~ATTRIBUTE_END\n";
        let text = part_text(sections);
        let mut parser = Parser::new(&text);
        let part = PartReader::new(&mut parser).read(None).unwrap();
        assert_eq!(part.element_attributes.len(), 1);
        let attribute = &part.element_attributes[&3];
        assert_eq!(attribute.attribute_type, 2);
        assert_eq!(attribute.data, vec!["second"]);
    }

    #[test]
    fn test_read_copy() {
        let sections = "#~34          K1\n\
            copy of bracket\n\
            2\n\
            1.000000000 0.000000000 0.000000000 0.000000000\n\
            0.000000000 1.000000000 0.000000000 0.000000000\n\
            0.000000000 0.000000000 1.000000000 0.000000000\n\
            10.000000000 20.000000000 0.000000000 1.000000000\n\
            #~TEXTINFO\n\
            Pos@7\n\
            ###~TEXTINFO\n\
            ##~~\n";
        let text = part_text(sections);
        let mut parser = Parser::new(&text);
        let part = PartReader::new(&mut parser).read(None).unwrap();
        assert_eq!(part.copies.len(), 1);
        let copy = &part.copies[0];
        assert_eq!(copy.id.as_deref(), Some("K1"));
        assert_eq!(copy.number, 2);
        assert_eq!(copy.attributes["Pos"], "7");
        assert_eq!(copy.transformation.rows[3][0], 10.0);
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        let text = part_text("#~99\n");
        let mut parser = Parser::new(&text);
        let err = PartReader::new(&mut parser).read(None).unwrap_err();
        assert!(err.to_string().contains("Expected section end"));
    }
}
