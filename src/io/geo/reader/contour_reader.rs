//! Contour block reader

use crate::error::Result;
use crate::io::geo::constants;
use crate::io::geo::parser::Parser;
use crate::io::geo::reader::element_reader::ElementReader;
use crate::model::Contour;

pub(crate) struct ContourReader<'a> {
    parser: &'a mut Parser,
}

impl<'a> ContourReader<'a> {
    pub fn new(parser: &'a mut Parser) -> Self {
        Self { parser }
    }

    /// Read one contour block: details, then `331`/`332` element sections in
    /// any order and multiplicity, ending with the contour block terminator
    pub fn read(&mut self, id: Option<String>) -> Result<Contour> {
        let info = self.parser.read_text_line()?;

        let number = self.parser.read_int()?;
        self.parser.skip_whitespace()?;
        let contour_type = self.parser.read_int()?;
        self.parser.skip_whitespace()?;
        let is_inner = self.parser.read_int_line()?;

        let inner_contours_count = self.parser.read_int_line()?;

        let orientation = self.parser.read_vector_line()?;
        let min = self.parser.read_vector_line()?;
        let max = self.parser.read_vector_line()?;
        let center_of_gravity = self.parser.read_vector_line()?;
        let area = self.parser.read_double_line()?;

        let parent_contour_number = self.parser.read_int_line()?;

        self.parser
            .read_expected_section_end_line(constants::SECTION_END)?;

        let mut segments = Vec::new();
        let mut offset_segments = Vec::new();
        loop {
            let (section, _) = self.parser.read_section_start_line()?;
            if section == constants::CONTOUR_ELEMENT_SECTION {
                segments.extend(ElementReader::new(self.parser).read_list()?);
            } else if section == constants::CONTOUR_OFFSET_ELEMENT_SECTION {
                offset_segments.extend(ElementReader::new(self.parser).read_list()?);
            } else {
                self.parser
                    .assert_section_end(constants::CONTOUR_BLOCK_END, &section)?;
                break;
            }
        }

        Ok(Contour {
            id,
            info,
            number,
            contour_type,
            is_inner,
            inner_contours_count,
            orientation,
            min,
            max,
            center_of_gravity,
            area,
            parent_contour_number,
            segments,
            offset_segments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContourType;

    const CONTOUR: &str = "outer boundary\n\
        1 24 0\n\
        0\n\
        0.000000000 0.000000000 1.000000000\n\
        0.000000000 0.000000000 0.000000000\n\
        100.000000000 50.000000000 0.000000000\n\
        50.000000000 25.000000000 0.000000000\n\
        5000.000000000\n\
        0\n\
        ##~~\n\
        #~331\n\
        LIN\n\
        1 0\n\
        1 2\n\
        |~\n\
        ##~~\n\
        #~KONT_END\n\
        #~x\n";

    #[test]
    fn test_read_contour() {
        let mut parser = Parser::new(CONTOUR);
        let contour = ContourReader::new(&mut parser).read(None).unwrap();
        assert_eq!(contour.info, "outer boundary");
        assert_eq!(contour.number, 1);
        assert_eq!(contour.contour_type, ContourType::Closed as i32);
        assert!(contour.is_closed());
        assert_eq!(contour.segments.len(), 1);
        assert!(contour.offset_segments.is_empty());
    }

    #[test]
    fn test_unterminated_contour_block() {
        let text = CONTOUR.replace("#~KONT_END", "#~NOT_THE_END");
        let mut parser = Parser::new(&text);
        let err = ContourReader::new(&mut parser).read(None).unwrap_err();
        assert!(err.to_string().contains("KONT_END"));
    }
}
