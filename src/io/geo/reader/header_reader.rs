//! Header block reader

use crate::error::Result;
use crate::io::geo::constants;
use crate::io::geo::parser::Parser;
use crate::model::{GeoVersion, Header};

pub(crate) struct HeaderReader<'a> {
    parser: &'a mut Parser,
}

impl<'a> HeaderReader<'a> {
    pub fn new(parser: &'a mut Parser) -> Self {
        Self { parser }
    }

    /// Read the header block plus its optional sub-header, up to and
    /// including the header terminator
    pub fn read(&mut self, id: Option<String>) -> Result<Header> {
        let version_token = self.parser.read_text_line()?;
        let version = match GeoVersion::parse(&version_token) {
            Some(version) => version,
            None => return self.parser.fail(format!("Unknown GEO version {version_token}")),
        };

        let revision = self.parser.read_int_line()?;
        let date = self.parser.read_token_line()?;
        let min = self.parser.read_vector_line()?;
        let max = self.parser.read_vector_line()?;
        let area = self.parser.read_double_line()?;
        let unit = self.parser.read_int_line()?;
        let tolerance = self.parser.read_double_line()?;
        let is_3d = self.parser.read_int_line()?;
        let parts_count = self.parser.read_int_line()?;
        self.parser
            .read_expected_section_end_line(constants::SECTION_END)?;

        let mut header = Header {
            id,
            version,
            revision,
            date,
            min,
            max,
            area,
            unit,
            tolerance,
            is_3d,
            parts_count,
            ..Header::default()
        };

        let (mut section, sub_header_id) = self.parser.read_token_line_with_optional_id()?;
        if section == constants::SUBHEADER_SECTION {
            header.sub_header_id = sub_header_id;
            self.read_details(&mut header)?;
            self.parser
                .read_expected_section_end_line(constants::SECTION_END)?;
            section = self.parser.read_token_line()?;
        }
        self.parser
            .assert_section_end(constants::BLOCK_END, &section)?;
        Ok(header)
    }

    fn read_details(&mut self, header: &mut Header) -> Result<()> {
        header.name = Some(self.parser.read_text_line()?);
        header.description = Some(self.parser.read_text_line()?);
        header.customer = Some(self.parser.read_text_line()?);
        header.author = Some(self.parser.read_text_line()?);
        header.order_id = Some(self.parser.read_text_line()?);
        header.material = Some(self.parser.read_text_line()?);
        header.sheet_thickness = Some(self.parser.read_double_line()?);
        header.processing_rule = Some(self.parser.read_text_line()?);
        header.processing_table = Some(self.parser.read_text_line()?);
        header.machine_name = Some(self.parser.read_text_line()?);
        header.is_rotatable = Some(self.parser.read_int_line()?);
        header.is_good_for_mini_nests = Some(self.parser.read_int_line()?);
        header.repetition_count = Some(self.parser.read_int_line()?);

        if header.version.is_v1_03_or_later() {
            header.is_good_for_twinline = Some(self.parser.read_int_line()?);
            header.should_nest_in_blocks = Some(self.parser.read_int_line()?);
            header.columns_count_in_block = Some(self.parser.read_int_line()?);
            header.rows_count_in_block = Some(self.parser.read_int_line()?);
            header.rolling_direction = Some(self.parser.read_int_line()?);
            header.is_assembly_part = Some(self.parser.read_int_line()?);
            header.assembly_name = Some(self.parser.read_text_line()?);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER_1_03: &str = "1.03\n\
        0\n\
        19.05.2021\n\
        0.000000000 0.000000000 0.000000000\n\
        100.000000000 50.000000000 0.000000000\n\
        5000.000000000\n\
        1\n\
        0.001000000\n\
        0\n\
        1\n\
        ##~~\n\
        #~11\n\
        bracket\n\
        \n\
        ACME\n\
        jd\n\
        4711\n\
        Steel\n\
        2.000000000\n\
        \n\
        \n\
        \n\
        1\n\
        0\n\
        1\n\
        0\n\
        0\n\
        0\n\
        0\n\
        0\n\
        0\n\
        \n\
        ##~~\n\
        #~END\n\
        #~x\n";

    #[test]
    fn test_read_full_header() {
        let mut parser = Parser::new(HEADER_1_03);
        let header = HeaderReader::new(&mut parser).read(None).unwrap();
        assert_eq!(header.version, GeoVersion::V1_03);
        assert_eq!(header.date, "19.05.2021");
        assert_eq!(header.parts_count, 1);
        assert_eq!(header.name.as_deref(), Some("bracket"));
        assert_eq!(header.sheet_thickness, Some(2.0));
        assert_eq!(header.is_good_for_twinline, Some(0));
        assert_eq!(header.assembly_name.as_deref(), Some(""));
    }

    #[test]
    fn test_read_header_without_subheader() {
        let text = "1.03\n\
            0\n\
            19.05.2021\n\
            0.000000000 0.000000000 0.000000000\n\
            100.000000000 50.000000000 0.000000000\n\
            5000.000000000\n\
            1\n\
            0.001000000\n\
            0\n\
            0\n\
            ##~~\n\
            #~END\n\
            #~x\n";
        let mut parser = Parser::new(text);
        let header = HeaderReader::new(&mut parser).read(None).unwrap();
        assert_eq!(header.name, None);
        assert_eq!(header.sheet_thickness, None);
    }

    #[test]
    fn test_v1_01_has_no_extended_fields() {
        let text = HEADER_1_03
            .replace("1.03\n", "1.01\n")
            .replace("0\n0\n0\n0\n0\n0\n\n##~~\n#~END", "##~~\n#~END");
        let mut parser = Parser::new(&text);
        let header = HeaderReader::new(&mut parser).read(None).unwrap();
        assert_eq!(header.version, GeoVersion::V1_01);
        assert_eq!(header.repetition_count, Some(1));
        assert_eq!(header.is_good_for_twinline, None);
    }

    #[test]
    fn test_unknown_version_is_rejected() {
        let mut parser = Parser::new("1.05\nrest\n");
        let err = HeaderReader::new(&mut parser).read(None).unwrap_err();
        assert!(err.to_string().contains("Unknown GEO version 1.05"));
    }
}
