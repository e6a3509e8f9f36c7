//! GEO format tokens and section codes

pub const SECTION_CHAR: char = '#';
pub const ELEMENT_END_CHAR: char = '|';

pub const SECTION_TOKEN: &str = "#~";
pub const SECTION_END: &str = "##~~";
pub const BLOCK_END: &str = "#~END";
pub const FILE_END: &str = "#~EOF";

pub const HEADER_SECTION: &str = "1";
pub const SUBHEADER_SECTION: &str = "#~11";

pub const PART_SECTION: &str = "3";
pub const PART_BLOCK_END: &str = "END";

pub const ATTRIBUTE_SECTION: &str = "30";
pub const ATTRIBUTE_SEPARATOR: char = '@';
pub const ATTRIBUTE_SECTION_END: &str = "#~TTINFO_END";

pub const POINTS_SECTION: &str = "31";
pub const POINT_START: &str = "P";
pub const POINT_END: &str = "|~";

pub const ELEMENT_SECTION: &str = "32";
pub const ELEMENT_END: &str = "|~";

pub const CONTOUR_SECTION: &str = "33";
pub const CONTOUR_ELEMENT_SECTION: &str = "331";
pub const CONTOUR_OFFSET_ELEMENT_SECTION: &str = "332";
pub const CONTOUR_BLOCK_END: &str = "KONT_END";

pub const COPIES_SECTION: &str = "34";
pub const COPY_ATTRIBUTE_START: &str = "#~TEXTINFO";
pub const COPY_ATTRIBUTE_END: &str = "###~TEXTINFO";

pub const SUBPART_SECTION: &str = "35";
pub const SUBPART_BLOCK_END: &str = "SUB_END";

pub const ELEMENT_ATTRIBUTE_SECTION: &str = "36";
pub const ELEMENT_ATTRIBUTE_START: &str = "ATT";
pub const ELEMENT_ATTRIBUTE_SECTION_END: &str = "#~ATTRIBUTE_END";

pub const BENDING_SECTION: &str = "37";
pub const BENDING_ELEMENT_SECTION: &str = "371";
pub const BENDING_BLOCK_END: &str = "BIEG_END";

pub const BEND_ATTRIBUTE_SECTION: &str = "38";
pub const BEND_ATTRIBUTE_START: &str = "BATT";
pub const BEND_ATTRIBUTE_SECTION_END: &str = "#~BEND_ATTRIBUTE_END";
