//! GEO file header

use crate::types::Vector3;

/// Recognized GEO format versions.  Any other version token is a hard parse
/// failure; fields after `repetition_count` only exist from 1.03 on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeoVersion {
    V1_01,
    V1_02,
    #[default]
    V1_03,
}

impl GeoVersion {
    /// The version written for newly constructed documents
    pub const CURRENT: GeoVersion = GeoVersion::V1_03;

    /// Parse a version token; `None` for unrecognized versions
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "1.01" => Some(GeoVersion::V1_01),
            "1.02" => Some(GeoVersion::V1_02),
            "1.03" => Some(GeoVersion::V1_03),
            _ => None,
        }
    }

    /// The version token as written to the file
    pub fn as_str(&self) -> &'static str {
        match self {
            GeoVersion::V1_01 => "1.01",
            GeoVersion::V1_02 => "1.02",
            GeoVersion::V1_03 => "1.03",
        }
    }

    /// Whether the version carries the additive 1.03 sub-header fields
    pub fn is_v1_03_or_later(&self) -> bool {
        matches!(self, GeoVersion::V1_03)
    }
}

/// GEO file header: version, bounding box, units/tolerance plus an optional
/// sub-header block of descriptive metadata.
///
/// The optional fields are `None` when the input had no sub-header block;
/// the writer substitutes empty string / zero defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Header {
    pub id: Option<String>,
    pub version: GeoVersion,
    pub revision: i32,
    pub date: String,
    pub min: Vector3,
    pub max: Vector3,
    pub area: f64,
    pub unit: i32,
    pub tolerance: f64,
    pub is_3d: i32,
    pub parts_count: i32,

    // Sub-header block
    pub sub_header_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub customer: Option<String>,
    pub author: Option<String>,
    pub order_id: Option<String>,
    pub material: Option<String>,
    pub sheet_thickness: Option<f64>,
    pub processing_rule: Option<String>,
    pub processing_table: Option<String>,
    pub machine_name: Option<String>,
    pub is_rotatable: Option<i32>,
    pub is_good_for_mini_nests: Option<i32>,
    pub repetition_count: Option<i32>,

    // 1.03 and later only
    pub is_good_for_twinline: Option<i32>,
    pub should_nest_in_blocks: Option<i32>,
    pub columns_count_in_block: Option<i32>,
    pub rows_count_in_block: Option<i32>,
    pub rolling_direction: Option<i32>,
    pub is_assembly_part: Option<i32>,
    pub assembly_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        assert_eq!(GeoVersion::parse("1.01"), Some(GeoVersion::V1_01));
        assert_eq!(GeoVersion::parse("1.03"), Some(GeoVersion::V1_03));
        assert_eq!(GeoVersion::parse("1.05"), None);
        assert_eq!(GeoVersion::parse(""), None);
    }

    #[test]
    fn test_version_gating() {
        assert!(!GeoVersion::V1_01.is_v1_03_or_later());
        assert!(!GeoVersion::V1_02.is_v1_03_or_later());
        assert!(GeoVersion::V1_03.is_v1_03_or_later());
    }
}
