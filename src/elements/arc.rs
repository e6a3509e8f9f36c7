//! Circular arc element

use super::ElementCommon;

/// A circular arc given by center, start and end point keys.
///
/// `orientation` is +1 for counter-clockwise and -1 for clockwise travel
/// from start to end.  Rounding (fillet) segments share this layout;
/// `is_rounding` selects the `FIL` discriminator instead of `ARC`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArcSegment {
    pub common: ElementCommon,
    pub center_point_index: i32,
    pub start_point_index: i32,
    pub end_point_index: i32,
    pub orientation: i32,
    pub is_rounding: bool,
}
